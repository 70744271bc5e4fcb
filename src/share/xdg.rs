//! URL handoff through the freedesktop `xdg-utils` tools.

use std::process::{Command, Stdio};

use tokio::task;

use crate::error::{Error, Result};

/// Extracts the scheme of `uri` (`instagram-stories` for
/// `instagram-stories://share`).
pub fn uri_scheme(uri: &str) -> Option<&str> {
    let (scheme, _) = uri.split_once(':')?;
    let valid = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// Asks `xdg-mime` whether a handler is registered for the URI's scheme.
pub async fn can_open(uri: &str) -> bool {
    let Some(scheme) = uri_scheme(uri) else {
        log::warn!("Cannot probe malformed URI '{}'", uri);
        return false;
    };
    let mime = format!("x-scheme-handler/{}", scheme);

    let result = task::spawn_blocking(move || {
        Command::new("xdg-mime")
            .args(["query", "default", &mime])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
    })
    .await;

    match result {
        Ok(Ok(output)) if output.status.success() => {
            let handler = String::from_utf8_lossy(&output.stdout).trim().to_string();
            log::debug!("Handler for {}: '{}'", uri, handler);
            !handler.is_empty()
        }
        Ok(Ok(output)) => {
            log::debug!("xdg-mime exited with {}", output.status);
            false
        }
        Ok(Err(err)) => {
            log::warn!("Failed to run xdg-mime: {}", err);
            false
        }
        Err(err) => {
            log::warn!("xdg-mime task failed: {}", err);
            false
        }
    }
}

/// Launches the registered handler for `url` with `xdg-open`.
///
/// Waits for `xdg-open` to exit; a non-zero status is a
/// [`Error::ShareFailure`] carrying its stderr.
pub async fn open(url: &str) -> Result<()> {
    open_with("xdg-open", url).await
}

async fn open_with(program: &str, url: &str) -> Result<()> {
    let program = program.to_string();
    let url = url.to_string();
    let output = task::spawn_blocking(move || {
        Command::new(&program)
            .arg(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
    })
    .await
    .map_err(|e| Error::ShareFailure(format!("Open task failed: {}", e)))?
    .map_err(|e| Error::ShareFailure(format!("Failed to run xdg-open: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::ShareFailure(format!(
            "xdg-open exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    log::debug!("xdg-open completed successfully");
    Ok(())
}
