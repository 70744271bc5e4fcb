//! Deep link construction for the external story composer.

use super::types::{SharePlatform, ShareSettings};
use crate::error::{Error, Result};
use crate::image::ImageRef;
use urlencoding::encode;

/// Builds the URL that delivers `image` and `caption` to the external app.
///
/// - [`SharePlatform::Ios`]:
///   `<library_uri>?AssetPath=<image>&InstagramCaption=<caption>`
/// - [`SharePlatform::Android`]:
///   `<probe_uri>?source_application=<app id>&background_image=<path>`
///   followed by both background colors and, when non-empty, the caption.
///   The image is passed as a bare path (no `file://`), and a missing app id
///   is a [`Error::ShareFailure`].
///
/// Every value is percent-encoded.
pub fn build_share_url(
    settings: &ShareSettings,
    image: &ImageRef,
    caption: &str,
) -> Result<String> {
    match settings.platform {
        SharePlatform::Ios => Ok(format!(
            "{}?AssetPath={}&InstagramCaption={}",
            settings.library_uri,
            encode(image.as_str()),
            encode(caption)
        )),
        SharePlatform::Android => {
            let app_id = settings
                .app_id
                .as_deref()
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| {
                    Error::ShareFailure("no source application id configured".to_string())
                })?;

            let mut url = format!(
                "{}?source_application={}",
                settings.probe_uri,
                encode(app_id)
            );
            url.push_str(&format!(
                "&background_image={}",
                encode(image.without_file_scheme())
            ));
            url.push_str(&format!(
                "&background_bottom_color={}",
                encode(&settings.background_bottom_color)
            ));
            url.push_str(&format!(
                "&background_top_color={}",
                encode(&settings.background_top_color)
            ));
            if !caption.is_empty() {
                url.push_str(&format!("&caption={}", encode(caption)));
            }
            Ok(url)
        }
    }
}
