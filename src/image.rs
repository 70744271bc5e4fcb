//! References to images handed around by the capabilities.

use std::fmt;
use std::path::{Path, PathBuf};

/// Location of an image: either a `file://` URI or a plain filesystem path.
///
/// Camera captures, sticker assets and exported files are all passed as
/// references; pixel data never flows through the editing core.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Builds a `file://` URI for an absolute path, falling back to the raw
    /// path for relative ones.
    pub fn from_path(path: &Path) -> Self {
        match url::Url::from_file_path(path) {
            Ok(url) => Self(url.to_string()),
            Err(()) => Self(path.to_string_lossy().into_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Resolves the reference to a filesystem path.
    ///
    /// `file://` URIs are percent-decoded; any other `scheme://` yields `None`.
    pub fn to_path(&self) -> Option<PathBuf> {
        if self.0.contains("://") {
            let url = url::Url::parse(&self.0).ok()?;
            return url.to_file_path().ok();
        }
        Some(PathBuf::from(&self.0))
    }

    /// The reference with any `file://` prefix removed, as some deep link
    /// consumers expect.
    pub fn without_file_scheme(&self) -> &str {
        self.0.strip_prefix("file://").unwrap_or(&self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_uri_resolves_with_percent_decoding() {
        let image = ImageRef::new("file:///tmp/my%20photo.jpg");
        assert_eq!(image.to_path(), Some(PathBuf::from("/tmp/my photo.jpg")));
    }

    #[test]
    fn plain_paths_pass_through() {
        let image = ImageRef::new("assets/stickers/heart.png");
        assert_eq!(
            image.to_path(),
            Some(PathBuf::from("assets/stickers/heart.png"))
        );
    }

    #[test]
    fn non_file_schemes_have_no_path() {
        assert_eq!(ImageRef::new("content://media/42").to_path(), None);
    }

    #[test]
    fn from_path_round_trips_absolute_paths() {
        let image = ImageRef::from_path(Path::new("/tmp/shot.jpg"));
        assert_eq!(image.as_str(), "file:///tmp/shot.jpg");
        assert_eq!(image.without_file_scheme(), "/tmp/shot.jpg");
    }
}
