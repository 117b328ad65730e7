//! Asset resolution error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while staging assets referenced from rendered text.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A local file was referenced but the caller supplied no way to find it.
    #[error("local asset `{0}` is referenced but no file lookup is configured")]
    NoFileLookup(String),

    /// The file lookup itself failed; passed through untouched.
    #[error(transparent)]
    Lookup(#[from] io::Error),

    #[error("failed to copy `{}` to `{}`", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AssetError {
    /// Whether this is a caller configuration problem rather than a data or
    /// filesystem problem.
    #[cfg(test)]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::NoFileLookup(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::ErrorKind;

    #[test]
    fn test_no_lookup_display() {
        let err = AssetError::NoFileLookup("photo.jpg".to_string());
        assert!(err.is_config_error());
        assert!(err.to_string().contains("photo.jpg"));
    }

    #[test]
    fn test_lookup_is_transparent() {
        let err = AssetError::from(io::Error::new(ErrorKind::NotFound, "no such file: a.png"));
        assert!(!err.is_config_error());
        assert_eq!(err.to_string(), "no such file: a.png");
    }

    #[test]
    fn test_copy_keeps_source() {
        let err = AssetError::Copy {
            from: PathBuf::from("/src/a.png"),
            to: PathBuf::from("/out/image-a.png"),
            source: io::Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        let display = err.to_string();
        assert!(display.contains("/src/a.png"));
        assert!(display.contains("/out/image-a.png"));
        assert!(err.source().is_some());
    }
}
