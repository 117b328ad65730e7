//! Album file loading.
//!
//! The album file is the whole configuration of a run. It is JSON unless
//! its extension is `.toml`.
//!
//! ```text
//! album.json ──► parse (unknown fields warned) ──► Album::validate ──► Album
//! ```

mod error;
mod section;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{Album, Artwork, Theme, Track};

use std::fs;
use std::path::Path;

use crate::log;

/// Album file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumFormat {
    Json,
    Toml,
}

impl AlbumFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl Album {
    /// Read, parse and validate an album file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (album, ignored) = Self::parse_with_ignored(&content, AlbumFormat::from_path(path))?;
        if !ignored.is_empty() {
            print_unknown_fields_warning(&ignored, path);
        }

        album.validate()?;
        Ok(album)
    }

    /// Parse album content, collecting any unknown fields.
    pub fn parse_with_ignored(
        content: &str,
        format: AlbumFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let on_ignored = |path: serde_ignored::Path| ignored.push(path.to_string());

        let album: Self = match format {
            AlbumFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, on_ignored)?
            }
            AlbumFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let album: Self = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
                deserializer.end()?;
                album
            }
        };
        Ok((album, ignored))
    }
}

fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!(
        "warning"; "unknown fields in {}, ignoring: {}",
        display_path,
        fields.join(", ")
    );
}

// ============================================================================
// tests
// ============================================================================
