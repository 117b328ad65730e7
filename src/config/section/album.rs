//! The album document.
//!
//! # Example
//!
//! ```json
//! {
//!   "title": "Night Drive",
//!   "artist": "The Examples",
//!   "artist_url": "https://examples.band/",
//!   "artwork": { "1x": "cover.jpg", "2x": "cover@2x.jpg" },
//!   "about": "Recorded *live* in one take.",
//!   "tracks": [
//!     { "title": "Intro", "filename": "01 intro.mp3", "duration": 94 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{Artwork, Theme, Track};
use crate::config::{ConfigDiagnostics, ConfigError};
use crate::markdown::TextInput;

/// Everything needed to generate one player page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Album {
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub artist_url: Option<String>,
    pub album_url: Option<String>,
    pub artwork: Option<Artwork>,
    #[serde(default)]
    pub theme: Theme,
    pub about: Option<TextInput>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Album {
    /// Check the whole document, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if self.title.trim().is_empty() {
            diag.error("title", "must not be empty");
        }
        for (name, url) in [("artist_url", &self.artist_url), ("album_url", &self.album_url)] {
            if let Some(url) = url
                && url::Url::parse(url).is_err()
            {
                diag.error_with_hint(name, "not an absolute URL", "include the scheme, e.g. https://");
            }
        }
        if let Some(artwork) = &self.artwork {
            artwork.validate("artwork", &mut diag);
        }
        self.theme.validate(&mut diag);
        for (index, track) in self.tracks.iter().enumerate() {
            track.validate(index, &mut diag);
        }

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Audio and artwork files the page refers to, remote ones included.
    pub fn referenced_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.artwork.as_ref().map(Artwork::files).unwrap_or_default();
        for track in &self.tracks {
            files.extend(track.filename.as_deref());
            files.extend(track.artwork.as_ref().map(Artwork::files).unwrap_or_default());
        }
        files
    }

    /// Total length of tracks with a known duration.
    pub fn total_duration(&self) -> f64 {
        self.tracks.iter().filter_map(|t| t.duration).sum()
    }
}
