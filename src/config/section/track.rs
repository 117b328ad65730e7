//! Track entries.

use serde::{Deserialize, Serialize};

use super::Artwork;
use crate::config::ConfigDiagnostics;
use crate::markdown::TextInput;

/// One entry of the track list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    /// Audio file, relative to the album file.
    pub filename: Option<String>,
    pub artwork: Option<Artwork>,
    #[serde(default)]
    pub explicit: bool,
    /// Length in seconds.
    pub duration: Option<f64>,
    pub lyrics: Option<TextInput>,
    pub about: Option<TextInput>,
}

impl Track {
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let field = format!("tracks[{index}]");

        if self.title.trim().is_empty() {
            diag.error(format!("{field}.title"), "must not be empty");
        }
        if let Some(filename) = &self.filename
            && filename.trim().is_empty()
        {
            diag.error_with_hint(
                format!("{field}.filename"),
                "must not be empty",
                "omit the field for a track without audio",
            );
        }
        if let Some(duration) = self.duration
            && !(duration.is_finite() && duration >= 0.0)
        {
            diag.error(
                format!("{field}.duration"),
                "must be a non-negative number of seconds",
            );
        }
        if let Some(artwork) = &self.artwork {
            artwork.validate(&format!("{field}.artwork"), diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_track() {
        let track: Track = serde_json::from_str(r#"{"title": "Intro"}"#).unwrap();
        assert_eq!(track.title, "Intro");
        assert!(!track.explicit);
        assert!(track.filename.is_none());
        assert!(track.lyrics.is_none());
    }

    #[test]
    fn test_integer_duration() {
        let track: Track = serde_json::from_str(r#"{"title": "A", "duration": 185}"#).unwrap();
        assert_eq!(track.duration, Some(185.0));
    }

    #[test]
    fn test_lyrics_as_lines_or_text() {
        let lines: Track =
            serde_json::from_str(r#"{"title": "A", "lyrics": ["one", "", "two"]}"#).unwrap();
        let raw: Track = serde_json::from_str(r#"{"title": "A", "lyrics": "one\n\ntwo"}"#).unwrap();
        assert_eq!(
            lines.lyrics.unwrap().lines(),
            raw.lyrics.unwrap().lines()
        );
    }

    #[test]
    fn test_validate() {
        let track = Track {
            title: " ".into(),
            filename: Some(String::new()),
            duration: Some(-1.0),
            ..Track::default()
        };
        let mut diag = ConfigDiagnostics::new();
        track.validate(3, &mut diag);
        let fields: Vec<&str> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["tracks[3].title", "tracks[3].filename", "tracks[3].duration"]
        );
    }
}
