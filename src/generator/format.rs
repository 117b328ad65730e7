//! Small formatting helpers for the album page.

use std::path::{Component, Path};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::asset::is_remote;
use crate::config::Artwork;
use crate::utils::html::escape_attr;

/// Characters escaped in a URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// ============================================================================
// Asset paths
// ============================================================================

/// Output-relative path of a file the album references, or `None` when the
/// reference is remote.
///
/// Relative paths keep their layout. Absolute paths and paths that climb
/// out of the album directory are flattened to their file name.
pub fn output_path(reference: &str) -> Option<String> {
    if is_remote(reference) {
        return None;
    }

    let path = Path::new(reference);
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return path.file_name().map(|name| name.to_string_lossy().into_owned());
            }
        }
    }
    (!parts.is_empty()).then(|| parts.join("/"))
}

/// URL for a referenced file, as written into the page.
pub fn asset_href(reference: &str) -> String {
    match output_path(reference) {
        Some(path) => path
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/"),
        None => reference.to_string(),
    }
}

// ============================================================================
// Artwork
// ============================================================================

/// `<img>` for an artwork spec.
///
/// `srcset` lists every density variant when there is more than one, and
/// `data-fullsize` carries the fullsize image for the player script.
/// `attrs` are appended as given.
pub fn artwork_img(art: &Artwork, attrs: &[(&str, &str)]) -> String {
    let base = art.base().unwrap_or_default();
    let mut tag = format!(
        "<img alt=\"\" src=\"{}\" loading=\"lazy\"",
        escape_attr(&asset_href(base))
    );

    if let Some(width) = art.width() {
        tag.push_str(&format!(" width=\"{width}\""));
    }
    if let Some(height) = art.height() {
        tag.push_str(&format!(" height=\"{height}\""));
    }

    let densities = art.densities();
    if densities.len() > 1 {
        let srcset = densities
            .iter()
            .map(|(scale, file)| format!("{} {scale}", asset_href(file)))
            .collect::<Vec<_>>()
            .join(", ");
        tag.push_str(&format!(" srcset=\"{}\"", escape_attr(&srcset)));
    }

    if let Some(full) = art.fullsize() {
        tag.push_str(&format!(
            " data-fullsize=\"{}\"",
            escape_attr(&asset_href(full))
        ));
    }

    for (key, value) in attrs {
        tag.push_str(&format!(" {}=\"{}\"", key, escape_attr(value)));
    }

    tag.push('>');
    tag
}

// ============================================================================
// Durations
// ============================================================================

/// Whole hours, minutes and seconds of a duration.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // rounded, clamped to >= 0
fn split_seconds(seconds: f64) -> (u64, u64, u64) {
    let total = if seconds.is_finite() {
        seconds.max(0.0).round() as u64
    } else {
        0
    };
    (total / 3600, total / 60 % 60, total % 60)
}

/// Clock-style duration: `m:ss`, or `h:mm:ss` from one hour up.
pub fn timestamp(seconds: f64) -> String {
    match split_seconds(seconds) {
        (0, m, s) => format!("{m}:{s:02}"),
        (h, m, s) => format!("{h}:{m:02}:{s:02}"),
    }
}

/// HTML5 duration string for `<time datetime>`: `Xm Ys` or `Xh Ym Zs`.
pub fn datetime(seconds: f64) -> String {
    match split_seconds(seconds) {
        (0, m, s) => format!("{m}m {s}s"),
        (h, m, s) => format!("{h}h {m}m {s}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(json: &str) -> Artwork {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("cover.jpg").as_deref(), Some("cover.jpg"));
        assert_eq!(output_path("./art/cover.jpg").as_deref(), Some("art/cover.jpg"));
        assert_eq!(output_path("../shared/cover.jpg").as_deref(), Some("cover.jpg"));
        assert_eq!(output_path("/abs/cover.jpg").as_deref(), Some("cover.jpg"));
        assert_eq!(output_path("https://cdn.example/cover.jpg"), None);
        assert_eq!(output_path(""), None);
    }

    #[test]
    fn test_asset_href_encodes() {
        assert_eq!(asset_href("01 intro #1.mp3"), "01%20intro%20%231.mp3");
        assert_eq!(asset_href("art/my cover.jpg"), "art/my%20cover.jpg");
        assert_eq!(
            asset_href("https://cdn.example/a b.jpg"),
            "https://cdn.example/a b.jpg"
        );
    }

    #[test]
    fn test_artwork_img_minimal() {
        let art = artwork(r#"{"1x": "cover.jpg"}"#);
        assert_eq!(
            artwork_img(&art, &[]),
            "<img alt=\"\" src=\"cover.jpg\" loading=\"lazy\">"
        );
    }

    #[test]
    fn test_artwork_img_full() {
        let art = artwork(
            r#"{"1x": "c.jpg", "2x": "c@2x.jpg", "width": 300, "height": 300, "fullsize": "big.jpg"}"#,
        );
        assert_eq!(
            artwork_img(&art, &[("id", "coverart"), ("title", "a \"b\"")]),
            "<img alt=\"\" src=\"c.jpg\" loading=\"lazy\" width=\"300\" height=\"300\" \
             srcset=\"c.jpg 1x, c@2x.jpg 2x\" data-fullsize=\"big.jpg\" \
             id=\"coverart\" title=\"a &quot;b&quot;\">"
        );
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(timestamp(0.0), "0:00");
        assert_eq!(timestamp(65.0), "1:05");
        assert_eq!(timestamp(59.6), "1:00");
        assert_eq!(timestamp(3600.0), "1:00:00");
        assert_eq!(timestamp(3725.0), "1:02:05");
    }

    #[test]
    fn test_datetime() {
        assert_eq!(datetime(273.0), "4m 33s");
        assert_eq!(datetime(3725.4), "1h 2m 5s");
        assert_eq!(datetime(-5.0), "0m 0s");
    }
}
