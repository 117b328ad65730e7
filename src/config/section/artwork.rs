//! Artwork specs.
//!
//! ```json
//! "artwork": { "1x": "cover.jpg", "2x": "cover@2x.jpg", "fullsize": "cover-full.jpg", "width": 300, "height": 300 }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// One entry of an artwork spec: a file reference or a pixel dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtworkValue {
    Pixels(u32),
    File(String),
}

/// Size tag → value. `1x` is the image every page falls back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Artwork(BTreeMap<String, ArtworkValue>);

impl Artwork {
    pub fn file(&self, tag: &str) -> Option<&str> {
        match self.0.get(tag) {
            Some(ArtworkValue::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn pixels(&self, tag: &str) -> Option<u32> {
        match self.0.get(tag) {
            Some(ArtworkValue::Pixels(px)) => Some(*px),
            _ => None,
        }
    }

    pub fn base(&self) -> Option<&str> {
        self.file("1x")
    }

    pub fn fullsize(&self) -> Option<&str> {
        self.file("fullsize")
    }

    pub fn width(&self) -> Option<u32> {
        self.pixels("width")
    }

    pub fn height(&self) -> Option<u32> {
        self.pixels("height")
    }

    /// Density variants (`1x`, `2x`, `1.5x`, ...) in ascending order.
    pub fn densities(&self) -> Vec<(&str, &str)> {
        let mut variants: Vec<(f32, &str, &str)> = self
            .0
            .iter()
            .filter_map(|(tag, value)| {
                let scale = density(tag)?;
                match value {
                    ArtworkValue::File(file) => Some((scale, tag.as_str(), file.as_str())),
                    ArtworkValue::Pixels(_) => None,
                }
            })
            .collect();
        variants.sort_by(|a, b| a.0.total_cmp(&b.0));
        variants.into_iter().map(|(_, tag, file)| (tag, file)).collect()
    }

    /// Every file the spec references, densities first, then `fullsize`.
    pub fn files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.densities().into_iter().map(|(_, f)| f).collect();
        if let Some(full) = self.fullsize() {
            files.push(full);
        }
        files
    }

    /// Report malformed entries under `field`.
    pub fn validate(&self, field: &str, diag: &mut ConfigDiagnostics) {
        if self.base().is_none() {
            diag.error_with_hint(
                format!("{field}.1x"),
                "artwork needs a `1x` image file",
                "add \"1x\": \"cover.jpg\"",
            );
        }

        for (tag, value) in &self.0 {
            let path = format!("{field}.{tag}");
            match (tag.as_str(), value) {
                ("width" | "height", ArtworkValue::Pixels(_)) => {}
                ("width" | "height", ArtworkValue::File(_)) => {
                    diag.error(path, "must be an integer pixel size");
                }
                ("fullsize", ArtworkValue::File(file)) => check_file(&path, file, diag),
                (tag, ArtworkValue::File(file)) if density(tag).is_some() => {
                    check_file(&path, file, diag);
                }
                (tag, ArtworkValue::Pixels(_)) if tag == "fullsize" || density(tag).is_some() => {
                    diag.error(path, "must be an image file name");
                }
                _ => diag.error_with_hint(
                    path,
                    "unknown artwork tag",
                    "use `<n>x`, `fullsize`, `width` or `height`",
                ),
            }
        }
    }
}

/// Scale factor of a density tag such as `2x`.
fn density(tag: &str) -> Option<f32> {
    let scale: f32 = tag.strip_suffix('x')?.parse().ok()?;
    (scale.is_finite() && scale > 0.0).then_some(scale)
}

fn check_file(path: &str, file: &str, diag: &mut ConfigDiagnostics) {
    if file.trim().is_empty() {
        diag.error(path, "file name must not be empty");
    }
}
