//! Copying of audio and artwork files next to the generated page.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

use crate::asset::{GeneratedFiles, is_remote};
use crate::config::{Album, Artwork};
use crate::generator::format::output_path;
use crate::logger::ProgressLine;
use crate::{debug, log};

/// Local files an album references, each listed once, in page order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RawAssets {
    pub audio: Vec<String>,
    pub artwork: Vec<String>,
}

impl RawAssets {
    pub fn collect(album: &Album) -> Self {
        let mut seen = FxHashSet::default();
        let mut assets = Self::default();

        push_artwork(album.artwork.as_ref(), &mut assets, &mut seen);
        for track in &album.tracks {
            if let Some(file) = &track.filename
                && !is_remote(file)
                && seen.insert(file.clone())
            {
                assets.audio.push(file.clone());
            }
            push_artwork(track.artwork.as_ref(), &mut assets, &mut seen);
        }
        assets
    }

    pub fn len(&self) -> usize {
        self.audio.len() + self.artwork.len()
    }
}

fn push_artwork(art: Option<&Artwork>, assets: &mut RawAssets, seen: &mut FxHashSet<String>) {
    for file in art.map(Artwork::files).unwrap_or_default() {
        if !is_remote(file) && seen.insert(file.to_string()) {
            assets.artwork.push(file.to_string());
        }
    }
}

/// Copy `assets` from `input_dir` into `output_dir`, recording each copy.
///
/// A file whose output path is already taken is skipped with a warning, so
/// generated pages are never overwritten.
pub fn copy_assets(
    assets: &RawAssets,
    input_dir: &Path,
    output_dir: &Path,
    generated: &mut GeneratedFiles,
) -> Result<usize> {
    let progress = ProgressLine::new(&[
        ("audio", assets.audio.len()),
        ("artwork", assets.artwork.len()),
    ]);

    let mut copied = 0;
    let groups = [("audio", &assets.audio), ("artwork", &assets.artwork)];
    for (kind, files) in groups {
        for reference in files {
            if copy_one(reference, input_dir, output_dir, generated)? {
                copied += 1;
            }
            progress.inc(kind);
        }
    }

    progress.finish();
    Ok(copied)
}

fn copy_one(
    reference: &str,
    input_dir: &Path,
    output_dir: &Path,
    generated: &mut GeneratedFiles,
) -> Result<bool> {
    let Some(rel) = output_path(reference) else {
        return Ok(false);
    };
    if generated.contains(&rel) {
        log!("warning"; "skipping `{}`: `{}` is already written", reference, rel);
        return Ok(false);
    }

    let from = input_dir.join(reference);
    let to = output_dir.join(&rel);
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::copy(&from, &to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;

    debug!("copy"; "{} -> {}", reference, rel);
    generated.insert(rel);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn album(json: &str) -> Album {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_collect_dedups_and_skips_remote() {
        let album = album(
            r#"{
                "title": "A",
                "artwork": {"1x": "cover.jpg", "2x": "cover@2x.jpg", "fullsize": "https://cdn.example/big.jpg"},
                "tracks": [
                    {"title": "1", "filename": "one.mp3", "artwork": {"1x": "cover.jpg"}},
                    {"title": "2", "filename": "two.mp3", "artwork": {"1x": "two.jpg"}},
                    {"title": "3"},
                    {"title": "4", "filename": "one.mp3"}
                ]
            }"#,
        );
        let assets = RawAssets::collect(&album);
        assert_eq!(assets.audio, vec!["one.mp3", "two.mp3"]);
        assert_eq!(assets.artwork, vec!["cover.jpg", "cover@2x.jpg", "two.jpg"]);
        assert_eq!(assets.len(), 5);
    }

    #[test]
    fn test_copy_assets() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir_all(input.join("art")).unwrap();
        fs::create_dir_all(&output).unwrap();
        fs::write(input.join("one.mp3"), b"mp3").unwrap();
        fs::write(input.join("art/cover.jpg"), b"jpg").unwrap();

        let assets = RawAssets {
            audio: vec!["one.mp3".into()],
            artwork: vec!["art/cover.jpg".into()],
        };
        let mut generated = GeneratedFiles::new();
        let copied = copy_assets(&assets, &input, &output, &mut generated).unwrap();

        assert_eq!(copied, 2);
        assert!(generated.contains("one.mp3"));
        assert!(generated.contains("art/cover.jpg"));
        assert_eq!(fs::read(output.join("art/cover.jpg")).unwrap(), b"jpg");
    }

    #[test]
    fn test_copy_never_overwrites_generated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), b"user file").unwrap();
        let output = dir.path().join("out");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("index.html"), b"page").unwrap();

        let mut generated = GeneratedFiles::new();
        generated.insert("index.html");
        let assets = RawAssets {
            audio: vec!["index.html".into()],
            artwork: vec![],
        };
        let copied = copy_assets(&assets, dir.path(), &output, &mut generated).unwrap();

        assert_eq!(copied, 0);
        assert_eq!(fs::read(output.join("index.html")).unwrap(), b"page");
    }

    #[test]
    fn test_copy_missing_source() {
        let dir = TempDir::new().unwrap();
        let assets = RawAssets {
            audio: vec!["gone.mp3".into()],
            artwork: vec![],
        };
        let mut generated = GeneratedFiles::new();
        let err = copy_assets(&assets, dir.path(), dir.path(), &mut generated).unwrap_err();
        assert!(err.to_string().contains("gone.mp3"));
        assert!(generated.is_empty());
    }
}
