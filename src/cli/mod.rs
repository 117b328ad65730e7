//! Command-line interface module.
//!
//! A run loads the album file, generates the player into the output
//! directory, then copies the audio and artwork files next to it.

mod args;
pub mod copy;

pub use args::Cli;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Album;
use crate::generator;
use crate::{debug, log};
use copy::{RawAssets, copy_assets};

/// Generate the player described by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    let album = Album::load(&cli.input_file)?;
    log!(
        "album"; "{} tracks from {}",
        album.tracks.len(),
        cli.input_file.display()
    );

    let output_dir = &cli.output_dir;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let input_dir = input_dir(&cli.input_file);
    let lookup = |path: &str| -> io::Result<PathBuf> { input_dir.join(path).canonicalize() };

    let mut generated =
        generator::process(&album, output_dir, Some(&lookup), cli.render_options())?;

    let assets = RawAssets::collect(&album);
    debug!("copy"; "{} audio and artwork files", assets.len());
    copy_assets(&assets, input_dir, output_dir, &mut generated)?;

    log!("done"; "{} files in {}", generated.len(), output_dir.display());
    for file in &generated {
        debug!("done"; "- {file}");
    }
    Ok(())
}

/// Directory that album references are relative to.
fn input_dir(input_file: &Path) -> &Path {
    match input_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
