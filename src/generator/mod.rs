//! Album page generation.
//!
//! One call to [`process`] is one run: a single [`MarkdownRenderer`] renders
//! every text field, then the page, script and stylesheet are written.
//!
//! - [`page`] - text rendering and `index.html` variables
//! - [`format`] - artwork `<img>`, durations, asset URLs

pub mod format;
pub mod page;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::asset::{FileLookup, GeneratedFiles};
use crate::config::Album;
use crate::embed::player::{INDEX_HTML, PLAYER_CSS, PLAYER_JS, ThemeVars};
use crate::markdown::{MarkdownRenderer, RenderOptions};
use crate::{debug, log};

/// Generate the player for `album` into `output_dir`.
///
/// `lookup` maps asset references found in Markdown to source files. It is
/// only consulted for local images; without it such an image fails the run
/// before any page file is written.
///
/// Output paths of the album's audio and artwork are reserved first, so a
/// staged image never takes a name a copied file needs.
///
/// Returns every file written, staged images included.
pub fn process(
    album: &Album,
    output_dir: &Path,
    lookup: Option<&dyn FileLookup>,
    options: RenderOptions,
) -> Result<GeneratedFiles> {
    let mut generated = GeneratedFiles::new();
    for reference in album.referenced_files() {
        if let Some(rel) = format::output_path(reference) {
            generated.reserve(rel);
        }
    }

    let text = {
        let mut renderer = MarkdownRenderer::new(output_dir, lookup, &mut generated, options);
        page::render_text(album, &mut renderer)
            .with_context(|| format!("Failed to render text of album `{}`", album.title))?
    };
    debug!("render"; "{} staged assets", generated.len());

    let outputs = [
        ("index.html", INDEX_HTML.render(&page::index_vars(album, &text))),
        ("player.js", PLAYER_JS.to_string()),
        ("player.css", PLAYER_CSS.render(&ThemeVars::from(&album.theme))),
    ];

    for (name, content) in outputs {
        let path = output_dir.join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log!("write"; "{}", name);
        generated.insert(name);
    }

    Ok(generated)
}
