//! Rendering of album text fields.
//!
//! - [`convert`] - Markdown → HTML via `pulldown-cmark` with hooked links/images
//! - [`lyrics`] - verse paragraphs for lyric lines
//! - [`hooks`] - [`HtmlHooks`] and the album implementation
//!
//! One [`MarkdownRenderer`] exists per generation run. It owns the
//! [`AssetResolver`], so slug numbering and staged images are shared by
//! every field rendered in that run.

pub mod convert;
pub mod hooks;
pub mod lyrics;
mod text;

use std::path::PathBuf;

pub use convert::MarkdownOptions;
use hooks::AlbumHooks;
pub use text::TextInput;

use crate::asset::{AssetError, AssetResolver, FileLookup, GeneratedFiles};
use crate::debug;

/// Rendering policy for one run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub markdown: MarkdownOptions,
    /// Typographic pass on `about` text, overriding `markdown.smart_punctuation`.
    pub smart_prose: bool,
    /// Typographic pass on lyrics.
    pub smart_lyrics: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            markdown: MarkdownOptions::default(),
            smart_prose: true,
            smart_lyrics: false,
        }
    }
}

/// Renders `about` and `lyrics` fields for one generation run.
pub struct MarkdownRenderer<'a> {
    resolver: AssetResolver<'a>,
    options: RenderOptions,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        lookup: Option<&'a dyn FileLookup>,
        generated: &'a mut GeneratedFiles,
        options: RenderOptions,
    ) -> Self {
        Self {
            resolver: AssetResolver::new(output_dir, lookup, generated),
            options,
        }
    }

    /// Render Markdown prose.
    ///
    /// Fails only when an image cannot be staged; the caller should abort
    /// the run since the page would reference a missing file.
    pub fn render_about(&mut self, text: &TextInput) -> Result<String, AssetError> {
        let markdown = text.joined();
        debug!("markdown"; "about: {} bytes", markdown.len());

        let options = MarkdownOptions {
            smart_punctuation: self.options.smart_prose,
            ..self.options.markdown.clone()
        };
        let mut hooks = AlbumHooks::new(&mut self.resolver);
        convert::to_html(&markdown, &options, &mut hooks)
    }

    /// Render lyrics as verse paragraphs.
    pub fn render_lyrics(&mut self, text: &TextInput) -> String {
        let lines = text.lines();
        debug!("markdown"; "lyrics: {} lines", lines.len());

        let hooks = AlbumHooks::new(&mut self.resolver);
        lyrics::to_html(&lines, &hooks, self.options.smart_lyrics)
    }

    #[cfg(test)]
    pub fn resolver(&self) -> &AssetResolver<'a> {
        &self.resolver
    }
}
