//! Markdown to HTML conversion using pulldown-cmark.
//!
//! The parser's event stream is rewritten before serialization: links and
//! images are replaced by the markup from [`HtmlHooks`], raw HTML in the
//! source is demoted to escaped text, everything else is rendered by
//! `pulldown_cmark::html`.

use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, html};

use super::hooks::HtmlHooks;
use crate::asset::AssetError;

/// Options for markdown conversion
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Curly quotes, dashes and ellipses in text (never in code)
    pub smart_punctuation: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            smart_punctuation: false,
        }
    }
}

impl MarkdownOptions {
    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.smart_punctuation {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        opts
    }
}

/// Convert markdown to an HTML fragment, routing links and images through
/// `hooks`.
pub fn to_html<H: HtmlHooks + ?Sized>(
    markdown: &str,
    options: &MarkdownOptions,
    hooks: &mut H,
) -> Result<String, AssetError> {
    let mut parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let mut events = Vec::new();

    while let Some(event) = parser.next() {
        let event = match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            }) => {
                let href = link_href(link_type, dest_url);
                Event::InlineHtml(hooks.link_open(&href, &title)?.into())
            }
            Event::End(TagEnd::Link) => Event::InlineHtml("</a>".into()),
            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                let alt = collect_alt_text(&mut parser);
                Event::InlineHtml(hooks.image(&dest_url, &title, &alt)?.into())
            }
            other => other,
        };
        events.push(event);
    }

    let mut output = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut output, events.into_iter());
    Ok(output)
}

/// Link target as written, with the scheme email autolinks leave implicit.
fn link_href(link_type: LinkType, dest_url: CowStr<'_>) -> CowStr<'_> {
    match link_type {
        LinkType::Email => format!("mailto:{}", &*dest_url).into(),
        _ => dest_url,
    }
}

/// Consume an image description up to its closing tag, flattened to text.
fn collect_alt_text(parser: &mut Parser<'_>) -> String {
    let mut alt = String::new();
    let mut depth = 0usize;

    for event in parser.by_ref() {
        match event {
            Event::End(TagEnd::Image) if depth == 0 => break,
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(text) | Event::Code(text) => alt.push_str(&text),
            Event::SoftBreak | Event::HardBreak => alt.push(' '),
            _ => {}
        }
    }

    alt
}
