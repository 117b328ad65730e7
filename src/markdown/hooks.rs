//! Rendering hooks for the HTML emitted around Markdown content.
//!
//! [`HtmlHooks`] is the seam where the album renderer customizes output:
//! link and image markup for prose, and the verse markup used by lyrics.

use crate::asset::{AssetError, AssetResolver};
use crate::utils::html::escape_attr;

/// Markup hooks used by the prose and lyrics renderers.
pub trait HtmlHooks {
    /// Opening `<a>` tag for a link. The closing tag is always `</a>`.
    fn link_open(&mut self, url: &str, title: &str) -> Result<String, AssetError>;

    /// Complete `<img>` tag for an image with plain-text `alt`.
    fn image(&mut self, url: &str, title: &str, alt: &str) -> Result<String, AssetError>;

    fn verse_open(&self) -> &str {
        "<p class=\"verse\">"
    }

    fn verse_break(&self) -> &str {
        "<br>"
    }

    fn verse_close(&self) -> &str {
        "</p>"
    }
}

/// Opening anchor tag that always opens in a new browsing context without
/// leaking the referrer or `window.opener`.
pub fn external_link(url: &str, title: &str) -> String {
    let mut tag = format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"",
        escape_attr(url)
    );
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", escape_attr(title)));
    }
    tag.push('>');
    tag
}

/// `<img>` tag with escaped attributes.
pub fn image_tag(src: &str, title: &str, alt: &str) -> String {
    let mut tag = format!(
        "<img src=\"{}\" alt=\"{}\"",
        escape_attr(src),
        escape_attr(alt)
    );
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", escape_attr(title)));
    }
    tag.push('>');
    tag
}

/// Hooks for album text: images are staged through the asset resolver.
pub struct AlbumHooks<'r, 'a> {
    resolver: &'r mut AssetResolver<'a>,
}

impl<'r, 'a> AlbumHooks<'r, 'a> {
    pub fn new(resolver: &'r mut AssetResolver<'a>) -> Self {
        Self { resolver }
    }
}

impl HtmlHooks for AlbumHooks<'_, '_> {
    fn link_open(&mut self, url: &str, title: &str) -> Result<String, AssetError> {
        Ok(external_link(url, title))
    }

    fn image(&mut self, url: &str, title: &str, alt: &str) -> Result<String, AssetError> {
        let src = self.resolver.resolve(url)?;
        Ok(image_tag(&src, title, alt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::GeneratedFiles;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_external_link_without_title() {
        assert_eq!(
            external_link("https://x.example/", ""),
            "<a href=\"https://x.example/\" target=\"_blank\" rel=\"noopener noreferrer\">"
        );
    }

    #[test]
    fn test_external_link_with_title() {
        let tag = external_link("https://x.example/?a=1&b=2", "A \"title\"");
        assert!(tag.contains("href=\"https://x.example/?a=1&amp;b=2\""));
        assert!(tag.contains("target=\"_blank\""));
        assert!(tag.contains("rel=\"noopener noreferrer\""));
        assert!(tag.contains("title=\"A &quot;title&quot;\""));
    }

    #[test]
    fn test_image_tag() {
        assert_eq!(
            image_tag("a.png", "", "An <alt>"),
            "<img src=\"a.png\" alt=\"An &lt;alt&gt;\">"
        );
        assert_eq!(
            image_tag("a.png", "T", ""),
            "<img src=\"a.png\" alt=\"\" title=\"T\">"
        );
    }

    #[test]
    fn test_album_hooks_stage_images() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cover.png"), b"png").unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();

        let src = dir.path().to_path_buf();
        let lookup = |path: &str| -> io::Result<PathBuf> { Ok(src.join(path)) };
        let mut generated = GeneratedFiles::new();
        let mut resolver = AssetResolver::new(&out, Some(&lookup), &mut generated);
        let mut hooks = AlbumHooks::new(&mut resolver);

        assert_eq!(
            hooks.image("cover.png", "", "Cover").unwrap(),
            "<img src=\"image-cover.png\" alt=\"Cover\">"
        );
        assert_eq!(
            hooks.image("https://x.example/a.png", "", "").unwrap(),
            "<img src=\"https://x.example/a.png\" alt=\"\">"
        );
    }
}
