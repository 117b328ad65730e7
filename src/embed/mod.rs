//! Embedded page templates.
//!
//! - `template` - Template types for typed variable injection
//! - `player` - the album page, its script and stylesheet
//!
//! # Usage
//!
//! ```ignore
//! use embed::player::{PLAYER_CSS, ThemeVars};
//!
//! let css = PLAYER_CSS.render(&ThemeVars::from(&album.theme));
//! ```

mod template;

pub use template::{Template, TemplateVars, substitute};

pub mod player {
    use super::{Template, TemplateVars, substitute};
    use crate::config::Theme;

    /// Variables for index.html. Every value is ready-made HTML.
    #[derive(Debug, Default)]
    pub struct IndexVars {
        pub page_title: String,
        pub album_title: String,
        pub artist: String,
        pub cover: String,
        pub about: String,
        pub tracks: String,
        pub runtime: String,
        pub fullsize: String,
    }

    impl TemplateVars for IndexVars {
        fn apply(&self, content: &str) -> String {
            substitute(
                content,
                &[
                    ("__PAGE_TITLE__", self.page_title.as_str()),
                    ("__ALBUM_TITLE__", self.album_title.as_str()),
                    ("__ARTIST__", self.artist.as_str()),
                    ("__COVER__", self.cover.as_str()),
                    ("__ABOUT__", self.about.as_str()),
                    ("__TRACKS__", self.tracks.as_str()),
                    ("__RUNTIME__", self.runtime.as_str()),
                    ("__FULLSIZE__", self.fullsize.as_str()),
                    ("__VERSION__", env!("CARGO_PKG_VERSION")),
                ],
            )
        }
    }

    /// Album page.
    pub const INDEX_HTML: Template<IndexVars> = Template::new(include_str!("player/index.html"));

    /// Variables for player.css.
    pub struct ThemeVars {
        /// Body of the `:root` rule.
        pub root: String,
    }

    impl From<&Theme> for ThemeVars {
        fn from(theme: &Theme) -> Self {
            let root = theme
                .css_properties()
                .iter()
                .map(|(name, value)| format!("    {name}: {value};"))
                .collect::<Vec<_>>()
                .join("\n");
            Self { root }
        }
    }

    impl TemplateVars for ThemeVars {
        fn apply(&self, content: &str) -> String {
            substitute(content, &[("__THEME__", self.root.as_str())])
        }
    }

    /// Player stylesheet.
    pub const PLAYER_CSS: Template<ThemeVars> = Template::new(include_str!("player/player.css"));

    /// Player script; has no variables.
    pub const PLAYER_JS: &str = include_str!("player/player.js");
}

#[cfg(test)]
mod tests {
    use super::player::*;
    use crate::config::Theme;

    #[test]
    fn test_index_placeholders_filled() {
        let html = INDEX_HTML.render(&IndexVars {
            page_title: "Night Drive".into(),
            album_title: "Night Drive".into(),
            tracks: "<li>__COVER__</li>".into(),
            ..IndexVars::default()
        });
        assert!(html.contains("<title>Night Drive</title>"));
        assert!(html.contains(env!("CARGO_PKG_VERSION")));
        // Inserted text is not rescanned
        assert!(html.contains("<li>__COVER__</li>"));
        assert!(!html.contains("__TRACKS__"));
        assert!(!html.contains("__ALBUM_TITLE__"));
    }

    #[test]
    fn test_theme_css() {
        let theme = Theme {
            highlight: "rebeccapurple".into(),
            ..Theme::default()
        };
        let css = PLAYER_CSS.render(&ThemeVars::from(&theme));
        assert!(css.contains("--highlight: rebeccapurple;"));
        assert!(!css.contains("__THEME__"));
    }

    #[test]
    fn test_script_hooks() {
        for hook in ["#tracklist", "nowplaying", "fullsizeart", "coverart", "data-disclosure"] {
            assert!(PLAYER_JS.contains(hook), "{hook}");
        }
    }
}
