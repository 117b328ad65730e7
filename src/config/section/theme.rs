//! Player colors and font.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Theme settings, emitted as CSS custom properties in `player.css`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub foreground: String,
    pub background: String,
    pub highlight: String,
    pub font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: "#1b1b1b".into(),
            background: "#f7f5f0".into(),
            highlight: "#c0392b".into(),
            font: "system-ui, sans-serif".into(),
        }
    }
}

impl Theme {
    /// `(property, value)` pairs for the `:root` rule.
    pub fn css_properties(&self) -> [(&'static str, &str); 4] {
        [
            ("--foreground", self.foreground.as_str()),
            ("--background", self.background.as_str()),
            ("--highlight", self.highlight.as_str()),
            ("--font", self.font.as_str()),
        ]
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (name, value) in [
            ("foreground", &self.foreground),
            ("background", &self.background),
            ("highlight", &self.highlight),
            ("font", &self.font),
        ] {
            let field = format!("theme.{name}");
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            } else if value.contains([';', '{', '}', '<', '>']) {
                diag.error_with_hint(
                    field,
                    "not a single CSS value",
                    "remove `;`, braces and angle brackets",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme_uses_defaults() {
        let theme: Theme = serde_json::from_str(r##"{"highlight": "#0af"}"##).unwrap();
        assert_eq!(theme.highlight, "#0af");
        assert_eq!(theme.foreground, Theme::default().foreground);
        assert_eq!(theme.font, Theme::default().font);
    }

    #[test]
    fn test_css_properties() {
        let theme = Theme::default();
        let props = theme.css_properties();
        assert_eq!(props[2], ("--highlight", "#c0392b"));
    }

    #[test]
    fn test_validate_rejects_css_injection() {
        let theme = Theme {
            background: "red; } body { display: none".into(),
            font: " ".into(),
            ..Theme::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        let fields: Vec<&str> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["theme.background", "theme.font"]);
    }
}
