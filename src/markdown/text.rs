//! Text fields as they appear in album files.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A multi-line text field: either one string or a list of lines.
///
/// Both spellings mean the same thing; renderers only ever see the
/// normalized forms from [`TextInput::lines`] and [`TextInput::joined`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Raw(String),
    Lines(Vec<String>),
}

impl TextInput {
    /// The text as a sequence of lines.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Raw(text) => text.lines().collect(),
            Self::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// The text as one newline-separated string.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Self::Raw(text) => Cow::Borrowed(text),
            Self::Lines(lines) => Cow::Owned(lines.join("\n")),
        }
    }

    /// Whether there is no visible text at all.
    pub fn is_blank(&self) -> bool {
        self.lines().iter().all(|line| line.trim().is_empty())
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<&[&str]> for TextInput {
    fn from(lines: &[&str]) -> Self {
        Self::Lines(lines.iter().map(|s| (*s).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_and_lines_agree() {
        let raw = TextInput::from("Hello\nworld\n\nGoodbye");
        let lines = TextInput::from(&["Hello", "world", "", "Goodbye"][..]);
        assert_eq!(raw.lines(), lines.lines());
        assert_eq!(raw.joined(), lines.joined());
    }

    #[test]
    fn test_crlf_lines() {
        let raw = TextInput::from("a\r\nb\r\n");
        assert_eq!(raw.lines(), ["a", "b"]);
    }

    #[test]
    fn test_deserialize_both_forms() {
        let raw: TextInput = serde_json::from_str("\"one\\ntwo\"").unwrap();
        assert_eq!(raw, TextInput::Raw("one\ntwo".to_string()));

        let lines: TextInput = serde_json::from_str("[\"one\", \"two\"]").unwrap();
        assert_eq!(
            lines,
            TextInput::Lines(vec!["one".to_string(), "two".to_string()])
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(TextInput::from("").is_blank());
        assert!(TextInput::from(&["", "   "][..]).is_blank());
        assert!(!TextInput::from("x").is_blank());
    }
}
