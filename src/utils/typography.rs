//! Typographic substitutions for plain text.
//!
//! Straight quotes become curly quotes, `--`/`---` become en/em dashes and
//! `...` becomes an ellipsis. Input is unescaped text such as a lyric line;
//! Markdown prose is typeset by the parser instead.

const LEFT_DOUBLE: char = '\u{201C}';
const RIGHT_DOUBLE: char = '\u{201D}';
const LEFT_SINGLE: char = '\u{2018}';
const RIGHT_SINGLE: char = '\u{2019}';

/// Whether a quote following `prev` opens rather than closes.
fn opens_quote(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => {
            c.is_whitespace()
                || matches!(
                    c,
                    '(' | '[' | '{' | '-' | '/' | '\u{2013}' | '\u{2014}' | LEFT_DOUBLE | LEFT_SINGLE
                )
        }
    }
}

/// Whether `rest` (the text after an apostrophe) starts a decade like `80s`.
fn is_decade(rest: &[char]) -> bool {
    matches!(rest, [a, b, 's', ..] if a.is_ascii_digit() && b.is_ascii_digit())
}

/// Typeset one line of plain text.
pub fn typeset(text: &str) -> String {
    let text = text
        .replace(". . .", "\u{2026}")
        .replace("...", "\u{2026}")
        .replace("---", "\u{2014}")
        .replace("--", "\u{2013}");

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut prev = None;

    for (i, &c) in chars.iter().enumerate() {
        let typeset = match c {
            '"' if opens_quote(prev) => LEFT_DOUBLE,
            '"' => RIGHT_DOUBLE,
            '\'' if prev.is_some_and(char::is_alphanumeric) => RIGHT_SINGLE,
            '\'' if is_decade(&chars[i + 1..]) => RIGHT_SINGLE,
            '\'' if opens_quote(prev) => LEFT_SINGLE,
            '\'' => RIGHT_SINGLE,
            _ => c,
        };
        out.push(typeset);
        prev = Some(typeset);
    }

    out
}
