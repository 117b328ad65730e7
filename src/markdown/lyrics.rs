//! Line-oriented lyrics markup.
//!
//! Each run of non-empty lines becomes one verse paragraph with `<br>`
//! between lines. Lyrics are escaped but never parsed as Markdown.

use std::borrow::Cow;

use super::hooks::HtmlHooks;
use crate::utils::html::escape;
use crate::utils::typography::typeset;

/// Render lyric lines into verse paragraphs, typesetting each line first
/// when `smart` is set.
pub fn to_html<H: HtmlHooks + ?Sized>(lines: &[&str], hooks: &H, smart: bool) -> String {
    let mut output = String::new();
    let mut in_verse = false;

    for line in lines {
        if line.is_empty() {
            if in_verse {
                output.push_str(hooks.verse_close());
                in_verse = false;
            }
            continue;
        }

        if in_verse {
            output.push_str(hooks.verse_break());
        } else {
            output.push_str(hooks.verse_open());
            in_verse = true;
        }
        let line = if smart {
            Cow::Owned(typeset(line))
        } else {
            Cow::Borrowed(*line)
        };
        output.push_str(&escape(&line));
    }

    if in_verse {
        output.push_str(hooks.verse_close());
    }

    output
}
