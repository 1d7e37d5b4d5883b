//! Inline code and link passes

use crate::glyphs::{mapper, StyleName};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Brackets placed around an inline code span.
pub const CODE_OPEN: char = '⟦';
pub const CODE_CLOSE: char = '⟧';

static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("inline code pattern must compile"));

static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern must compile")
});

/// `` `text` `` becomes monospace glyphs in brackets.
pub fn inline_code(text: &str) -> String {
    INLINE_CODE
        .replace_all(text, |caps: &Captures| {
            format!(
                "{}{}{}",
                CODE_OPEN,
                mapper::apply(StyleName::Code, &caps[1]),
                CODE_CLOSE
            )
        })
        .into_owned()
}

/// `[text](url)` becomes `text (url)`. The URL is not validated.
pub fn links(text: &str) -> String {
    LINK.replace_all(text, "$1 ($2)").into_owned()
}
