//! Style mapper
//!
//! Applies one style to every code point of a string. Substitution styles
//! replace each character one-for-one through the glyph table; combining
//! styles keep the character and append a mark after it.

use super::table::{lookup, StyleName};

/// Render `text` in `style`.
///
/// Characters without a table entry pass through unchanged, so punctuation,
/// whitespace and existing non-ASCII text are never altered.
pub fn apply(style: StyleName, text: &str) -> String {
    match style.combining_mark() {
        Some(mark) => {
            let mut out = String::with_capacity(text.len() * 3);
            for ch in text.chars() {
                out.push(ch);
                out.push(mark);
            }
            out
        }
        None => text
            .chars()
            .map(|ch| lookup(style, ch).unwrap_or(ch))
            .collect(),
    }
}

/// Apply several styles in order, each to the previous result.
pub fn apply_all(styles: &[StyleName], text: &str) -> String {
    styles
        .iter()
        .fold(text.to_string(), |acc, style| apply(*style, &acc))
}
