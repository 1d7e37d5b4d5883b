//! Markup-to-Unicode rewrite pipeline
//!
//! The converter is an ordered list of text passes. Each pass scans the
//! output of the previous one and rewrites a single markup construct into
//! styled glyphs or plain symbols. No pass can fail; a pattern that does not
//! match leaves the text untouched.
//!
//! # Pass order
//!
//! The order is part of the contract, because later patterns would misfire on
//! what earlier ones leave behind:
//!
//! 1. headings
//! 2. combined emphasis (`***x***`, `**_x_**`, `**~~x~~**`, ...)
//! 3. strikethrough
//! 4. bold, then italic
//! 5. underline
//! 6. bullet markers
//! 7. numbered list renumbering
//! 8. block quotes
//! 9. inline code
//! 10. links
//! 11. thematic breaks
//!
//! # Example
//! ```ignore
//! use glyphdown::convert;
//!
//! assert_eq!(convert("**Hi**"), "𝗛𝗶");
//! ```

pub mod blocks;
pub mod emphasis;
pub mod inline;

use log::trace;

// ─────────────────────────────────────────────────────────────────────────────
// Markup Pass
// ─────────────────────────────────────────────────────────────────────────────

/// One step of the pipeline: a named text-to-text rewrite.
#[derive(Clone, Copy)]
pub struct MarkupPass {
    name: &'static str,
    rewrite: fn(&str) -> String,
}

impl std::fmt::Debug for MarkupPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupPass").field("name", &self.name).finish()
    }
}

impl MarkupPass {
    const fn new(name: &'static str, rewrite: fn(&str) -> String) -> Self {
        Self { name, rewrite }
    }

    /// Short identifier of the construct this pass handles.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run this pass over `text`.
    pub fn apply(&self, text: &str) -> String {
        (self.rewrite)(text)
    }
}

/// Every pass, in the order they run.
pub static PASSES: &[MarkupPass] = &[
    MarkupPass::new("headings", emphasis::headings),
    MarkupPass::new("combinations", emphasis::combinations),
    MarkupPass::new("strikethrough", emphasis::strikethrough),
    MarkupPass::new("bold", emphasis::bold),
    MarkupPass::new("italic", emphasis::italic),
    MarkupPass::new("underline", emphasis::underline),
    MarkupPass::new("bullets", blocks::bullets),
    MarkupPass::new("numbered", blocks::renumber),
    MarkupPass::new("quotes", blocks::quotes),
    MarkupPass::new("inline-code", inline::inline_code),
    MarkupPass::new("links", inline::links),
    MarkupPass::new("thematic-break", blocks::thematic_break),
];

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Convert markup into styled Unicode plain text.
///
/// Total over every input: unterminated or malformed markup is left as
/// literal text, and an empty string converts to an empty string.
pub fn convert(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }

    let mut text = markup.to_string();
    for pass in PASSES {
        let next = pass.apply(&text);
        if next != text {
            trace!("pass '{}' rewrote {} -> {} bytes", pass.name(), text.len(), next.len());
        }
        text = next;
    }
    text
}

/// Run the pipeline only up to and including the pass named `last`.
///
/// Returns `None` if no pass has that name. Useful for inspecting what an
/// intermediate stage produces.
pub fn convert_through(markup: &str, last: &str) -> Option<String> {
    let end = PASSES.iter().position(|pass| pass.name() == last)?;
    Some(
        PASSES[..=end]
            .iter()
            .fold(markup.to_string(), |text, pass| pass.apply(&text)),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_plain_text_passthrough() {
        let text = "Just a normal sentence, with punctuation!\nAnd a second line.";
        assert_eq!(convert(text), text);
    }

    #[test]
    fn test_pass_order_names() {
        let names: Vec<&str> = PASSES.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "headings",
                "combinations",
                "strikethrough",
                "bold",
                "italic",
                "underline",
                "bullets",
                "numbered",
                "quotes",
                "inline-code",
                "links",
                "thematic-break",
            ]
        );
    }

    #[test]
    fn test_convert_through_stops_early() {
        assert_eq!(convert_through("**a** *b*", "bold").unwrap(), "𝗮 *b*");
        assert!(convert_through("x", "no-such-pass").is_none());
    }

    #[test]
    fn test_convert_through_last_pass_matches_convert() {
        let text = "# Title\n- **one**\n---";
        assert_eq!(convert_through(text, "thematic-break").unwrap(), convert(text));
    }

    #[test]
    fn test_stray_bold_marker_is_literal() {
        assert_eq!(convert("a ** b"), "a ** b");
    }

    #[test]
    fn test_strikethrough_and_underline_side_by_side() {
        assert_eq!(convert("~~a~~ _b_"), "a\u{336} b\u{332}");
    }

    #[test]
    fn test_bold_inside_bullet() {
        assert_eq!(convert("- **Hi** there"), "• 𝗛𝗶 there");
    }
}
