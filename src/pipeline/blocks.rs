//! Line-level passes: lists, block quotes and thematic breaks
//!
//! Numbered lists and quotes are handled as runs of lines rather than single
//! matches, so these passes walk the text line by line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bullet glyph for unordered list items.
pub const BULLET: char = '•';

/// Opening and closing glyphs around a merged block quote.
pub const QUOTE_OPEN: &str = "❝";
pub const QUOTE_CLOSE: &str = "❞";

/// Visual separator that replaces a `---` line.
pub const SEPARATOR: &str = "▰▰▰▰▰▰▰▰▰▰";

static BULLET_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*[-*+][ \t]+(.*)$").expect("bullet pattern must compile")
});

static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*\d+\.[ \t]+(.*)$").expect("numbered pattern must compile")
});

static QUOTE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*>[ \t]?(.*)$").expect("quote pattern must compile"));

static THEMATIC_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^---$").expect("separator pattern must compile"));

// ─────────────────────────────────────────────────────────────────────────────
// Lists
// ─────────────────────────────────────────────────────────────────────────────

/// `-`, `*` and `+` item markers become `•`.
pub fn bullets(text: &str) -> String {
    BULLET_LINE
        .replace_all(text, format!("{} ${{1}}", BULLET).as_str())
        .into_owned()
}

/// Renumber each run of numbered lines from 1.
///
/// Blank lines inside a run keep it going; any other non-numbered line ends
/// it, and the next numbered line starts a new run.
pub fn renumber(text: &str) -> String {
    let mut counter = 0usize;
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            if let Some(caps) = NUMBERED_LINE.captures(line) {
                counter += 1;
                format!("{}. {}", counter, &caps[1])
            } else {
                if !line.trim().is_empty() {
                    counter = 0;
                }
                line.to_string()
            }
        })
        .collect();
    lines.join("\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Block Quotes
// ─────────────────────────────────────────────────────────────────────────────

/// Merge each run of `>` lines into one decorated quote block.
pub fn quotes(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut quoted: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        match QUOTE_LINE.captures(line).and_then(|caps| caps.get(1)) {
            Some(body) => quoted.push(body.as_str()),
            None => {
                flush_quote(&mut quoted, &mut out);
                out.push(line.to_string());
            }
        }
    }
    flush_quote(&mut quoted, &mut out);

    out.join("\n")
}

fn flush_quote(quoted: &mut Vec<&str>, out: &mut Vec<String>) {
    if quoted.is_empty() {
        return;
    }
    out.push(format!("{} {} {}", QUOTE_OPEN, quoted.join("\n"), QUOTE_CLOSE));
    quoted.clear();
}

// ─────────────────────────────────────────────────────────────────────────────
// Thematic Break
// ─────────────────────────────────────────────────────────────────────────────

/// A line that is exactly `---` becomes the separator glyph run.
pub fn thematic_break(text: &str) -> String {
    THEMATIC_BREAK.replace_all(text, SEPARATOR).into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_markers() {
        assert_eq!(bullets("- one\n* two\n+ three"), "• one\n• two\n• three");
    }

    #[test]
    fn test_bullet_strips_indent_keeps_blank_lines() {
        assert_eq!(bullets("intro\n\n  - item"), "intro\n\n• item");
    }

    #[test]
    fn test_bullet_needs_space_after_marker() {
        assert_eq!(bullets("-nope\n---"), "-nope\n---");
    }

    #[test]
    fn test_bullet_content_with_dollar() {
        assert_eq!(bullets("- costs $5"), "• costs $5");
    }

    #[test]
    fn test_renumber_out_of_order() {
        assert_eq!(renumber("5. a\n7. b\n2. c"), "1. a\n2. b\n3. c");
    }

    #[test]
    fn test_renumber_blank_lines_continue_run() {
        assert_eq!(renumber("3. a\n\n9. b"), "1. a\n\n2. b");
    }

    #[test]
    fn test_renumber_text_line_resets_run() {
        assert_eq!(
            renumber("4. a\n4. b\nbreak\n8. c"),
            "1. a\n2. b\nbreak\n1. c"
        );
    }

    #[test]
    fn test_renumber_requires_dot_and_space() {
        assert_eq!(renumber("2024 was good\n3.14"), "2024 was good\n3.14");
    }

    #[test]
    fn test_quote_single_line() {
        assert_eq!(quotes("> wise words"), "❝ wise words ❞");
    }

    #[test]
    fn test_quote_run_merges() {
        assert_eq!(quotes("before\n> one\n>two\nafter"), "before\n❝ one\ntwo ❞\nafter");
    }

    #[test]
    fn test_quote_separate_runs() {
        assert_eq!(quotes("> a\n\n> b"), "❝ a ❞\n\n❝ b ❞");
    }

    #[test]
    fn test_thematic_break() {
        assert_eq!(thematic_break("a\n---\nb"), format!("a\n{}\nb", SEPARATOR));
    }

    #[test]
    fn test_thematic_break_exact_line_only() {
        assert_eq!(thematic_break("----\n --- \nx---"), "----\n --- \nx---");
    }

    #[test]
    fn test_separator_is_ten_glyphs() {
        assert_eq!(SEPARATOR.chars().count(), 10);
    }
}
