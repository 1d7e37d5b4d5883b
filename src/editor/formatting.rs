//! Markup insertion commands
//!
//! Toolbar-style helpers that wrap the selected part of a draft in the
//! markup the converter understands. Selections are byte offsets into the
//! text; offsets that land inside a multi-byte character are snapped to the
//! surrounding character boundaries, so no input can cause a panic.
//!
//! # Usage
//! ```ignore
//! use glyphdown::editor::{apply_format, FormatCommand};
//!
//! let result = apply_format("Hello world", (0, 5), FormatCommand::Bold);
//! assert_eq!(result.text, "**Hello** world");
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Format Command Enum
// ─────────────────────────────────────────────────────────────────────────────

/// Formatting commands that insert markup into a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    /// Bold text (**text**)
    Bold,
    /// Italic text (*text*)
    Italic,
    /// Underlined text (_text_)
    Underline,
    /// Strikethrough (~~text~~)
    Strikethrough,
    /// Bullet list, one `•` item per non-blank line
    Bullet,
    /// Numbered list, one item per non-blank line
    Numbered,
    /// Block quote (> text)
    Quote,
    /// Inline code, or a fenced block for multi-line selections
    Code,
}

impl FormatCommand {
    /// Get all commands.
    pub fn all() -> &'static [FormatCommand] {
        &[
            FormatCommand::Bold,
            FormatCommand::Italic,
            FormatCommand::Underline,
            FormatCommand::Strikethrough,
            FormatCommand::Bullet,
            FormatCommand::Numbered,
            FormatCommand::Quote,
            FormatCommand::Code,
        ]
    }

    /// Get the display label for this command.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::Bullet => "Bullet List",
            Self::Numbered => "Numbered List",
            Self::Quote => "Quote",
            Self::Code => "Code",
        }
    }

    /// Text inserted when the command runs without a selection.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Bold => "**Bold Text**",
            Self::Italic => "*Italic Text*",
            Self::Underline => "_Underlined Text_",
            Self::Strikethrough => "~~Strikethrough Text~~",
            Self::Bullet => "• Bullet point",
            Self::Numbered => "1. Numbered item",
            Self::Quote => "> Quote text",
            Self::Code => "`code`",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Format Result
// ─────────────────────────────────────────────────────────────────────────────

/// Result of applying a formatting command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    /// The new text after formatting
    pub text: String,
    /// Cursor position (byte offset) just after the inserted markup
    pub cursor: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Applying Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Apply a formatting command to the `(start, end)` selection of `text`.
///
/// The selection is replaced by its formatted version, or by the command's
/// placeholder when it is empty.
pub fn apply_format(text: &str, selection: (usize, usize), command: FormatCommand) -> FormatResult {
    let (start, end) = snap_selection(text, selection);
    let selected = &text[start..end];

    let formatted = if selected.is_empty() {
        command.placeholder().to_string()
    } else {
        format_selection(selected, command)
    };

    replace_range(text, start, end, &formatted)
}

/// Replace the selection with literal text, such as an emoji.
pub fn insert_text(text: &str, selection: (usize, usize), insert: &str) -> FormatResult {
    let (start, end) = snap_selection(text, selection);
    replace_range(text, start, end, insert)
}

fn replace_range(text: &str, start: usize, end: usize, insert: &str) -> FormatResult {
    let new_text = format!("{}{}{}", &text[..start], insert, &text[end..]);
    FormatResult {
        text: new_text,
        cursor: start + insert.len(),
    }
}

/// Build the markup for a non-empty selection.
fn format_selection(selected: &str, command: FormatCommand) -> String {
    match command {
        FormatCommand::Bold => format!("**{}**", selected),
        FormatCommand::Italic => format!("*{}*", selected),
        FormatCommand::Underline => format!("_{}_", selected),
        FormatCommand::Strikethrough => format!("~~{}~~", selected),
        FormatCommand::Bullet => prefix_lines(selected, "• "),
        FormatCommand::Quote => prefix_lines(selected, "> "),
        FormatCommand::Numbered => selected
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line.trim()))
            .collect::<Vec<_>>()
            .join("\n"),
        FormatCommand::Code => {
            if selected.contains('\n') {
                format!("```\n{}\n```", selected)
            } else {
                format!("`{}`", selected)
            }
        }
    }
}

/// Prefix every non-blank line with `marker`, trimming it; blank lines stay as they are.
fn prefix_lines(selected: &str, marker: &str) -> String {
    selected
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", marker, trimmed)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Clamp a selection to the text, order it, and snap it outward to
/// character boundaries.
fn snap_selection(text: &str, (a, b): (usize, usize)) -> (usize, usize) {
    let (start, end) = if a > b { (b, a) } else { (a, b) };
    (floor_boundary(text, start), ceil_boundary(text, end))
}

fn floor_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Inline Command Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bold_with_selection() {
        let result = apply_format("Hello world", (0, 5), FormatCommand::Bold);
        assert_eq!(result.text, "**Hello** world");
        assert_eq!(result.cursor, 9);
    }

    #[test]
    fn test_bold_without_selection_inserts_placeholder() {
        let result = apply_format("Hi ", (3, 3), FormatCommand::Bold);
        assert_eq!(result.text, "Hi **Bold Text**");
        assert_eq!(result.cursor, result.text.len());
    }

    #[test]
    fn test_italic_with_selection() {
        let result = apply_format("Hello world", (6, 11), FormatCommand::Italic);
        assert_eq!(result.text, "Hello *world*");
    }

    #[test]
    fn test_underline_and_strikethrough() {
        assert_eq!(
            apply_format("a b", (2, 3), FormatCommand::Underline).text,
            "a _b_"
        );
        assert_eq!(
            apply_format("a b", (0, 1), FormatCommand::Strikethrough).text,
            "~~a~~ b"
        );
    }

    #[test]
    fn test_reversed_selection() {
        let result = apply_format("Hello world", (5, 0), FormatCommand::Bold);
        assert_eq!(result.text, "**Hello** world");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Line Command Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bullet_lines() {
        let text = "one\n\n  two ";
        let result = apply_format(text, (0, text.len()), FormatCommand::Bullet);
        assert_eq!(result.text, "• one\n\n• two");
    }

    #[test]
    fn test_numbered_skips_blank_lines() {
        let text = "alpha\n\nbeta\ngamma";
        let result = apply_format(text, (0, text.len()), FormatCommand::Numbered);
        assert_eq!(result.text, "1. alpha\n2. beta\n3. gamma");
    }

    #[test]
    fn test_quote_lines() {
        let text = "to be\nor not";
        let result = apply_format(text, (0, text.len()), FormatCommand::Quote);
        assert_eq!(result.text, "> to be\n> or not");
    }

    #[test]
    fn test_code_inline_and_block() {
        assert_eq!(
            apply_format("run ls", (4, 6), FormatCommand::Code).text,
            "run `ls`"
        );
        let text = "a\nb";
        assert_eq!(
            apply_format(text, (0, 3), FormatCommand::Code).text,
            "```\na\nb\n```"
        );
    }

    #[test]
    fn test_placeholders() {
        for command in FormatCommand::all() {
            let result = apply_format("", (0, 0), *command);
            assert_eq!(result.text, command.placeholder());
        }
    }

    #[test]
    fn test_labels_not_empty() {
        for command in FormatCommand::all() {
            assert!(!command.label().is_empty());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Insert Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_insert_emoji_replaces_selection() {
        let result = insert_text("Party time", (6, 10), "🎉");
        assert_eq!(result.text, "Party 🎉");
        assert_eq!(result.cursor, 6 + "🎉".len());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // UTF-8 Safety Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bold_norwegian_chars() {
        let result = apply_format("Hei på deg", (4, 7), FormatCommand::Bold);
        assert!(result.text.contains("**på**"));
    }

    #[test]
    fn test_bold_snaps_inside_multibyte_char() {
        // Byte 7 is inside "你" (bytes 6..9)
        let result = apply_format("Hello 你好 World", (7, 12), FormatCommand::Bold);
        assert!(result.text.contains("**你好**"));
    }

    #[test]
    fn test_no_panic_on_any_byte_index() {
        let text = "Hei på deg 你好 🎉";
        for i in 0..=text.len() + 5 {
            for j in 0..=text.len() + 5 {
                for command in FormatCommand::all() {
                    let _ = apply_format(text, (i, j), *command);
                }
                let _ = insert_text(text, (i, j), "x");
            }
        }
    }
}
