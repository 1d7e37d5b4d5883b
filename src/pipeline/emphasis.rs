//! Heading and emphasis passes
//!
//! Combination spans run before single spans so that their delimiters are
//! consumed whole, and strikethrough runs before bold and italic so that
//! `~~` spans are not broken up by the looser asterisk patterns.

use crate::glyphs::{apply_all, mapper, StyleName};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use StyleName::{Bold, Italic, Strikethrough, Underline};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("emphasis pattern must compile")
}

// ─────────────────────────────────────────────────────────────────────────────
// Headings
// ─────────────────────────────────────────────────────────────────────────────

/// Heading prefixes, deepest first.
static HEADINGS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        compile(r"(?m)^### (.*)$"),
        compile(r"(?m)^## (.*)$"),
        compile(r"(?m)^# (.*)$"),
    ]
});

/// `#`, `##` and `###` lines become bold text with the prefix stripped.
pub fn headings(text: &str) -> String {
    HEADINGS
        .iter()
        .fold(text.to_string(), |acc, re| restyle(re, &acc, &[Bold]))
}

// ─────────────────────────────────────────────────────────────────────────────
// Combined Emphasis
// ─────────────────────────────────────────────────────────────────────────────

const BOLD_ITALIC_STRIKETHROUGH: &[StyleName] = &[Bold, Italic, Strikethrough];
const BOLD_ITALIC: &[StyleName] = &[Bold, Italic];
const BOLD_STRIKETHROUGH: &[StyleName] = &[Bold, Strikethrough];
const ITALIC_STRIKETHROUGH: &[StyleName] = &[Italic, Strikethrough];

/// Combination spans in priority order, with the styles applied innermost first.
static COMBINATIONS: Lazy<Vec<(Regex, &'static [StyleName])>> = Lazy::new(|| {
    vec![
        (compile(r"\*\*\*~~(.+?)~~\*\*\*"), BOLD_ITALIC_STRIKETHROUGH),
        (compile(r"\*\*\*(.+?)\*\*\*"), BOLD_ITALIC),
        (compile(r"\*\*_(.+?)_\*\*"), BOLD_ITALIC),
        (compile(r"\*__(.+?)__\*"), BOLD_ITALIC),
        (compile(r"\*\*~~(.+?)~~\*\*"), BOLD_STRIKETHROUGH),
        (compile(r"\*~~(.+?)~~\*"), ITALIC_STRIKETHROUGH),
    ]
});

/// Spans that stack two or three styles.
pub fn combinations(text: &str) -> String {
    COMBINATIONS
        .iter()
        .fold(text.to_string(), |acc, (re, styles)| {
            restyle(re, &acc, styles)
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Single Emphasis
// ─────────────────────────────────────────────────────────────────────────────

static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| compile(r"~~(.+?)~~"));
static BOLD: Lazy<Regex> = Lazy::new(|| compile(r"\*\*(.+?)\*\*"));
static ITALIC: Lazy<Regex> = Lazy::new(|| compile(r"\*(.+?)\*"));

/// `~~text~~`
pub fn strikethrough(text: &str) -> String {
    restyle(&STRIKETHROUGH, text, &[Strikethrough])
}

/// `**text**`
pub fn bold(text: &str) -> String {
    restyle(&BOLD, text, &[Bold])
}

/// `*text*`
pub fn italic(text: &str) -> String {
    restyle(&ITALIC, text, &[Italic])
}

/// Replace every match of `re` with its first capture rendered in `styles`.
fn restyle(re: &Regex, text: &str, styles: &[StyleName]) -> String {
    re.replace_all(text, |caps: &Captures| apply_all(styles, &caps[1]))
        .into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Underline
// ─────────────────────────────────────────────────────────────────────────────

/// `_text_`, ignoring underscores inside words such as `snake_case_name`.
///
/// An opening `_` must not follow a word character and a closing `_` must not
/// precede one. The inner text is a run of non-underscore characters or
/// doubled `__`, and never crosses a line break.
pub fn underline(text: &str) -> String {
    if !text.contains('_') {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let opens = chars[i] == '_' && !(i > 0 && is_word_char(chars[i - 1]));
        if opens {
            if let Some(close) = find_underline_close(&chars, i) {
                let inner: String = chars[i + 1..close].iter().collect();
                out.push_str(&mapper::apply(Underline, &inner));
                i = close + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Find the closing `_` for an opener at `open`.
fn find_underline_close(chars: &[char], open: usize) -> Option<usize> {
    let mut pos = open + 1;
    loop {
        match *chars.get(pos)? {
            '\n' => return None,
            '_' => {
                let next = chars.get(pos + 1).copied();
                if pos > open + 1 && !next.is_some_and(is_word_char) {
                    return Some(pos);
                }
                if next == Some('_') {
                    pos += 2;
                } else {
                    return None;
                }
            }
            _ => pos += 1,
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
