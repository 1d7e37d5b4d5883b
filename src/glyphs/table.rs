//! Static glyph substitution tables
//!
//! Each substitution style maps a source character to a single replacement
//! code point from one of the Unicode "Mathematical Alphanumeric Symbols"
//! blocks. The tables are built once, on first use, and never mutated.
//!
//! Bold and italic also carry entries for each other's output so that
//! applying one on top of the other lands in the bold-italic block.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Style Names
// ─────────────────────────────────────────────────────────────────────────────

/// Combining low line, appended after every character for underline.
pub const COMBINING_UNDERLINE: char = '\u{0332}';

/// Combining long stroke overlay, appended after every character for strikethrough.
pub const COMBINING_STRIKETHROUGH: char = '\u{0336}';

/// The closed set of text styles the converter can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

impl StyleName {
    /// The mark appended after each character, for styles rendered with
    /// combining marks instead of substitution.
    pub fn combining_mark(&self) -> Option<char> {
        match self {
            StyleName::Underline => Some(COMBINING_UNDERLINE),
            StyleName::Strikethrough => Some(COMBINING_STRIKETHROUGH),
            StyleName::Bold | StyleName::Italic | StyleName::Code => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block Start Code Points
// ─────────────────────────────────────────────────────────────────────────────

const SANS_BOLD_UPPER: u32 = 0x1D5D4;
const SANS_BOLD_LOWER: u32 = 0x1D5EE;
const SANS_ITALIC_UPPER: u32 = 0x1D608;
const SANS_ITALIC_LOWER: u32 = 0x1D622;
const SANS_BOLD_ITALIC_UPPER: u32 = 0x1D63C;
const SANS_BOLD_ITALIC_LOWER: u32 = 0x1D656;
const MONOSPACE_UPPER: u32 = 0x1D670;
const MONOSPACE_LOWER: u32 = 0x1D68A;

const SANS_DIGITS: u32 = 0x1D7E2;
const SANS_BOLD_DIGITS: u32 = 0x1D7EC;
const MONOSPACE_DIGITS: u32 = 0x1D7F6;

// ─────────────────────────────────────────────────────────────────────────────
// Glyph Table
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable per-style character substitution maps.
#[derive(Debug, Default)]
pub struct GlyphTable {
    bold: HashMap<char, char>,
    italic: HashMap<char, char>,
    code: HashMap<char, char>,
}

static GLYPHS: Lazy<GlyphTable> = Lazy::new(GlyphTable::build);

/// Look up the substitute for `ch` in the process-wide table.
///
/// `None` means "no substitution": the caller emits `ch` unchanged.
pub fn lookup(style: StyleName, ch: char) -> Option<char> {
    GLYPHS.get(style, ch)
}

impl GlyphTable {
    /// Build every substitution map.
    pub fn build() -> Self {
        let mut table = Self::default();

        // Bold: plain ASCII, plus italic output promoted to bold italic
        map_run(&mut table.bold, 'A', 26, SANS_BOLD_UPPER);
        map_run(&mut table.bold, 'a', 26, SANS_BOLD_LOWER);
        map_run(&mut table.bold, '0', 10, SANS_BOLD_DIGITS);
        map_block(&mut table.bold, SANS_ITALIC_UPPER, 26, SANS_BOLD_ITALIC_UPPER);
        map_block(&mut table.bold, SANS_ITALIC_LOWER, 26, SANS_BOLD_ITALIC_LOWER);
        map_block(&mut table.bold, SANS_DIGITS, 10, SANS_BOLD_DIGITS);

        // Italic: plain ASCII, plus bold output promoted to bold italic.
        // Unicode has no italic digits; the sans-serif digits match the letters.
        map_run(&mut table.italic, 'A', 26, SANS_ITALIC_UPPER);
        map_run(&mut table.italic, 'a', 26, SANS_ITALIC_LOWER);
        map_run(&mut table.italic, '0', 10, SANS_DIGITS);
        map_block(&mut table.italic, SANS_BOLD_UPPER, 26, SANS_BOLD_ITALIC_UPPER);
        map_block(&mut table.italic, SANS_BOLD_LOWER, 26, SANS_BOLD_ITALIC_LOWER);

        map_run(&mut table.code, 'A', 26, MONOSPACE_UPPER);
        map_run(&mut table.code, 'a', 26, MONOSPACE_LOWER);
        map_run(&mut table.code, '0', 10, MONOSPACE_DIGITS);

        table
    }

    /// Look up a substitute in this table.
    pub fn get(&self, style: StyleName, ch: char) -> Option<char> {
        let map = match style {
            StyleName::Bold => &self.bold,
            StyleName::Italic => &self.italic,
            StyleName::Code => &self.code,
            StyleName::Underline | StyleName::Strikethrough => return None,
        };
        map.get(&ch).copied()
    }

    /// Number of entries for a style (zero for combining styles).
    #[cfg(test)]
    fn len(&self, style: StyleName) -> usize {
        match style {
            StyleName::Bold => self.bold.len(),
            StyleName::Italic => self.italic.len(),
            StyleName::Code => self.code.len(),
            StyleName::Underline | StyleName::Strikethrough => 0,
        }
    }
}

/// Map `count` consecutive ASCII characters starting at `first` onto a block.
fn map_run(map: &mut HashMap<char, char>, first: char, count: u32, target: u32) {
    map_block(map, first as u32, count, target);
}

/// Map `count` consecutive code points starting at `source` onto a block.
fn map_block(map: &mut HashMap<char, char>, source: u32, count: u32, target: u32) {
    for offset in 0..count {
        if let (Some(from), Some(to)) = (
            char::from_u32(source + offset),
            char::from_u32(target + offset),
        ) {
            map.insert(from, to);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
