//! Unicode glyph styling
//!
//! - `table.rs` - Static substitution tables per style
//! - `mapper.rs` - Applies a style to a whole string

pub mod mapper;
pub mod table;

pub use mapper::{apply, apply_all};
pub use table::{lookup, GlyphTable, StyleName, COMBINING_STRIKETHROUGH, COMBINING_UNDERLINE};
