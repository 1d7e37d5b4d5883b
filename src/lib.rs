//! glyphdown - Markdown-flavoured markup to styled Unicode text
//!
//! Social-network post bodies accept plain text only. glyphdown rewrites a
//! small Markdown-like dialect into Unicode look-alikes: mathematical
//! alphanumeric letters for bold, italic and monospace, combining marks for
//! underline and strikethrough, and symbol characters for lists, quotes and
//! rules.
//!
//! ```
//! assert_eq!(glyphdown::convert("**Hi**"), "𝗛𝗶");
//! ```
//!
//! # Architecture
//!
//! - `glyphs` - character tables and the style mapper
//! - `pipeline` - the ordered rewrite passes behind [`convert`]
//! - `editor` - markup insertion, undo history, and the [`editor::Composer`]
//! - `templates` - built-in starter posts
//! - `preview` - hashtag detection
//! - `export` - clipboard output
//! - `config` - persisted user settings
//! - `error` - crate-wide error type

pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod glyphs;
pub mod pipeline;
pub mod preview;
pub mod templates;

pub use error::{Error, Result};
pub use pipeline::convert;
pub use templates::Template;
