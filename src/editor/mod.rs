//! Draft editing
//!
//! Markup insertion commands, undo history, and the composer that keeps a
//! draft and its converted output in sync.

mod composer;
mod formatting;
mod history;

pub use composer::Composer;
pub use formatting::{apply_format, insert_text, FormatCommand, FormatResult};
pub use history::{History, DEFAULT_HISTORY_LIMIT};
