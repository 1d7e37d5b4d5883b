//! Getting converted posts out of the tool
//!
//! - `clipboard.rs` - Platform clipboard operations

pub mod clipboard;

pub use clipboard::{copy_text_to_clipboard, ClipboardError};
