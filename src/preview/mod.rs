//! Preview helpers
//!
//! Support for showing converted output the way the target network renders
//! it.

pub mod hashtags;

pub use hashtags::{hashtags, split_hashtags, Segment};
