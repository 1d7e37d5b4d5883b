//! Configuration module
//!
//! This module handles user preferences, including serialization to JSON and
//! persistent storage in the platform configuration directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
