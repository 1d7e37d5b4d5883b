//! User settings and preferences
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

use crate::editor::DEFAULT_HISTORY_LIMIT;
use crate::templates::Template;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences.
///
/// All fields have sensible defaults via the `Default` trait and `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Copy every converted post to the clipboard
    pub copy_to_clipboard: bool,

    /// Maximum number of undo steps kept while composing
    pub history_limit: usize,

    /// Template used when none is named
    pub default_template: Template,

    /// List the hashtags found after converting
    pub show_hashtags: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            copy_to_clipboard: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_template: Template::default(),
            show_hashtags: false,
        }
    }
}

impl Settings {
    /// Minimum undo history size.
    pub const MIN_HISTORY_LIMIT: usize = 1;
    /// Maximum undo history size.
    pub const MAX_HISTORY_LIMIT: usize = 1000;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// This is useful after loading settings from a file that might have
    /// been manually edited with invalid values.
    pub fn sanitize(&mut self) {
        self.history_limit = self
            .history_limit
            .clamp(Self::MIN_HISTORY_LIMIT, Self::MAX_HISTORY_LIMIT);
    }

    /// Load settings and sanitize them to ensure validity.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
