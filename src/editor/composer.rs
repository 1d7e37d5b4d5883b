//! Draft composer
//!
//! Ties the draft text, its undo history, and the converted output together.
//! Every edit goes through the history and re-runs the converter, so
//! `output()` always matches `input()`.

use log::debug;

use super::formatting::{apply_format, insert_text, FormatCommand, FormatResult};
use super::history::{History, DEFAULT_HISTORY_LIMIT};
use crate::pipeline::convert;
use crate::templates::Template;

/// An editable draft with live conversion.
#[derive(Debug, Clone)]
pub struct Composer {
    output: String,
    history: History,
}

impl Default for Composer {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl Composer {
    /// Create an empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty composer keeping at most `limit` undo steps.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            output: String::new(),
            history: History::new(limit),
        }
    }

    /// The draft markup.
    pub fn input(&self) -> &str {
        self.history.current()
    }

    /// The converted draft.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Replace the draft, recording the previous one for undo.
    pub fn set_input(&mut self, text: &str) {
        if self.history.record(text) {
            self.refresh();
        }
    }

    /// Run a formatting command on the selection and return the new cursor.
    pub fn apply_format(&mut self, selection: (usize, usize), command: FormatCommand) -> usize {
        let result = apply_format(self.input(), selection, command);
        debug!("Applied {} at {:?}", command.label(), selection);
        self.commit(result)
    }

    /// Replace the selection with literal text and return the new cursor.
    pub fn insert_text(&mut self, selection: (usize, usize), insert: &str) -> usize {
        let result = insert_text(self.input(), selection, insert);
        self.commit(result)
    }

    /// Undo the last edit. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            return false;
        }
        self.refresh();
        true
    }

    /// Redo the last undone edit. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            return false;
        }
        self.refresh();
        true
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the draft with a template. History restarts from the template.
    pub fn load_template(&mut self, template: Template) {
        debug!("Loading template: {}", template.name());
        self.history.reset(template.text());
        self.refresh();
    }

    /// Empty the draft and forget all history.
    pub fn clear(&mut self) {
        self.history.reset("");
        self.output.clear();
    }

    fn commit(&mut self, result: FormatResult) -> usize {
        self.set_input(&result.text);
        result.cursor
    }

    fn refresh(&mut self) {
        self.output = convert(self.history.current());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_composer_is_empty() {
        let composer = Composer::new();
        assert_eq!(composer.input(), "");
        assert_eq!(composer.output(), "");
        assert!(!composer.can_undo());
    }

    #[test]
    fn test_set_input_converts() {
        let mut composer = Composer::new();
        composer.set_input("**Hi**");
        assert_eq!(composer.output(), "𝗛𝗶");
    }

    #[test]
    fn test_apply_format_updates_output() {
        let mut composer = Composer::new();
        composer.set_input("Hi there");
        let cursor = composer.apply_format((0, 2), FormatCommand::Bold);
        assert_eq!(composer.input(), "**Hi** there");
        assert_eq!(cursor, 6);
        assert_eq!(composer.output(), "𝗛𝗶 there");
    }

    #[test]
    fn test_undo_redo_reconverts() {
        let mut composer = Composer::new();
        composer.set_input("a");
        composer.set_input("**a**");
        assert!(composer.undo());
        assert_eq!(composer.input(), "a");
        assert_eq!(composer.output(), "a");
        assert!(composer.redo());
        assert_eq!(composer.output(), "𝗮");
        assert!(!composer.redo());
    }

    #[test]
    fn test_insert_text() {
        let mut composer = Composer::new();
        composer.set_input("Done ");
        let cursor = composer.insert_text((5, 5), "✅");
        assert_eq!(composer.input(), "Done ✅");
        assert_eq!(cursor, composer.input().len());
    }

    #[test]
    fn test_load_template_resets_history() {
        let mut composer = Composer::new();
        composer.set_input("draft");
        composer.load_template(Template::Tip);
        assert_eq!(composer.input(), Template::Tip.text());
        assert!(!composer.can_undo());
        assert!(composer.output().starts_with("💡"));
    }

    #[test]
    fn test_clear() {
        let mut composer = Composer::new();
        composer.set_input("**x**");
        composer.clear();
        assert_eq!(composer.input(), "");
        assert_eq!(composer.output(), "");
        assert!(!composer.can_undo());
        assert!(!composer.undo());
    }

    #[test]
    fn test_history_limit() {
        let mut composer = Composer::with_history_limit(1);
        composer.set_input("1");
        composer.set_input("2");
        assert!(composer.undo());
        assert!(!composer.undo());
        assert_eq!(composer.input(), "1");
    }
}
