//! Property tests for the conversion invariants.

use glyphdown::convert;
use proptest::prelude::*;

/// Text with no markup characters at all.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z,!? \n]{0,120}"
}

/// A word the style tables fully cover.
fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,24}"
}

proptest! {
    #[test]
    fn plain_text_is_unchanged(text in plain_text()) {
        prop_assert_eq!(convert(&text), text);
    }

    #[test]
    fn conversion_is_idempotent_on_plain_text(text in plain_text()) {
        let once = convert(&text);
        prop_assert_eq!(convert(&once), once);
    }

    #[test]
    fn styled_words_are_not_restyled(w in word()) {
        let once = convert(&format!("**{w}** *{w}* `{w}`"));
        prop_assert_eq!(convert(&once), once);
    }

    #[test]
    fn bold_keeps_length(w in word()) {
        let output = convert(&format!("**{w}**"));
        prop_assert_eq!(output.chars().count(), w.chars().count());
        prop_assert!(output.chars().all(|c| !c.is_ascii()));
    }

    #[test]
    fn italic_keeps_length(w in word()) {
        let output = convert(&format!("*{w}*"));
        prop_assert_eq!(output.chars().count(), w.chars().count());
    }

    #[test]
    fn code_keeps_length_plus_brackets(w in word()) {
        let output = convert(&format!("`{w}`"));
        prop_assert_eq!(output.chars().count(), w.chars().count() + 2);
    }

    #[test]
    fn underline_doubles_length(w in word()) {
        let output = convert(&format!("_{w}_"));
        prop_assert_eq!(output.chars().count(), 2 * w.chars().count());
    }

    #[test]
    fn strikethrough_doubles_length(w in word()) {
        let output = convert(&format!("~~{w}~~"));
        prop_assert_eq!(output.chars().count(), 2 * w.chars().count());
    }

    #[test]
    fn unmapped_characters_pass_through(text in "[你好世界🎉😀éß ]{0,40}") {
        let output = convert(&format!("**a**{text}*b*"));
        prop_assert_eq!(output, format!("𝗮{text}𝘣"));
    }

    #[test]
    fn never_panics(text in "\\PC{0,200}") {
        let _ = convert(&text);
    }
}
