//! Hashtag detection for previews
//!
//! Splits text into plain runs and hashtags so a front end can highlight the
//! tags the way the target network will.

/// A piece of previewed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Ordinary text, including whitespace runs
    Text(&'a str),
    /// A `#tag` token
    Hashtag(&'a str),
}

impl<'a> Segment<'a> {
    /// The underlying text of the segment.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Hashtag(s) => s,
        }
    }
}

/// Split `text` into whitespace runs and tokens, tagging `#` tokens longer
/// than one character. Concatenating the segments gives back `text`.
pub fn split_hashtags(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (i, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        if in_space.is_some_and(|prev| prev != is_space) {
            segments.push(classify(&text[start..i]));
            start = i;
        }
        in_space = Some(is_space);
    }
    if start < text.len() {
        segments.push(classify(&text[start..]));
    }

    segments
}

/// All hashtags in `text`, in order of appearance.
pub fn hashtags(text: &str) -> Vec<&str> {
    split_hashtags(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Hashtag(tag) => Some(tag),
            Segment::Text(_) => None,
        })
        .collect()
}

fn classify(token: &str) -> Segment<'_> {
    if token.starts_with('#') && token.chars().count() > 1 {
        Segment::Hashtag(token)
    } else {
        Segment::Text(token)
    }
}
