//! Phrase groups and caption events.

use serde::{Deserialize, Serialize};

use crate::word::WordToken;

/// A short run of consecutive words bundled for progressive captioning.
///
/// `text` is the trimmed word texts joined by single spaces; `start` and
/// `end` come from the first and last word. Groups are derived views over a
/// contiguous slice of the timeline and never alter the tokens themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseGroup {
    /// Joined display text of the whole group.
    pub text: String,
    /// Start time of the first word, in seconds.
    pub start: f64,
    /// End time of the last word, in seconds.
    pub end: f64,
    /// The words making up this group, in narration order.
    pub words: Vec<WordToken>,
}

impl PhraseGroup {
    /// Build a group from a non-empty run of words.
    ///
    /// Returns `None` for an empty run; grouping never produces one.
    pub fn from_words(words: Vec<WordToken>) -> Option<Self> {
        let start = words.first()?.start;
        let end = words.last()?.end;
        let text = words
            .iter()
            .map(|w| w.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self {
            text,
            start,
            end,
            words,
        })
    }

    /// Duration of the group in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Number of words in the group.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// One timed caption overlay event.
///
/// Events within a group carry cumulative text: the first event shows the
/// group's first word, the second shows the first two, and so on, each
/// displayed for the duration of the newly revealed word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEvent {
    /// Text visible on screen while this event is active.
    pub visible_text: String,
    /// Offset from the start of the assembled output, in seconds
    /// (word start plus the lead-in duration).
    pub start_offset: f64,
    /// How long the event stays on screen, in seconds.
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_joins_trimmed_text() {
        let group = PhraseGroup::from_words(vec![
            WordToken::new(" Once", 0.0, 0.3),
            WordToken::new("upon ", 0.3, 0.6),
        ])
        .unwrap();
        assert_eq!(group.text, "Once upon");
        assert_eq!(group.start, 0.0);
        assert_eq!(group.end, 0.6);
        assert_eq!(group.word_count(), 2);
    }

    #[test]
    fn test_from_words_empty_is_none() {
        assert!(PhraseGroup::from_words(vec![]).is_none());
    }
}
