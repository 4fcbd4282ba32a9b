//! Word-level transcription timeline.
//!
//! A [`WordTimeline`] is the validated output of a transcription collaborator:
//! an ordered, non-overlapping sequence of word tokens with start/end
//! timestamps in seconds. It is immutable after construction; downstream
//! code only slices and groups it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance for overlap/ordering checks between adjacent tokens.
///
/// Transcription services emit timestamps with limited precision; exact
/// float equality at token boundaries cannot be assumed.
const TIME_EPSILON: f64 = 1e-6;

/// A single transcribed word with start/end timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordToken {
    /// Word text as emitted by the transcription service.
    pub text: String,
    /// Start time in seconds, relative to the narration audio.
    pub start: f64,
    /// End time in seconds, relative to the narration audio.
    pub end: f64,
}

impl WordToken {
    /// Create a new word token.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Duration of this word in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Errors raised when constructing a timeline from malformed tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("token {index} has a non-finite timestamp")]
    NonFiniteTime { index: usize },

    #[error("token {index} has a negative timestamp")]
    NegativeTime { index: usize },

    #[error("token {index} starts after it ends ({start:.3}s > {end:.3}s)")]
    StartAfterEnd { index: usize, start: f64, end: f64 },

    #[error("token {index} starts before the previous token ({start:.3}s < {previous_start:.3}s)")]
    OutOfOrder {
        index: usize,
        start: f64,
        previous_start: f64,
    },

    #[error("token {index} overlaps the previous token ({start:.3}s < {previous_end:.3}s)")]
    Overlapping {
        index: usize,
        start: f64,
        previous_end: f64,
    },
}

/// Ordered, validated sequence of word tokens covering a full narration.
///
/// Construction validates every token (`start <= end`, finite, non-negative)
/// and the sequence as a whole (monotonic starts, no overlap beyond float
/// tolerance). An empty timeline is valid; whether that is acceptable is
/// decided by each consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WordToken>", into = "Vec<WordToken>")]
pub struct WordTimeline {
    words: Vec<WordToken>,
}

impl WordTimeline {
    /// Build a timeline from transcription output, validating every token.
    pub fn new(words: Vec<WordToken>) -> Result<Self, TimelineError> {
        for (index, word) in words.iter().enumerate() {
            if !word.start.is_finite() || !word.end.is_finite() {
                return Err(TimelineError::NonFiniteTime { index });
            }
            if word.start < 0.0 || word.end < 0.0 {
                return Err(TimelineError::NegativeTime { index });
            }
            if word.start > word.end {
                return Err(TimelineError::StartAfterEnd {
                    index,
                    start: word.start,
                    end: word.end,
                });
            }
            if index > 0 {
                let previous = &words[index - 1];
                if word.start < previous.start - TIME_EPSILON {
                    return Err(TimelineError::OutOfOrder {
                        index,
                        start: word.start,
                        previous_start: previous.start,
                    });
                }
                if word.start < previous.end - TIME_EPSILON {
                    return Err(TimelineError::Overlapping {
                        index,
                        start: word.start,
                        previous_end: previous.end,
                    });
                }
            }
        }
        Ok(Self { words })
    }

    /// An empty timeline.
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// The validated tokens, in narration order.
    pub fn words(&self) -> &[WordToken] {
        &self.words
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the timeline holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First token, if any.
    pub fn first(&self) -> Option<&WordToken> {
        self.words.first()
    }

    /// Last token, if any.
    pub fn last(&self) -> Option<&WordToken> {
        self.words.last()
    }

    /// Total time span covered by the timeline in seconds.
    pub fn span(&self) -> f64 {
        match (self.words.first(), self.words.last()) {
            (Some(first), Some(last)) => last.end - first.start,
            _ => 0.0,
        }
    }
}

impl TryFrom<Vec<WordToken>> for WordTimeline {
    type Error = TimelineError;

    fn try_from(words: Vec<WordToken>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<WordTimeline> for Vec<WordToken> {
    fn from(timeline: WordTimeline) -> Self {
        timeline.words
    }
}

impl<'a> IntoIterator for &'a WordTimeline {
    type Item = &'a WordToken;
    type IntoIter = std::slice::Iter<'a, WordToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> WordToken {
        WordToken::new(text, start, end)
    }

    #[test]
    fn test_valid_timeline() {
        let timeline = WordTimeline::new(vec![
            word("Once", 0.0, 0.3),
            word("upon", 0.3, 0.6),
            word("a", 0.6, 0.7),
            word("time", 0.7, 1.1),
        ])
        .unwrap();
        assert_eq!(timeline.len(), 4);
        assert!((timeline.span() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_empty_timeline_is_valid() {
        let timeline = WordTimeline::new(vec![]).unwrap();
        assert!(timeline.is_empty());
        assert_eq!(timeline.span(), 0.0);
    }

    #[test]
    fn test_rejects_start_after_end() {
        let result = WordTimeline::new(vec![word("bad", 1.0, 0.5)]);
        assert!(matches!(
            result,
            Err(TimelineError::StartAfterEnd { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_negative_time() {
        let result = WordTimeline::new(vec![word("bad", -0.1, 0.5)]);
        assert!(matches!(result, Err(TimelineError::NegativeTime { index: 0 })));
    }

    #[test]
    fn test_rejects_non_finite_time() {
        let result = WordTimeline::new(vec![word("bad", 0.0, f64::NAN)]);
        assert!(matches!(
            result,
            Err(TimelineError::NonFiniteTime { index: 0 })
        ));
    }

    #[test]
    fn test_rejects_out_of_order_tokens() {
        let result = WordTimeline::new(vec![word("b", 1.0, 1.5), word("a", 0.2, 0.4)]);
        assert!(matches!(result, Err(TimelineError::OutOfOrder { index: 1, .. })));
    }

    #[test]
    fn test_rejects_overlapping_tokens() {
        let result = WordTimeline::new(vec![word("a", 0.0, 0.6), word("b", 0.3, 0.9)]);
        assert!(matches!(
            result,
            Err(TimelineError::Overlapping { index: 1, .. })
        ));
    }

    #[test]
    fn test_deserialization_validates_tokens() {
        let json = r#"[
            {"text": "Once", "start": 0.0, "end": 0.3},
            {"text": "upon", "start": 0.3, "end": 0.6}
        ]"#;
        let timeline: WordTimeline = serde_json::from_str(json).unwrap();
        assert_eq!(timeline.len(), 2);

        // Overlapping tokens are rejected at the serde boundary too
        let bad = r#"[
            {"text": "a", "start": 0.0, "end": 0.6},
            {"text": "b", "start": 0.3, "end": 0.9}
        ]"#;
        assert!(serde_json::from_str::<WordTimeline>(bad).is_err());
    }

    #[test]
    fn test_allows_tiny_boundary_jitter() {
        // Adjacent tokens may touch with sub-microsecond overlap
        let result = WordTimeline::new(vec![
            word("a", 0.0, 0.5),
            word("b", 0.5 - 1e-9, 0.8),
        ]);
        assert!(result.is_ok());
    }
}
