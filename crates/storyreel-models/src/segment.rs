//! Episode segments and audio slice plans.

use serde::{Deserialize, Serialize};

use crate::word::WordToken;

/// A contiguous, duration-bounded slice of the narration timeline.
///
/// Segments collectively partition the timeline: their word sequences
/// concatenate back to the full input, in order, with nothing duplicated or
/// dropped. Each segment becomes one independently rendered episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// 0-based position of this segment within the episode sequence.
    pub index: usize,
    /// The words belonging to this segment, in narration order.
    pub words: Vec<WordToken>,
}

impl Segment {
    /// Start time of the first word, in seconds.
    pub fn start(&self) -> f64 {
        self.words.first().map(|w| w.start).unwrap_or(0.0)
    }

    /// End time of the last word, in seconds.
    pub fn end(&self) -> f64 {
        self.words.last().map(|w| w.end).unwrap_or(0.0)
    }

    /// Spoken duration covered by this segment, in seconds.
    pub fn duration(&self) -> f64 {
        self.end() - self.start()
    }

    /// Number of words in this segment.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Words shifted so timestamps are relative to the segment's sliced audio.
    ///
    /// `slice_start_secs` is the start of the audio slice this segment was
    /// cut at. For the first episode the slice starts at zero and this is
    /// the identity.
    pub fn rebased_words(&self, slice_start_secs: f64) -> Vec<WordToken> {
        self.words
            .iter()
            .map(|w| WordToken {
                text: w.text.clone(),
                start: (w.start - slice_start_secs).max(0.0),
                end: (w.end - slice_start_secs).max(0.0),
            })
            .collect()
    }
}

/// Cut boundaries for one episode's audio, in milliseconds.
///
/// The first slice starts at 0 to capture leading silence the transcription
/// under-reports; the last slice runs to the end of the full waveform to
/// capture trailing audio past the last detected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSlice {
    /// Index of the segment this slice belongs to.
    pub segment_index: usize,
    /// Start of the cut in milliseconds.
    pub start_ms: u64,
    /// End of the cut in milliseconds.
    pub end_ms: u64,
}

impl AudioSlice {
    /// Duration of this slice in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Duration of this slice in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms() as f64 / 1000.0
    }

    /// Start of the cut in seconds.
    pub fn start_secs(&self) -> f64 {
        self.start_ms as f64 / 1000.0
    }

    /// End of the cut in seconds.
    pub fn end_secs(&self) -> f64 {
        self.end_ms as f64 / 1000.0
    }
}
