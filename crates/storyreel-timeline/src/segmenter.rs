//! Episode segmentation.
//!
//! Partitions the narration timeline into contiguous segments so each
//! episode's total duration (lead-in plus story share) stays under the
//! platform ceiling. The cut point is chosen greedily at each segment's
//! start from how much narration remains.

use storyreel_models::{Segment, WordTimeline};
use tracing::debug;

use crate::config::EpisodeLimits;
use crate::error::{check_lead_in, PlanningError, PlanningResult};

/// Partition the timeline into bounded-duration episode segments.
///
/// At each segment start the cutoff is picked from the remaining narration:
/// - more than `hard_cap - lead_in` left: the remainder cannot finish in
///   one more full-size episode, so cut aggressively at
///   `full_target - lead_in - margin` past the segment start;
/// - at least `full_target - lead_in - margin` left: the remainder fits in
///   roughly two more episodes, so cut at `split_target` past the start;
/// - otherwise: take everything left as the final segment.
///
/// Words are collected while they end at or before the cutoff. Each segment
/// always admits at least its first word, even when that word's end already
/// exceeds the cutoff; without this guard a cutoff earlier than the first
/// candidate's end would stall the loop. A non-advancing iteration is a
/// defect and is surfaced as [`PlanningError::Stalled`].
///
/// The returned segments partition the timeline exactly, in order, with
/// 0-based indices. An empty timeline is an input error.
pub fn segment_timeline(
    timeline: &WordTimeline,
    lead_in_secs: f64,
    limits: &EpisodeLimits,
) -> PlanningResult<Vec<Segment>> {
    check_lead_in(lead_in_secs)?;
    limits.validate()?;

    let words = timeline.words();
    if words.is_empty() {
        return Err(PlanningError::EmptyTimeline);
    }

    let tail_end = words[words.len() - 1].end;
    let mut segments: Vec<Segment> = Vec::new();
    let mut cursor = 0;

    while cursor < words.len() {
        let begin = cursor;
        let seg_start = words[cursor].start;
        let remaining = tail_end - seg_start;

        let cutoff = if remaining > limits.hard_cap_secs - lead_in_secs {
            seg_start + limits.full_target_secs - lead_in_secs - limits.safety_margin_secs
        } else if remaining >= limits.full_target_secs - lead_in_secs - limits.safety_margin_secs {
            seg_start + limits.split_target_secs
        } else {
            tail_end
        };

        debug!(
            segment = segments.len(),
            seg_start, remaining, cutoff, "choosing episode cutoff"
        );

        // Always admit the first word so the cursor advances even when the
        // cutoff lands before this word's end.
        let mut run = vec![words[cursor].clone()];
        cursor += 1;
        while cursor < words.len() && words[cursor].end <= cutoff {
            run.push(words[cursor].clone());
            cursor += 1;
        }

        if cursor == begin {
            return Err(PlanningError::Stalled { cursor });
        }

        segments.push(Segment {
            index: segments.len(),
            words: run,
        });
    }

    Ok(segments)
}
