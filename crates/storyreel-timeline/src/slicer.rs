//! Audio slice planning.
//!
//! Derives waveform cut boundaries from the chosen episode segments.
//! Interior boundaries sit at detected word edges, but the first slice
//! starts at zero and the last runs to the end of the full waveform:
//! transcription services systematically under-report leading silence and
//! trailing audio, and trimming at word boundaries there would audibly
//! clip the narration. This asymmetric rule must be preserved.

use storyreel_models::{AudioSlice, Segment};

use crate::error::{PlanningError, PlanningResult};

/// Slack allowed between the reported audio duration and the last word end.
///
/// Container duration and transcription timestamps disagree by a few
/// milliseconds in practice.
const AUDIO_TOLERANCE_SECS: f64 = 0.05;

/// Plan per-segment cut boundaries for the full narration waveform.
///
/// `full_audio_secs` is the duration of the complete story audio as probed
/// from the file, not derived from the timeline. The slice list matches the
/// segment list in order and count.
pub fn plan_audio_slices(
    segments: &[Segment],
    full_audio_secs: f64,
) -> PlanningResult<Vec<AudioSlice>> {
    if !full_audio_secs.is_finite() || full_audio_secs < 0.0 {
        return Err(PlanningError::InvalidAudioDuration(full_audio_secs));
    }
    if segments.is_empty() {
        return Err(PlanningError::EmptyTimeline);
    }

    let last_index = segments.len() - 1;
    let last_word_end = segments[last_index].end();
    if full_audio_secs + AUDIO_TOLERANCE_SECS < last_word_end {
        return Err(PlanningError::AudioShorterThanTimeline {
            audio_secs: full_audio_secs,
            last_word_end,
        });
    }

    let slices = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let start_ms = if i == 0 { 0 } else { secs_to_ms(segment.start()) };
            let end_ms = if i == last_index {
                secs_to_ms(full_audio_secs)
            } else {
                secs_to_ms(segment.end())
            };
            AudioSlice {
                segment_index: segment.index,
                start_ms,
                end_ms,
            }
        })
        .collect();

    Ok(slices)
}

fn secs_to_ms(secs: f64) -> u64 {
    (secs * 1000.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_models::WordToken;

    fn segment(index: usize, start: f64, end: f64) -> Segment {
        Segment {
            index,
            words: vec![
                WordToken::new("first", start, start + 0.2),
                WordToken::new("last", end - 0.2, end),
            ],
        }
    }

    #[test]
    fn test_first_slice_starts_at_zero() {
        let segments = vec![segment(0, 0.35, 168.0), segment(1, 168.4, 299.2)];
        let slices = plan_audio_slices(&segments, 300.0).unwrap();
        assert_eq!(slices[0].start_ms, 0);
        assert_eq!(slices[0].end_ms, 168_000);
    }

    #[test]
    fn test_last_slice_ends_at_full_audio() {
        let segments = vec![segment(0, 0.35, 168.0), segment(1, 168.4, 299.2)];
        let slices = plan_audio_slices(&segments, 300.0).unwrap();
        assert_eq!(slices[1].start_ms, 168_400);
        assert_eq!(slices[1].end_ms, 300_000);
    }

    #[test]
    fn test_single_segment_spans_whole_audio() {
        let segments = vec![segment(0, 0.5, 90.0)];
        let slices = plan_audio_slices(&segments, 92.5).unwrap();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].start_ms, 0);
        assert_eq!(slices[0].end_ms, 92_500);
    }

    #[test]
    fn test_interior_bounds_at_word_edges() {
        let segments = vec![
            segment(0, 0.0, 100.0),
            segment(1, 100.5, 200.0),
            segment(2, 200.25, 290.0),
        ];
        let slices = plan_audio_slices(&segments, 291.0).unwrap();
        assert_eq!(slices[1].start_ms, 100_500);
        assert_eq!(slices[1].end_ms, 200_000);
    }

    #[test]
    fn test_empty_segments_is_input_error() {
        assert!(matches!(
            plan_audio_slices(&[], 10.0),
            Err(PlanningError::EmptyTimeline)
        ));
    }

    #[test]
    fn test_audio_shorter_than_timeline_is_rejected() {
        let segments = vec![segment(0, 0.0, 90.0)];
        assert!(matches!(
            plan_audio_slices(&segments, 60.0),
            Err(PlanningError::AudioShorterThanTimeline { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_duration() {
        let segments = vec![segment(0, 0.0, 1.0)];
        assert!(matches!(
            plan_audio_slices(&segments, f64::NAN),
            Err(PlanningError::InvalidAudioDuration(_))
        ));
    }
}
