//! End-to-end planning over a realistic narration timeline: segmentation,
//! slice planning, and per-episode caption planning working together.

use storyreel_models::{WordTimeline, WordToken};
use storyreel_timeline::{
    group_words, plan_audio_slices, plan_caption_events, segment_timeline, EpisodeLimits,
    DEFAULT_PHRASE_THRESHOLD_SECS,
};

/// A 300-second narration with varied word lengths, deterministic without
/// being uniform.
fn narration_timeline() -> WordTimeline {
    let mut words = Vec::new();
    let mut t = 0.25;
    let mut i = 0usize;
    while t < 300.0 {
        // Word durations cycle through 120ms..480ms, with a short breath
        // every twelfth word.
        let duration = 0.12 + 0.04 * ((i % 10) as f64);
        let end = (t + duration).min(300.0);
        words.push(WordToken::new(format!("word{i}"), t, end));
        t = end;
        if i % 12 == 11 {
            t += 0.3;
        }
        i += 1;
    }
    WordTimeline::new(words).unwrap()
}

#[test]
fn segments_and_groups_partition_the_timeline() {
    let timeline = narration_timeline();
    let limits = EpisodeLimits::default();

    let segments = segment_timeline(&timeline, 10.0, &limits).unwrap();
    let from_segments: Vec<WordToken> = segments.iter().flat_map(|s| s.words.clone()).collect();
    assert_eq!(from_segments, timeline.words());

    let groups = group_words(&timeline, DEFAULT_PHRASE_THRESHOLD_SECS).unwrap();
    let from_groups: Vec<WordToken> = groups.iter().flat_map(|g| g.words.clone()).collect();
    assert_eq!(from_groups, timeline.words());
}

#[test]
fn long_narration_cuts_at_the_aggressive_boundary_first() {
    let timeline = narration_timeline();
    let segments = segment_timeline(&timeline, 10.0, &EpisodeLimits::default()).unwrap();

    // 300s of narration with a 10s lead-in: first cutoff at 168s past the
    // first word, and more than one episode overall.
    assert!(segments.len() >= 2);
    let first = &segments[0];
    let cutoff = first.start() + 180.0 - 10.0 - 2.0;
    assert!(first.end() <= cutoff + 1e-9);
    // The next word after the first segment would have crossed the cutoff.
    let next = &segments[1].words[0];
    assert!(next.end > cutoff);
}

#[test]
fn slices_cover_the_waveform_without_gaps_at_the_ends() {
    let timeline = narration_timeline();
    let segments = segment_timeline(&timeline, 10.0, &EpisodeLimits::default()).unwrap();
    let slices = plan_audio_slices(&segments, 300.8).unwrap();

    assert_eq!(slices.len(), segments.len());
    assert_eq!(slices[0].start_ms, 0);
    assert_eq!(slices.last().unwrap().end_ms, 300_800);
    for (slice, segment) in slices.iter().zip(&segments).skip(1) {
        assert_eq!(slice.start_ms, (segment.start() * 1000.0).round() as u64);
    }
}

#[test]
fn per_episode_captions_align_with_rebased_audio() {
    let timeline = narration_timeline();
    let lead_in = 7.5;
    let segments = segment_timeline(&timeline, lead_in, &EpisodeLimits::default()).unwrap();
    let slices = plan_audio_slices(&segments, 300.8).unwrap();

    for (segment, slice) in segments.iter().zip(&slices) {
        let rebased = WordTimeline::new(segment.rebased_words(slice.start_secs())).unwrap();
        let groups = group_words(&rebased, DEFAULT_PHRASE_THRESHOLD_SECS).unwrap();
        let events = plan_caption_events(&groups, lead_in).unwrap();

        assert_eq!(
            events.len(),
            segment.word_count(),
            "one caption event per word"
        );
        // The first caption never starts before the lead-in ends, and
        // offsets stay within the episode's slice plus lead-in.
        assert!(events[0].start_offset >= lead_in);
        let episode_span = lead_in + slice.duration_secs();
        for event in &events {
            assert!(event.start_offset <= episode_span + 1e-6);
        }
        for pair in events.windows(2) {
            assert!(pair[0].start_offset <= pair[1].start_offset);
        }
    }
}

#[test]
fn planning_is_idempotent() {
    let timeline = narration_timeline();
    let limits = EpisodeLimits::default();

    let segments_a = segment_timeline(&timeline, 10.0, &limits).unwrap();
    let segments_b = segment_timeline(&timeline, 10.0, &limits).unwrap();
    assert_eq!(segments_a, segments_b);

    let groups_a = group_words(&timeline, 0.4).unwrap();
    let groups_b = group_words(&timeline, 0.4).unwrap();
    assert_eq!(groups_a, groups_b);

    let slices_a = plan_audio_slices(&segments_a, 300.8).unwrap();
    let slices_b = plan_audio_slices(&segments_b, 300.8).unwrap();
    assert_eq!(slices_a, slices_b);
}
