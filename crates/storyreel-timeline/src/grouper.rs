//! Phrase grouping.
//!
//! Bundles consecutive words into short display chunks. Each group grows
//! word by word until the time elapsed since its first word meets the
//! threshold, so a chunk stays on screen long enough to read but never
//! lags far behind the narration.

use storyreel_models::{PhraseGroup, WordTimeline};

use crate::error::{PlanningError, PlanningResult};

/// Group consecutive words into phrase groups of at least `threshold_secs`.
///
/// The returned groups partition the timeline exactly: concatenating their
/// word sequences reproduces the input, in order, with nothing duplicated
/// or dropped. The elapsed-time check runs only after each append, so a
/// single word whose own duration already meets the threshold still forms
/// a complete one-word group. The final group may fall short of the
/// threshold when the words run out first; that is expected.
///
/// An empty timeline yields an empty group list, not an error.
pub fn group_words(
    timeline: &WordTimeline,
    threshold_secs: f64,
) -> PlanningResult<Vec<PhraseGroup>> {
    if !threshold_secs.is_finite() || threshold_secs <= 0.0 {
        return Err(PlanningError::InvalidThreshold(threshold_secs));
    }

    let words = timeline.words();
    let mut groups = Vec::new();
    let mut cursor = 0;

    while cursor < words.len() {
        let begin = cursor;
        let group_start = words[cursor].start;
        let mut run = Vec::new();

        loop {
            run.push(words[cursor].clone());
            cursor += 1;
            let elapsed = words[cursor - 1].end - group_start;
            if elapsed >= threshold_secs || cursor == words.len() {
                break;
            }
        }

        if cursor == begin {
            return Err(PlanningError::Stalled { cursor });
        }
        match PhraseGroup::from_words(run) {
            Some(group) => groups.push(group),
            None => return Err(PlanningError::Stalled { cursor }),
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_models::WordToken;

    fn timeline(words: &[(&str, f64, f64)]) -> WordTimeline {
        WordTimeline::new(
            words
                .iter()
                .map(|(t, s, e)| WordToken::new(*t, *s, *e))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_groups_split_at_threshold() {
        // Threshold 0.4 over a 1.1s narration
        let tl = timeline(&[
            ("Once", 0.0, 0.3),
            ("upon", 0.3, 0.6),
            ("a", 0.6, 0.7),
            ("time", 0.7, 1.1),
        ]);
        let groups = group_words(&tl, 0.4).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].text, "Once upon");
        assert_eq!(groups[0].start, 0.0);
        assert_eq!(groups[0].end, 0.6);
        assert_eq!(groups[1].text, "a time");
        assert_eq!(groups[1].start, 0.6);
        assert_eq!(groups[1].end, 1.1);
    }

    #[test]
    fn test_empty_timeline_yields_no_groups() {
        let groups = group_words(&WordTimeline::empty(), 0.4).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_single_long_word_forms_one_word_group() {
        let tl = timeline(&[("Meanwhile", 0.0, 1.0), ("back", 1.0, 1.2)]);
        let groups = group_words(&tl, 0.4).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].word_count(), 1);
        assert_eq!(groups[0].text, "Meanwhile");
    }

    #[test]
    fn test_final_group_may_fall_short() {
        let tl = timeline(&[("a", 0.0, 0.5), ("b", 0.5, 0.6)]);
        let groups = group_words(&tl, 0.4).unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups[1].duration() < 0.4);
    }

    #[test]
    fn test_partition_property() {
        let tl = timeline(&[
            ("one", 0.0, 0.2),
            ("two", 0.2, 0.5),
            ("three", 0.5, 0.55),
            ("four", 0.55, 1.3),
            ("five", 1.3, 1.32),
        ]);
        let groups = group_words(&tl, 0.4).unwrap();
        let rebuilt: Vec<_> = groups.iter().flat_map(|g| g.words.clone()).collect();
        assert_eq!(rebuilt, tl.words());
    }

    #[test]
    fn test_threshold_property_holds_for_non_final_groups() {
        let tl = timeline(&[
            ("one", 0.0, 0.2),
            ("two", 0.2, 0.5),
            ("three", 0.5, 0.55),
            ("four", 0.55, 1.3),
            ("five", 1.3, 1.32),
        ]);
        let groups = group_words(&tl, 0.4).unwrap();
        for group in &groups[..groups.len() - 1] {
            assert!(group.duration() >= 0.4 || group.word_count() == 1);
        }
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let tl = timeline(&[("a", 0.0, 0.2)]);
        assert!(matches!(
            group_words(&tl, 0.0),
            Err(PlanningError::InvalidThreshold(_))
        ));
        assert!(matches!(
            group_words(&tl, -0.4),
            Err(PlanningError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let tl = timeline(&[("a", 0.0, 0.2), ("b", 0.2, 0.7), ("c", 0.7, 0.8)]);
        let first = group_words(&tl, 0.4).unwrap();
        let second = group_words(&tl, 0.4).unwrap();
        assert_eq!(first, second);
    }
}
