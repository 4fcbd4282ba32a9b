//! Caption event planning.
//!
//! Expands phrase groups into per-word caption events with cumulative
//! text, producing the build-up effect: each successive event shows the
//! phrase so far, displayed for the duration of the newly revealed word.

use storyreel_models::{CaptionEvent, PhraseGroup};

use crate::error::{check_lead_in, PlanningResult};

/// Plan caption events for a sequence of phrase groups.
///
/// For each word at position `i` within a group, one event is emitted with
/// the space-joined texts of words `0..=i`, starting at
/// `word.start + lead_in_secs` and lasting the word's own duration.
///
/// `lead_in_secs` is the length of the fixed prefix audio (e.g. the title
/// narration) that precedes the story in the assembled timeline; shifting
/// every offset by it keeps captions aligned with the final audio rather
/// than the isolated story waveform.
///
/// Output order follows group order then intra-group word order, which is
/// also monotonic non-decreasing in start offset.
pub fn plan_caption_events(
    groups: &[PhraseGroup],
    lead_in_secs: f64,
) -> PlanningResult<Vec<CaptionEvent>> {
    check_lead_in(lead_in_secs)?;

    let total_words: usize = groups.iter().map(|g| g.word_count()).sum();
    let mut events = Vec::with_capacity(total_words);

    for group in groups {
        let mut visible = String::new();
        for word in &group.words {
            if !visible.is_empty() {
                visible.push(' ');
            }
            visible.push_str(word.text.trim());
            events.push(CaptionEvent {
                visible_text: visible.clone(),
                start_offset: word.start + lead_in_secs,
                duration: word.duration(),
            });
        }
    }

    Ok(events)
}
