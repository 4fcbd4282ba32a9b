//! Publish scheduling.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;

use storyreel_models::{episode::episode_title, PublishPlan, Story};

/// Build evenly spaced publication plans for a story's episodes.
///
/// Episode `i` is scheduled at `first_at + i * spacing`, with a
/// "(Part i/n)" title suffix for multi-part stories.
pub fn build_publish_plans(
    story: &Story,
    episode_count: usize,
    first_at: DateTime<Utc>,
    spacing: Duration,
) -> Vec<PublishPlan> {
    let spacing = ChronoDuration::from_std(spacing).unwrap_or_else(|_| ChronoDuration::zero());

    (0..episode_count)
        .map(|index| PublishPlan {
            story_id: story.id.clone(),
            episode_index: index,
            episode_count,
            title: episode_title(&story.title, index, episode_count),
            scheduled_at: first_at + spacing * index as i32,
        })
        .collect()
}
