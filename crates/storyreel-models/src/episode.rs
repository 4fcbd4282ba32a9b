//! Episode publication planning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::story::StoryId;

/// Publication metadata for one rendered episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishPlan {
    /// Story the episode belongs to.
    pub story_id: StoryId,
    /// 0-based episode index.
    pub episode_index: usize,
    /// Total number of episodes cut from the story.
    pub episode_count: usize,
    /// Display title for this episode.
    pub title: String,
    /// When the episode should go live.
    pub scheduled_at: DateTime<Utc>,
}

impl PublishPlan {
    /// True when the story fits in a single episode.
    pub fn is_single_part(&self) -> bool {
        self.episode_count == 1
    }
}

/// Compose the display title for an episode.
///
/// Single-episode stories keep the plain story title; multi-part stories
/// get a "(Part i/n)" suffix with a 1-based part number.
pub fn episode_title(story_title: &str, episode_index: usize, episode_count: usize) -> String {
    if episode_count <= 1 {
        story_title.to_string()
    } else {
        format!(
            "{} (Part {}/{})",
            story_title,
            episode_index + 1,
            episode_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_part_title_unchanged() {
        assert_eq!(episode_title("My Story", 0, 1), "My Story");
    }

    #[test]
    fn test_multi_part_title_numbered() {
        assert_eq!(episode_title("My Story", 0, 3), "My Story (Part 1/3)");
        assert_eq!(episode_title("My Story", 2, 3), "My Story (Part 3/3)");
    }
}
