//! Pipeline configuration.

use std::time::Duration;

use storyreel_timeline::{EpisodeLimits, DEFAULT_PHRASE_THRESHOLD_SECS};

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Work directory for intermediate audio and caption files
    pub work_dir: String,
    /// Phrase grouping threshold in seconds
    pub phrase_threshold_secs: f64,
    /// Episode duration limits
    pub limits: EpisodeLimits,
    /// Minimum story length in characters; shorter stories are resampled
    pub min_story_chars: usize,
    /// Maximum story fetch retries after the initial attempt
    pub max_fetch_retries: u32,
    /// Spacing between scheduled episode publications
    pub publish_spacing: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            work_dir: "/tmp/storyreel".to_string(),
            phrase_threshold_secs: DEFAULT_PHRASE_THRESHOLD_SECS,
            limits: EpisodeLimits::default(),
            min_story_chars: 1000,
            max_fetch_retries: 5,
            publish_spacing: Duration::from_secs(24 * 3600),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            work_dir: std::env::var("STORYREEL_WORK_DIR").unwrap_or(defaults.work_dir),
            phrase_threshold_secs: env_f64(
                "STORYREEL_PHRASE_THRESHOLD_SECS",
                defaults.phrase_threshold_secs,
            ),
            limits: EpisodeLimits {
                hard_cap_secs: env_f64(
                    "STORYREEL_HARD_CAP_SECS",
                    defaults.limits.hard_cap_secs,
                ),
                full_target_secs: env_f64(
                    "STORYREEL_FULL_TARGET_SECS",
                    defaults.limits.full_target_secs,
                ),
                split_target_secs: env_f64(
                    "STORYREEL_SPLIT_TARGET_SECS",
                    defaults.limits.split_target_secs,
                ),
                safety_margin_secs: env_f64(
                    "STORYREEL_SAFETY_MARGIN_SECS",
                    defaults.limits.safety_margin_secs,
                ),
            },
            min_story_chars: std::env::var("STORYREEL_MIN_STORY_CHARS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_story_chars),
            max_fetch_retries: std::env::var("STORYREEL_MAX_FETCH_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_fetch_retries),
            publish_spacing: Duration::from_secs(
                std::env::var("STORYREEL_PUBLISH_SPACING_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.publish_spacing.as_secs()),
            ),
        }
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
