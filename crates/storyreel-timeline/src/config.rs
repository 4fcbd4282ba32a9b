//! Planning configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, PlanningResult};

/// Default phrase grouping threshold in seconds.
///
/// Words are bundled until the group spans at least this long, which keeps
/// caption chunks short enough to read while the narration plays.
pub const DEFAULT_PHRASE_THRESHOLD_SECS: f64 = 0.4;

/// Duration limits governing episode segmentation.
///
/// An episode's total duration is the lead-in plus its share of the story
/// audio. `hard_cap_secs` is the platform ceiling an episode must never
/// reach; `full_target_secs` and `split_target_secs` are the sizes the
/// segmenter cuts toward depending on how much narration remains;
/// `safety_margin_secs` keeps cuts clear of the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeLimits {
    /// Hard per-episode duration ceiling in seconds.
    pub hard_cap_secs: f64,
    /// Target size when the remainder is too long to finish soon.
    pub full_target_secs: f64,
    /// Smaller target when the remainder fits in roughly two episodes.
    pub split_target_secs: f64,
    /// Safety margin subtracted from aggressive cuts.
    pub safety_margin_secs: f64,
}

impl Default for EpisodeLimits {
    fn default() -> Self {
        Self {
            hard_cap_secs: 240.0,
            full_target_secs: 180.0,
            split_target_secs: 120.0,
            safety_margin_secs: 2.0,
        }
    }
}

impl EpisodeLimits {
    /// Validate the limit constants.
    pub fn validate(&self) -> PlanningResult<()> {
        let fields = [
            ("hard_cap_secs", self.hard_cap_secs),
            ("full_target_secs", self.full_target_secs),
            ("split_target_secs", self.split_target_secs),
            ("safety_margin_secs", self.safety_margin_secs),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PlanningError::InvalidLimits(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.hard_cap_secs <= 0.0
            || self.full_target_secs <= 0.0
            || self.split_target_secs <= 0.0
        {
            return Err(PlanningError::InvalidLimits(
                "duration limits must be positive".to_string(),
            ));
        }
        if self.safety_margin_secs < 0.0 {
            return Err(PlanningError::InvalidLimits(
                "safety margin must be non-negative".to_string(),
            ));
        }
        if self.split_target_secs >= self.full_target_secs
            || self.full_target_secs > self.hard_cap_secs
        {
            return Err(PlanningError::InvalidLimits(format!(
                "limits must satisfy split < full <= hard cap, got {} / {} / {}",
                self.split_target_secs, self.full_target_secs, self.hard_cap_secs
            )));
        }
        Ok(())
    }
}
