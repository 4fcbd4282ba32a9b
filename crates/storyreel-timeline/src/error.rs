//! Error types for timeline planning.

use storyreel_models::TimelineError;
use thiserror::Error;

/// Result type for planning operations.
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Errors raised by the planning core.
///
/// Three families: input errors (bad timeline for the requested operation),
/// configuration errors (bad thresholds or duration constants), and internal
/// invariant violations, which indicate a defect and are surfaced
/// immediately rather than looped on or recovered from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    // --- input errors ---
    #[error("timeline is empty; at least one word is required")]
    EmptyTimeline,

    #[error("malformed timeline: {0}")]
    MalformedTimeline(#[from] TimelineError),

    #[error(
        "audio duration {audio_secs:.3}s is shorter than the last word end {last_word_end:.3}s"
    )]
    AudioShorterThanTimeline { audio_secs: f64, last_word_end: f64 },

    // --- configuration errors ---
    #[error("phrase threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),

    #[error("lead-in duration must be non-negative and finite, got {0}")]
    InvalidLeadIn(f64),

    #[error("invalid episode limits: {0}")]
    InvalidLimits(String),

    #[error("audio duration must be non-negative and finite, got {0}")]
    InvalidAudioDuration(f64),

    // --- internal invariant violations ---
    #[error("planning cursor failed to advance at word {cursor}")]
    Stalled { cursor: usize },
}

impl PlanningError {
    /// True for errors caused by the input timeline or audio.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyTimeline
                | Self::MalformedTimeline(_)
                | Self::AudioShorterThanTimeline { .. }
        )
    }

    /// True for errors caused by caller-supplied constants.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidThreshold(_)
                | Self::InvalidLeadIn(_)
                | Self::InvalidLimits(_)
                | Self::InvalidAudioDuration(_)
        )
    }

    /// True for internal invariant violations (defects, not recoverable).
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Stalled { .. })
    }
}

/// Validate a lead-in duration parameter.
pub(crate) fn check_lead_in(lead_in_secs: f64) -> PlanningResult<()> {
    if !lead_in_secs.is_finite() || lead_in_secs < 0.0 {
        return Err(PlanningError::InvalidLeadIn(lead_in_secs));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(PlanningError::EmptyTimeline.is_input());
        assert!(PlanningError::InvalidThreshold(0.0).is_configuration());
        assert!(PlanningError::Stalled { cursor: 3 }.is_defect());
        assert!(!PlanningError::EmptyTimeline.is_defect());
    }

    #[test]
    fn test_check_lead_in() {
        assert!(check_lead_in(0.0).is_ok());
        assert!(check_lead_in(10.5).is_ok());
        assert!(matches!(
            check_lead_in(-1.0),
            Err(PlanningError::InvalidLeadIn(_))
        ));
        assert!(matches!(
            check_lead_in(f64::INFINITY),
            Err(PlanningError::InvalidLeadIn(_))
        ));
    }
}
