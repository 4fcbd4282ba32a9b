//! Structured pipeline logging utilities.
//!
//! Provides consistent, structured logging for pipeline runs with
//! contextual information (story ID, operation).

use storyreel_models::StoryId;
use tracing::{error, info, warn, Span};

/// Logger for pipeline lifecycle events of one story run.
#[derive(Debug, Clone)]
pub struct EpisodeLogger {
    story_id: String,
    operation: String,
}

impl EpisodeLogger {
    /// Create a new logger for a story and operation.
    ///
    /// # Arguments
    /// * `story_id` - The story being processed
    /// * `operation` - The operation type (e.g. "plan_episodes", "render_episode")
    pub fn new(story_id: &StoryId, operation: &str) -> Self {
        Self {
            story_id: story_id.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Log the start of an operation.
    pub fn log_start(&self, message: &str) {
        info!(
            story_id = %self.story_id,
            operation = %self.operation,
            "Run started: {}", message
        );
    }

    /// Log a progress update.
    pub fn log_progress(&self, message: &str) {
        info!(
            story_id = %self.story_id,
            operation = %self.operation,
            "Run progress: {}", message
        );
    }

    /// Log a warning.
    pub fn log_warning(&self, message: &str) {
        warn!(
            story_id = %self.story_id,
            operation = %self.operation,
            "Run warning: {}", message
        );
    }

    /// Log an error.
    pub fn log_error(&self, message: &str) {
        error!(
            story_id = %self.story_id,
            operation = %self.operation,
            "Run error: {}", message
        );
    }

    /// Log completion.
    pub fn log_completion(&self, message: &str) {
        info!(
            story_id = %self.story_id,
            operation = %self.operation,
            "Run completed: {}", message
        );
    }

    /// Get the story ID.
    pub fn story_id(&self) -> &str {
        &self.story_id
    }

    /// Create a tracing span for this run.
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "pipeline_run",
            story_id = %self.story_id,
            operation = %self.operation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_keeps_context() {
        let logger = EpisodeLogger::new(&StoryId::from_string("abc"), "plan_episodes");
        assert_eq!(logger.story_id(), "abc");
        logger.log_start("fetching story");
        logger.log_completion("done");
    }
}
