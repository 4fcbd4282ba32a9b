//! Shared data models for the storyreel pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Word-level transcription timelines
//! - Phrase groups and caption events
//! - Episode segments and audio slice plans
//! - Stories and publication plans

pub mod caption;
pub mod episode;
pub mod segment;
pub mod story;
pub mod timestamp;
pub mod word;

// Re-export common types
pub use caption::{CaptionEvent, PhraseGroup};
pub use episode::PublishPlan;
pub use segment::{AudioSlice, Segment};
pub use story::{Story, StoryId};
pub use timestamp::format_seconds;
pub use word::{TimelineError, WordTimeline, WordToken};
