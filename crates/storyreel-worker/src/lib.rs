//! Story-to-episode pipeline worker.
//!
//! This crate provides:
//! - Collaborator traits for the I/O-bound pipeline steps (source fetch,
//!   speech synthesis, transcription, rendering, publishing, text filtering)
//! - Bounded retry for story sampling
//! - The end-to-end [`StoryPipeline`] orchestration
//! - Publish scheduling for multi-part stories

pub mod config;
pub mod error;
pub mod logging;
pub mod pick;
pub mod pipeline;
pub mod retry;
pub mod schedule;
pub mod traits;

pub use config::PipelineConfig;
pub use error::{WorkerError, WorkerResult};
pub use logging::EpisodeLogger;
pub use pick::SeededPicker;
pub use pipeline::{PipelineReport, StoryPipeline};
pub use retry::{retry_async, RetryConfig, RetryResult};
pub use schedule::build_publish_plans;
pub use traits::{
    EpisodeRenderer, NoopTextFilter, Publisher, RenderRequest, SpeechSynthesizer, StorySource,
    TextFilter, Transcriber,
};
