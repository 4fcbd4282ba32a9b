//! Collaborator traits for the I/O-bound pipeline steps.
//!
//! The planning core is pure; everything that talks to the outside world
//! (story sources, TTS, transcription, rendering, publishing) sits behind
//! these seams. Implementations that need randomness (e.g. picking a
//! community or submission) must take a seed at construction and drive a
//! `rand::rngs::StdRng` from it, so the surrounding pipeline stays
//! reproducible in tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use storyreel_models::{CaptionEvent, PublishPlan, Story, WordTimeline};

use crate::error::WorkerResult;

/// Fetches a narrative text plus a stable identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorySource: Send + Sync {
    async fn fetch(&self) -> WorkerResult<Story>;
}

/// Synthesizes text into a waveform file.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, output: &Path) -> WorkerResult<()>;
}

/// Transcribes a waveform into an ordered word timeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &Path) -> WorkerResult<WordTimeline>;
}

/// Everything the rendering collaborator needs for one episode.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Assembled episode audio (lead-in + story slice).
    pub audio: PathBuf,
    /// Timed caption events, offset by the lead-in.
    pub captions: Vec<CaptionEvent>,
    /// Publication metadata, including the episode title.
    pub plan: PublishPlan,
}

/// Composites an episode's audio and captions into a rendered video file.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeRenderer: Send + Sync {
    async fn render(&self, request: &RenderRequest) -> WorkerResult<PathBuf>;
}

/// Uploads a rendered file with its scheduling metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, file: &Path, plan: &PublishPlan) -> WorkerResult<()>;
}

/// Cleans narration text before synthesis (censorship/redaction).
pub trait TextFilter: Send + Sync {
    fn clean(&self, text: &str) -> String;
}

/// Pass-through filter for sources that need no redaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTextFilter;

impl TextFilter for NoopTextFilter {
    fn clean(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_filter_is_identity() {
        let filter = NoopTextFilter;
        assert_eq!(filter.clean("hello world"), "hello world");
    }
}
