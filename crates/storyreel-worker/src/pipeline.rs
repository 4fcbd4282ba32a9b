//! End-to-end story pipeline.
//!
//! Wires the collaborators around the planning core: fetch a story,
//! synthesize title and body narration, transcribe, partition into
//! episodes, slice the waveform, then render and publish each episode with
//! its caption plan. Any core error aborts the run for this story; nothing
//! is published partially.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use storyreel_media::{concat_audio, extract_all_slices, probe_audio};
use storyreel_models::{AudioSlice, CaptionEvent, Segment, Story, StoryId, WordTimeline};
use storyreel_timeline::{group_words, plan_audio_slices, plan_caption_events, segment_timeline};

use crate::config::PipelineConfig;
use crate::error::{WorkerError, WorkerResult};
use crate::logging::EpisodeLogger;
use crate::retry::{retry_async, RetryConfig, RetryResult};
use crate::schedule::build_publish_plans;
use crate::traits::{
    EpisodeRenderer, Publisher, RenderRequest, SpeechSynthesizer, StorySource, TextFilter,
    Transcriber,
};

/// Summary of one completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Story that was processed.
    pub story_id: StoryId,
    /// Number of episodes cut and published.
    pub episode_count: usize,
    /// Measured lead-in duration in seconds.
    pub lead_in_secs: f64,
    /// Rendered output files, in episode order.
    pub outputs: Vec<PathBuf>,
}

/// Orchestrates a full story-to-episodes run.
pub struct StoryPipeline {
    source: Arc<dyn StorySource>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    transcriber: Arc<dyn Transcriber>,
    renderer: Arc<dyn EpisodeRenderer>,
    publisher: Arc<dyn Publisher>,
    filter: Arc<dyn TextFilter>,
    config: PipelineConfig,
}

impl StoryPipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Arc<dyn StorySource>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        transcriber: Arc<dyn Transcriber>,
        renderer: Arc<dyn EpisodeRenderer>,
        publisher: Arc<dyn Publisher>,
        filter: Arc<dyn TextFilter>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source,
            synthesizer,
            transcriber,
            renderer,
            publisher,
            filter,
            config,
        }
    }

    /// Run the pipeline once, scheduling the first episode at
    /// `first_publish_at` and spacing the rest per configuration.
    pub async fn run(&self, first_publish_at: DateTime<Utc>) -> WorkerResult<PipelineReport> {
        let story = self.fetch_story().await?;
        let story = Story {
            title: self.filter.clean(&story.title),
            body: self.filter.clean(&story.body),
            ..story
        };

        let logger = EpisodeLogger::new(&story.id, "plan_episodes");
        logger.log_start(&format!(
            "story \"{}\" from {} ({} chars)",
            story.title,
            story.source,
            story.body_chars()
        ));

        let workdir = PathBuf::from(&self.config.work_dir).join(story.id.as_str());
        tokio::fs::create_dir_all(&workdir).await?;

        // Narration: title audio is the lead-in, body audio is the story.
        let title_wav = workdir.join("title.wav");
        let story_wav = workdir.join("story.wav");
        self.synthesizer.synthesize(&story.title, &title_wav).await?;
        self.synthesizer.synthesize(&story.body, &story_wav).await?;

        let lead_in_secs = probe_audio(&title_wav).await?.duration;
        let story_info = probe_audio(&story_wav).await?;
        logger.log_progress(&format!(
            "narration synthesized: lead-in {:.2}s, story {:.2}s",
            lead_in_secs, story_info.duration
        ));

        let timeline = self.transcriber.transcribe(&story_wav).await?;
        logger.log_progress(&format!("transcribed {} words", timeline.len()));

        let segments = segment_timeline(&timeline, lead_in_secs, &self.config.limits)?;
        let slices = plan_audio_slices(&segments, story_info.duration)?;
        logger.log_progress(&format!("planned {} episodes", segments.len()));

        let episode_dir = workdir.join("episodes");
        let episode_wavs = extract_all_slices(&story_wav, &episode_dir, &slices).await?;

        let plans = build_publish_plans(
            &story,
            segments.len(),
            first_publish_at,
            self.config.publish_spacing,
        );

        let mut outputs = Vec::with_capacity(segments.len());
        for (((segment, slice), episode_wav), plan) in segments
            .iter()
            .zip(&slices)
            .zip(&episode_wavs)
            .zip(&plans)
        {
            let episode_logger = EpisodeLogger::new(&story.id, "render_episode");
            episode_logger.log_start(&format!(
                "episode {}/{} ({} words)",
                segment.index + 1,
                segments.len(),
                segment.word_count()
            ));

            let captions = plan_episode_captions(
                segment,
                slice,
                self.config.phrase_threshold_secs,
                lead_in_secs,
            )?;

            let combined = episode_dir.join(format!("episode_{}_full.wav", segment.index));
            concat_audio(&title_wav, episode_wav, &combined).await?;

            let request = RenderRequest {
                audio: combined,
                captions,
                plan: plan.clone(),
            };
            let rendered = self.renderer.render(&request).await?;
            self.publisher.publish(&rendered, plan).await?;

            episode_logger.log_completion(&format!(
                "published \"{}\" for {}",
                plan.title, plan.scheduled_at
            ));
            outputs.push(rendered);
        }

        logger.log_completion(&format!("{} episodes published", outputs.len()));
        Ok(PipelineReport {
            story_id: story.id,
            episode_count: segments.len(),
            lead_in_secs,
            outputs,
        })
    }

    /// Fetch a story, resampling up to the configured retry budget when the
    /// source returns one shorter than the minimum.
    async fn fetch_story(&self) -> WorkerResult<Story> {
        let retry = RetryConfig::new("fetch_story")
            .with_max_retries(self.config.max_fetch_retries);
        let min_chars = self.config.min_story_chars;

        let result = retry_async(&retry, || async {
            let story = self.source.fetch().await?;
            let chars = story.body_chars();
            if chars < min_chars {
                Err(WorkerError::StoryTooShort { chars, min_chars })
            } else {
                Ok(story)
            }
        })
        .await;

        match result {
            RetryResult::Success(story) => Ok(story),
            RetryResult::Failed { error, attempts } => Err(WorkerError::SourceExhausted {
                attempts,
                message: error.to_string(),
            }),
        }
    }
}

/// Plan caption events for one episode.
///
/// Word timestamps are story-relative; each episode's video starts at its
/// audio slice, so words are rebased to the slice start before grouping.
/// The lead-in offset then aligns captions with the assembled
/// title-plus-story track.
pub fn plan_episode_captions(
    segment: &Segment,
    slice: &AudioSlice,
    phrase_threshold_secs: f64,
    lead_in_secs: f64,
) -> WorkerResult<Vec<CaptionEvent>> {
    let rebased = WordTimeline::new(segment.rebased_words(slice.start_secs()))?;
    let groups = group_words(&rebased, phrase_threshold_secs)?;
    Ok(plan_caption_events(&groups, lead_in_secs)?)
}
