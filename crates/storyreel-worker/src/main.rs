//! Episode planning worker binary.
//!
//! Runs the planning half of the pipeline over local inputs: a narration
//! waveform plus its word-level transcript. Produces the episode cut plan,
//! the sliced audio files, and per-episode caption events as JSON. The
//! synthesis/render/publish collaborators are wired in by the embedding
//! service, not this binary.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storyreel_media::{extract_all_slices, probe_audio};
use storyreel_models::{format_seconds, WordTimeline};
use storyreel_timeline::{plan_audio_slices, segment_timeline};
use storyreel_worker::pipeline::plan_episode_captions;
use storyreel_worker::PipelineConfig;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("storyreel=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting storyreel-worker");

    let config = PipelineConfig::from_env();
    info!("Pipeline config: {:?}", config);

    if let Err(e) = run(&config).await {
        error!("Planning run failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: &PipelineConfig) -> anyhow::Result<()> {
    let story_audio = PathBuf::from(
        std::env::var("STORYREEL_STORY_AUDIO")
            .context("STORYREEL_STORY_AUDIO must point to the narration waveform")?,
    );
    let transcript_path = PathBuf::from(
        std::env::var("STORYREEL_TRANSCRIPT_JSON")
            .context("STORYREEL_TRANSCRIPT_JSON must point to the word-level transcript")?,
    );
    let out_dir = std::env::var("STORYREEL_OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(&config.work_dir).join("plan"));

    // Lead-in is either measured from a title waveform or given directly.
    let lead_in_secs = match std::env::var("STORYREEL_TITLE_AUDIO") {
        Ok(path) => probe_audio(Path::new(&path)).await?.duration,
        Err(_) => std::env::var("STORYREEL_LEAD_IN_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0),
    };

    let story_info = probe_audio(&story_audio).await?;
    info!(
        "Narration: {} ({}, {} Hz)",
        format_seconds(story_info.duration),
        story_info.codec,
        story_info.sample_rate
    );

    let transcript = tokio::fs::read_to_string(&transcript_path)
        .await
        .with_context(|| format!("reading transcript {}", transcript_path.display()))?;
    let timeline: WordTimeline =
        serde_json::from_str(&transcript).context("parsing word-level transcript")?;
    if timeline.is_empty() {
        bail!("transcript contains no words");
    }
    info!("Transcript: {} words", timeline.len());

    let segments = segment_timeline(&timeline, lead_in_secs, &config.limits)?;
    let slices = plan_audio_slices(&segments, story_info.duration)?;

    tokio::fs::create_dir_all(&out_dir).await?;
    let episode_wavs = extract_all_slices(&story_audio, &out_dir, &slices).await?;

    for ((segment, slice), wav) in segments.iter().zip(&slices).zip(&episode_wavs) {
        let captions = plan_episode_captions(
            segment,
            slice,
            config.phrase_threshold_secs,
            lead_in_secs,
        )?;
        let caption_path = out_dir.join(format!("episode_{}_captions.json", segment.index));
        tokio::fs::write(&caption_path, serde_json::to_vec_pretty(&captions)?).await?;
        info!(
            "Episode {}: {} -> {} ({} words, {} captions) -> {}",
            segment.index + 1,
            format_seconds(slice.start_secs()),
            format_seconds(slice.end_secs()),
            segment.word_count(),
            captions.len(),
            wav.display()
        );
    }

    info!("Planned {} episodes into {}", segments.len(), out_dir.display());
    Ok(())
}
