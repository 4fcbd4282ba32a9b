//! Audio slice extraction.

use std::path::{Path, PathBuf};
use tracing::info;

use storyreel_models::{format_seconds, AudioSlice};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// Cut one planned slice out of the full narration waveform.
///
/// Uses stream copy; slice boundaries land on planned word edges, not
/// keyframes, which is safe for uncompressed and frame-addressable audio.
pub async fn extract_slice(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    slice: &AudioSlice,
) -> MediaResult<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(MediaError::FileNotFound(input.to_path_buf()));
    }

    info!(
        "Extracting slice {}: {} -> {} ({} - {})",
        slice.segment_index,
        input.display(),
        output.display(),
        format_seconds(slice.start_secs()),
        format_seconds(slice.end_secs()),
    );

    let cmd = FfmpegCommand::new(input, output)
        .seek(slice.start_secs())
        .to(slice.duration_secs())
        .codec_copy();

    let runner = FfmpegRunner::new();
    runner.run(&cmd).await
}

/// Cut every slice in a plan, writing `episode_<i>.wav` files into `out_dir`.
///
/// Returns the output paths in slice order. Fails on the first slice that
/// cannot be cut; partially written episodes are not published.
pub async fn extract_all_slices(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    slices: &[AudioSlice],
) -> MediaResult<Vec<PathBuf>> {
    let input = input.as_ref();
    let out_dir = out_dir.as_ref();

    if slices.is_empty() {
        return Err(MediaError::EmptySlicePlan);
    }

    tokio::fs::create_dir_all(out_dir).await?;

    let mut outputs = Vec::with_capacity(slices.len());
    for slice in slices {
        let output = out_dir.join(format!("episode_{}.wav", slice.segment_index));
        extract_slice(input, &output, slice).await?;
        outputs.push(output);
    }

    info!("Extracted {} episode slices", outputs.len());
    Ok(outputs)
}
