//! Audio concatenation.
//!
//! Joins the title (lead-in) narration and a story episode's audio into the
//! single track the rendered video carries.

use std::path::Path;
use tracing::info;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// Concatenate the lead-in audio and a story audio file into `output`.
///
/// Uses the FFmpeg concat demuxer with stream copy; both inputs must share
/// the same codec and parameters, which holds because the synthesis
/// collaborator produces them with one voice configuration.
pub async fn concat_audio(
    lead_in: impl AsRef<Path>,
    story: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> MediaResult<()> {
    let lead_in = lead_in.as_ref();
    let story = story.as_ref();
    let output = output.as_ref();

    for input in [lead_in, story] {
        if !input.exists() {
            return Err(MediaError::FileNotFound(input.to_path_buf()));
        }
    }

    let list_dir = tempfile::tempdir()?;
    let list_path = list_dir.path().join("concat.txt");
    let list_body = format!(
        "file '{}'\nfile '{}'\n",
        lead_in.display(),
        story.display()
    );
    tokio::fs::write(&list_path, list_body).await?;

    info!(
        "Concatenating {} + {} -> {}",
        lead_in.display(),
        story.display(),
        output.display()
    );

    let cmd = FfmpegCommand::new(&list_path, output)
        .input_args(["-f", "concat", "-safe", "0"])
        .codec_copy();

    let runner = FfmpegRunner::new();
    runner.run(&cmd).await
}
