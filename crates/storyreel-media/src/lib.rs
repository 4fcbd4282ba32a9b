//! FFmpeg CLI wrapper for narration audio processing.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - Audio probing via FFprobe JSON output
//! - Stream-copy slice extraction at planned episode boundaries
//! - Lead-in and story audio concatenation

pub mod command;
pub mod concat;
pub mod error;
pub mod probe;
pub mod slice;

pub use command::{FfmpegCommand, FfmpegRunner};
pub use concat::concat_audio;
pub use error::{MediaError, MediaResult};
pub use probe::{probe_audio, AudioInfo};
pub use slice::{extract_all_slices, extract_slice};
