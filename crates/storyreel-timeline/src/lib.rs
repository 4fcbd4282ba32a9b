//! Caption grouping and episode segmentation for narrated stories.
//!
//! This crate holds the pipeline's algorithmic core, four pure functions
//! over an in-memory word timeline:
//! - [`group_words`]: bundle consecutive words into short phrase groups
//!   that drive progressive "karaoke" captions
//! - [`plan_caption_events`]: expand phrase groups into timed caption
//!   events, offset by the lead-in duration
//! - [`segment_timeline`]: partition the narration into bounded-duration
//!   episode segments
//! - [`plan_audio_slices`]: derive waveform cut boundaries from the chosen
//!   segments
//!
//! All four are deterministic, synchronous, and fail fast with typed
//! errors; identical inputs always produce identical outputs.

pub mod captions;
pub mod config;
pub mod error;
pub mod grouper;
pub mod segmenter;
pub mod slicer;

pub use captions::plan_caption_events;
pub use config::{EpisodeLimits, DEFAULT_PHRASE_THRESHOLD_SECS};
pub use error::{PlanningError, PlanningResult};
pub use grouper::group_words;
pub use segmenter::segment_timeline;
pub use slicer::plan_audio_slices;
