//! # timecue-formats
//!
//! Stateless renderers from canonical transcripts to subtitle text, plus
//! strict parsers for re-ingesting what they render.
//!
//! - **SRT** ([`srt`]): indexed cues, `HH:MM:SS,mmm` timing
//! - **WebVTT** ([`vtt`]): `WEBVTT` header, `HH:MM:SS.mmm` timing
//! - **Timed JSON** ([`json`]): always-keyed `{start, end, text}` wire shape
//! - **Plain text** ([`txt`]): cue text only
//! - **Timestamp codec** ([`time`]): truncating millisecond decomposition
//! - **Disk layout** ([`write`]): the `out.srt` / `out.vtt` / `out.json` /
//!   `out.txt` quartet
//!
//! Renderers take a [`timecue_core::TimedTranscript`], which only exists
//! for batches whose unit scale resolved — there is no way to hand them
//! unconverted raw-unit data.
//!
//! ## Crate Position
//!
//! Depends on `timecue-core`. The final stage after `timecue-normalize`.

#![deny(unsafe_code)]

pub mod error;
pub mod json;
pub mod srt;
pub mod time;
pub mod txt;
pub mod vtt;
pub mod write;

pub use error::ParseError;
pub use time::{format_timestamp, parse_timestamp};
pub use write::write_transcript;
