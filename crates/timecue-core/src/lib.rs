//! # timecue-core
//!
//! Canonical timed-transcript vocabulary for the timecue workspace.
//!
//! Transcription backends disagree about everything: units, record shapes,
//! which fields are present. This crate defines the one representation the
//! rest of the workspace agrees on:
//!
//! - **Segments**: [`CanonicalSegment`] with seconds-based timing,
//!   [`SegmentFlags`] correction metadata, [`AnnotatedSegment`]
//! - **Transcripts**: [`TimedTranscript`], chronologically ordered
//! - **Diagnostics**: [`BatchDiagnostics`] aggregate counts and the
//!   [`ScaleSuspicion`] warning signal
//! - **Text**: [`text::clean_text`] whitespace cleanup for cue text
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `timecue-normalize` and
//! `timecue-formats`.

#![deny(unsafe_code)]

pub mod diagnostics;
pub mod segment;
pub mod text;

pub use diagnostics::{BatchDiagnostics, ScaleSuspicion, SuspicionCause};
pub use segment::{AnnotatedSegment, CanonicalSegment, SegmentFlags, TimedTranscript};
