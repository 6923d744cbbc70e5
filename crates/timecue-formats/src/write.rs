//! Write the rendered artifacts to disk the way operators expect them.

use std::fs;
use std::io;
use std::path::Path;

use timecue_core::TimedTranscript;

use crate::{json, srt, txt, vtt};

/// SRT artifact file name.
pub const SRT_FILE: &str = "out.srt";
/// WebVTT artifact file name.
pub const VTT_FILE: &str = "out.vtt";
/// Timed-JSON artifact file name.
pub const JSON_FILE: &str = "out.json";
/// Plain-text artifact file name.
pub const TXT_FILE: &str = "out.txt";

/// Render all four artifacts for one transcript into `dir`, creating the
/// directory if needed.
pub fn write_transcript(dir: &Path, transcript: &TimedTranscript) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(SRT_FILE), srt::render(transcript))?;
    fs::write(dir.join(VTT_FILE), vtt::render(transcript))?;
    fs::write(dir.join(JSON_FILE), json::render(transcript))?;
    fs::write(dir.join(TXT_FILE), txt::render(transcript))?;
    Ok(())
}
