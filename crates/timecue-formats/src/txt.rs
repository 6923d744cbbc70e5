//! Plain-text rendering: one cue text per line, timing discarded.

use timecue_core::TimedTranscript;

/// Render the transcript's text, one segment per line.
pub fn render(transcript: &TimedTranscript) -> String {
    let mut out = String::new();
    for s in transcript.segments() {
        out.push_str(&s.segment.text);
        out.push('\n');
    }
    out
}
