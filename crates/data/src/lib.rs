//! Recorded word-frame sessions for fixture tests and the replay example.
//!
//! Each fixture is an ordered JSON array of `WordFrame` objects, exactly as
//! the frame producer hands them to the segmenter: non-decreasing start
//! times across channels, interim hypotheses mixed with finals, identity
//! attached where diarization had settled.

pub mod meeting_1 {
    /// Two-channel meeting snippet: cross-talk between host and guest,
    /// a mid-stream silence, diarization resolving a human id part-way
    /// through, and an unfinalized interim tail.
    pub const FRAMES_JSON: &str = include_str!("../data/meeting_1/frames.json");
}

pub mod dictation_1 {
    /// Single-channel dictation with no speaker identity: interim words
    /// confirmed by finals, one silence past the default gap threshold.
    pub const FRAMES_JSON: &str = include_str!("../data/dictation_1/frames.json");
}
