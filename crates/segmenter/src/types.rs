use frame_interface::{SpeakerIdentity, WordFrame};

pub const DEFAULT_MAX_GAP_MS: i64 = 2000;

/// Identifies which logical speaker turn a word belongs to.
///
/// Equality is structural: channels must match exactly, and each optional
/// field must be present-and-equal on both sides or absent on both sides.
/// A present value never equals an absent one, so "unknown speaker" and
/// "speaker 0" remain distinct keys.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, specta::Type,
)]
pub struct SegmentKey {
    pub channel: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_id: Option<String>,
}

impl SegmentKey {
    /// Derive a key from a frame's tentative identity. Fields are copied only
    /// where present; a missing identity yields a bare-channel key.
    pub fn from_identity(channel: i32, identity: Option<&SpeakerIdentity>) -> Self {
        Self {
            channel,
            speaker_index: identity.and_then(|id| id.speaker_index),
            human_id: identity.and_then(|id| id.human_id.clone()),
        }
    }
}

/// A maximal run of words grouped under one [`SegmentKey`], bounded by the
/// configured gap threshold. Always non-empty. The key is fixed when the
/// segment is created and never rewritten by later appends, even when those
/// appends resolved their key through the interim-continuity path.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct ProtoSegment {
    pub key: SegmentKey,
    pub words: Vec<WordFrame>,
}

impl ProtoSegment {
    pub(crate) fn open(key: SegmentKey, first: WordFrame) -> Self {
        Self {
            key,
            words: vec![first],
        }
    }

    pub fn start_ms(&self) -> i64 {
        self.words.first().map_or(0, |w| w.start_ms)
    }

    pub fn end_ms(&self) -> i64 {
        self.words.last().map_or(0, |w| w.end_ms)
    }

    pub fn duration_ms(&self) -> i64 {
        self.end_ms() - self.start_ms()
    }

    /// Whether every word in this segment is final. A segment containing any
    /// interim word may still be re-attributed once the recognizer commits,
    /// and consumers should treat its key as provisional until then.
    pub fn all_final(&self) -> bool {
        self.words.iter().all(|w| w.is_final)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, specta::Type,
)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Maximum silence, in milliseconds, between the end of the open
    /// segment's last word and the start of the next word for the two to
    /// stay in one segment. A gap of exactly this value still merges.
    pub max_gap_ms: i64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_gap_ms: DEFAULT_MAX_GAP_MS,
        }
    }
}
