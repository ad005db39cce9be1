//! # Streaming segment grouping
//!
//! Two different notions of "the last segment" drive this module, and they
//! are intentionally not the same thing.
//!
//! **Merging** tests the global tail of the output list. A channel whose
//! segment was interleaved past by another channel cannot reach back and
//! extend it, even with a matching key and a small gap. Cross-talk between
//! channels therefore always produces alternating segments in strict
//! temporal order.
//!
//! **Interim key resolution** uses a per-channel map of the most recently
//! created-or-extended segment on that channel. Interim hypotheses reuse
//! that segment's key verbatim, so unstable words stay visually attached to
//! whatever is open for their channel even when their own tentative identity
//! is noisy or missing. Final words always re-derive their key from their
//! own identity, which is the one path that forces a split on identity
//! change alone rather than on a time gap.

use std::collections::HashMap;

use frame_interface::WordFrame;

use crate::types::{ProtoSegment, SegmentKey, SegmenterConfig};

/// Single-pass fold of an ordered word-frame stream into speaker-attributed
/// proto-segments.
///
/// Frames must arrive in non-decreasing `start_ms` order across all channels
/// interleaved; see `frame_interface::ensure_chronological` for the boundary
/// check. The fold itself never fails and never reorders, drops, or
/// duplicates frames: flattening the output reproduces the input exactly.
///
/// Hosts that re-run the whole history and hosts that keep one long-lived
/// accumulator and [`ingest`](Self::ingest) each frame as it arrives get
/// identical output. Ingestion must be serialized by the caller; there is no
/// internal synchronization.
pub struct SegmentAccumulator {
    config: SegmenterConfig,
    segments: Vec<ProtoSegment>,
    open_by_channel: HashMap<i32, usize>,
}

impl SegmentAccumulator {
    pub fn new() -> Self {
        Self::with_config(SegmenterConfig::default())
    }

    pub fn with_config(config: SegmenterConfig) -> Self {
        Self {
            config,
            segments: Vec::new(),
            open_by_channel: HashMap::new(),
        }
    }

    /// Fold one frame into the running segment list.
    ///
    /// The frame extends the globally last segment iff that segment's key
    /// equals the frame's resolved key **and** the frame starts within
    /// `max_gap_ms` of the segment's last word. Otherwise it opens a new
    /// segment at the tail. Either way the frame's channel now points at the
    /// tail for interim key resolution.
    pub fn ingest(&mut self, frame: WordFrame) {
        let key = self.resolve_key(&frame);
        let channel = frame.channel;

        let extends_tail = self.segments.last().is_some_and(|last| {
            last.key == key && frame.start_ms - last.end_ms() <= self.config.max_gap_ms
        });

        if extends_tail {
            let tail = self.segments.len() - 1;
            tracing::trace!(channel, start_ms = frame.start_ms, "extend segment");
            self.segments[tail].words.push(frame);
            self.open_by_channel.insert(channel, tail);
        } else {
            tracing::trace!(channel, start_ms = frame.start_ms, ?key, "open segment");
            self.segments.push(ProtoSegment::open(key, frame));
            self.open_by_channel.insert(channel, self.segments.len() - 1);
        }
    }

    /// Segments built so far, in creation order. The tail may still grow.
    pub fn segments(&self) -> &[ProtoSegment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<ProtoSegment> {
        self.segments
    }

    /// Interim frames inherit the key of the open segment on their channel,
    /// falling back to their own identity when the channel has none yet.
    /// Final frames always resolve fresh from their own identity.
    fn resolve_key(&self, frame: &WordFrame) -> SegmentKey {
        if !frame.is_final {
            if let Some(&open) = self.open_by_channel.get(&frame.channel) {
                return self.segments[open].key.clone();
            }
        }

        SegmentKey::from_identity(frame.channel, frame.identity.as_ref())
    }
}

impl Default for SegmentAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
