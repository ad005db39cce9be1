use frame_interface::WordFrame;

use crate::accumulator::SegmentAccumulator;
use crate::types::{ProtoSegment, SegmenterConfig};

/// Group an ordered word-frame stream into speaker-attributed proto-segments.
///
/// Pure batch form of [`SegmentAccumulator`]: every frame goes through the
/// same per-frame fold, so re-running over a growing frame history and
/// feeding a long-lived accumulator incrementally produce identical output.
///
/// O(n) over the input, with auxiliary state proportional to the number of
/// distinct channels seen.
pub fn build_segments(
    frames: impl IntoIterator<Item = WordFrame>,
    config: SegmenterConfig,
) -> Vec<ProtoSegment> {
    let mut acc = SegmentAccumulator::with_config(config);
    for frame in frames {
        acc.ingest(frame);
    }
    acc.into_segments()
}
