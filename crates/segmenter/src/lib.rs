pub mod accumulator;
pub mod builder;
pub mod types;

pub use accumulator::SegmentAccumulator;
pub use builder::build_segments;
pub use types::{DEFAULT_MAX_GAP_MS, ProtoSegment, SegmentKey, SegmenterConfig};
