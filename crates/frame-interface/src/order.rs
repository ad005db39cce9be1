use crate::frame::WordFrame;

/// Violation of the upstream ordering contract.
///
/// The segmentation engine consumes frames in non-decreasing `start_ms`
/// order and never re-checks it; grouping under a violated contract is
/// unspecified. Run [`ensure_chronological`] once at the pipeline boundary
/// and report the violation to the producer instead of patching the stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameOrderError {
    #[error("frame {index} starts at {start_ms}ms, before the previous frame's {prev_start_ms}ms")]
    StartRegression {
        index: usize,
        start_ms: i64,
        prev_start_ms: i64,
    },
    #[error("frame {index} ends at {end_ms}ms, before its own start at {start_ms}ms")]
    InvertedSpan {
        index: usize,
        start_ms: i64,
        end_ms: i64,
    },
}

/// Check that `frames` satisfies the producer contract: non-decreasing
/// `start_ms` across all channels interleaved, and `end_ms >= start_ms` on
/// every frame. Equal start times are allowed (a finalized word may share
/// its start with the interim it replaces).
pub fn ensure_chronological(frames: &[WordFrame]) -> Result<(), FrameOrderError> {
    let mut prev_start_ms = i64::MIN;

    for (index, frame) in frames.iter().enumerate() {
        if frame.end_ms < frame.start_ms {
            return Err(FrameOrderError::InvertedSpan {
                index,
                start_ms: frame.start_ms,
                end_ms: frame.end_ms,
            });
        }

        if frame.start_ms < prev_start_ms {
            return Err(FrameOrderError::StartRegression {
                index,
                start_ms: frame.start_ms,
                prev_start_ms,
            });
        }

        prev_start_ms = frame.start_ms;
    }

    Ok(())
}
