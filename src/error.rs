use thiserror::Error;

use crate::operations::overlay::{OverlayOperation, SegmentId};

/// Top-level error type for polyfollow.
#[derive(Debug, Error)]
pub enum PolyfollowError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by the geometry primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("vertex index {index} is out of range for a linestring with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },
}

/// Malformed turn records handed over by the turn producer.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("turn {index} has invalid distance {distance} (must be finite and >= 0)")]
    InvalidDistance { index: usize, distance: f64 },

    #[error("turn {index} lies on {seg_id:?}, which is not the followed linestring")]
    ForeignSegment { index: usize, seg_id: SegmentId },

    #[error(
        "turn {index} refers to segment {segment_index}, \
         but the linestring has {segment_count} segments"
    )]
    SegmentOutOfRange {
        index: usize,
        segment_index: usize,
        segment_count: usize,
    },
}

/// Errors related to overlay operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("overlay operation {0:?} is not supported for linestring/polygon follow")]
    Unsupported(OverlayOperation),
}

/// Convenience type alias for results using [`PolyfollowError`].
pub type Result<T> = std::result::Result<T, PolyfollowError>;
