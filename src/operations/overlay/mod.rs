//! Linestring/polygon overlay: following a linestring through the turns it
//! makes with a polygon boundary.
//!
//! Computing the turns themselves is left to the caller. The follower only
//! needs them enriched with the segment and distance along the linestring.

mod classify;
mod copy_segments;
mod follow;
mod sort;
mod turn;

pub use classify::{classify, is_entering, is_leaving, is_staying_inside, was_entered, Verdict};
pub use copy_segments::copy_segments_forward;
pub use follow::{follow, Follow};
pub use sort::{compare_along_line, sort_turns};
pub use turn::{Method, OperationType, OverlayOperation, SegmentId, Turn, TurnOperation};
