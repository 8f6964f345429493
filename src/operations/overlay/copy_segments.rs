use crate::error::{GeometryError, Result};
use crate::geometry::Linestring;

use super::turn::SegmentId;

/// Appends the vertices of `source` after `anchor` up to and including
/// vertex `to_index` to `piece`, skipping consecutive duplicates.
///
/// Copying starts at vertex `anchor.segment_index + 1`, or at vertex 0 when no
/// anchor has been set yet. An empty range appends nothing.
///
/// # Errors
///
/// Returns [`GeometryError::VertexOutOfRange`] if `to_index` is not a vertex
/// of `source`.
pub fn copy_segments_forward(
    source: &Linestring,
    anchor: Option<SegmentId>,
    to_index: usize,
    piece: &mut Linestring,
    tol: f64,
) -> Result<()> {
    let points = source.points();
    if to_index >= points.len() {
        return Err(GeometryError::VertexOutOfRange {
            index: to_index,
            len: points.len(),
        }
        .into());
    }

    let from_index = anchor.map_or(0, |seg_id| seg_id.segment_index + 1);
    if from_index > to_index {
        return Ok(());
    }

    for &point in &points[from_index..=to_index] {
        piece.push_no_duplicates(point, tol);
    }
    Ok(())
}
