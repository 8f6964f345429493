use tracing::{debug, trace, warn};

use crate::error::{OperationError, Result, TurnError};
use crate::geometry::{Linestring, PointContainment};
use crate::math::TOLERANCE;

use super::classify::{classify, was_entered, Verdict};
use super::copy_segments::copy_segments_forward;
use super::sort::sort_turns;
use super::turn::{OverlayOperation, SegmentId, Turn};

/// Follows a linestring from turn to turn and splits out the pieces that lie
/// inside a region.
///
/// # Algorithm
///
/// 1. Validate every turn against the linestring
/// 2. Sort the turns along the linestring (segment, then distance)
/// 3. Walk the turns, tracking whether the current position is inside.
///    Entering opens a piece at the turn point, leaving copies the
///    intermediate vertices, closes the piece and emits it.
/// 4. If still inside after the last turn, copy the remaining vertices.
///
/// The region is consulted at most for the first vertex of the linestring.
#[derive(Debug)]
pub struct Follow<'a, R: ?Sized> {
    linestring: &'a Linestring,
    region: &'a R,
    operation: OverlayOperation,
    tolerance: f64,
    source_index: usize,
}

impl<'a, R> Follow<'a, R>
where
    R: PointContainment + ?Sized,
{
    /// Creates a new follow operation with the default tolerance.
    #[must_use]
    pub fn new(linestring: &'a Linestring, region: &'a R, operation: OverlayOperation) -> Self {
        Self {
            linestring,
            region,
            operation,
            tolerance: TOLERANCE,
            source_index: 0,
        }
    }

    /// Sets the tolerance used to suppress duplicate vertices in the output.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the source index the turn producer assigned to the linestring.
    ///
    /// Defaults to 0. Turns on any other source are rejected.
    #[must_use]
    pub fn with_source_index(mut self, source_index: usize) -> Self {
        self.source_index = source_index;
        self
    }

    /// Executes the follow, returning the inside pieces in order along the line.
    ///
    /// `turns` is sorted in place. On error it is left untouched.
    ///
    /// # Errors
    ///
    /// - `OperationError::Unsupported` for any operation other than intersection
    /// - `TurnError::InvalidDistance` for a negative or non-finite distance
    /// - `TurnError::ForeignSegment` for a turn not located on the linestring
    /// - `TurnError::SegmentOutOfRange` for a turn past the last segment
    pub fn execute(&self, turns: &mut [Turn]) -> Result<Vec<Linestring>> {
        if self.operation != OverlayOperation::Intersection {
            return Err(OperationError::Unsupported(self.operation).into());
        }
        self.validate(turns)?;
        sort_turns(turns);

        let line = self.linestring;
        let v0_inside = || line.first().is_some_and(|p| self.region.within(p));

        let mut pieces = Vec::new();
        let mut current_piece = Linestring::default();
        let mut current_segment_id: Option<SegmentId> = None;
        let mut entered = false;
        let mut first = true;
        let mut has_left = false;

        for (index, turn) in turns.iter().enumerate() {
            let op = turn.line_op();

            if was_entered(turn, first) {
                trace_turn(index, turn, "was entered");
                entered = true;
            }

            match classify(turn, entered, first, v0_inside) {
                Verdict::StayingInside => {
                    trace_turn(index, turn, "staying inside");
                    entered = true;
                }
                Verdict::Entering => {
                    trace_turn(index, turn, "entering");
                    entered = true;
                    current_piece.push_no_duplicates(turn.point, self.tolerance);
                    current_segment_id = Some(op.seg_id);
                }
                Verdict::Leaving if !entered && has_left => {
                    // A second crossing at a point already left through.
                    trace_turn(index, turn, "leaving while outside, skipped");
                }
                Verdict::Leaving => {
                    trace_turn(index, turn, "leaving");
                    entered = false;
                    has_left = true;
                    copy_segments_forward(
                        line,
                        current_segment_id,
                        op.seg_id.segment_index,
                        &mut current_piece,
                        self.tolerance,
                    )?;
                    current_piece.push_no_duplicates(turn.point, self.tolerance);

                    if !current_piece.is_empty() {
                        debug!(vertices = current_piece.len(), "emitting piece");
                        pieces.push(std::mem::take(&mut current_piece));
                    }
                }
                Verdict::Ignore => {}
            }
            first = false;
        }

        if first && !line.is_empty() {
            // No turns at all: the whole line is either inside or outside.
            entered = v0_inside();
            debug!(entered, "no turns, classified first vertex");
        }

        if entered {
            copy_segments_forward(
                line,
                current_segment_id,
                line.len() - 1,
                &mut current_piece,
                self.tolerance,
            )?;
        }

        if !current_piece.is_empty() {
            debug!(vertices = current_piece.len(), "emitting trailing piece");
            pieces.push(current_piece);
        }
        Ok(pieces)
    }

    fn validate(&self, turns: &[Turn]) -> Result<()> {
        let segment_count = self.linestring.segment_count();
        for (index, turn) in turns.iter().enumerate() {
            let op = turn.line_op();
            if !op.distance.is_finite() || op.distance < 0.0 {
                warn!(index, distance = op.distance, "rejecting turn");
                return Err(TurnError::InvalidDistance {
                    index,
                    distance: op.distance,
                }
                .into());
            }
            let seg_id = op.seg_id;
            if seg_id.source_index != self.source_index
                || seg_id.multi_index.is_some()
                || seg_id.ring_index.is_some()
            {
                warn!(index, seg_id = ?seg_id, "rejecting turn not on the linestring");
                return Err(TurnError::ForeignSegment { index, seg_id }.into());
            }
            if op.seg_id.segment_index >= segment_count {
                warn!(
                    index,
                    segment_index = op.seg_id.segment_index,
                    segment_count,
                    "rejecting turn"
                );
                return Err(TurnError::SegmentOutOfRange {
                    index,
                    segment_index: op.seg_id.segment_index,
                    segment_count,
                }
                .into());
            }
        }
        Ok(())
    }
}

fn trace_turn(index: usize, turn: &Turn, verdict: &str) {
    let op = turn.line_op();
    trace!(
        index,
        x = turn.point.x,
        y = turn.point.y,
        method = ?turn.method,
        operation = ?op.operation,
        segment = op.seg_id.segment_index,
        distance = op.distance,
        "-> {verdict}"
    );
}

/// Returns the pieces of `linestring` inside `region`, following `turns`.
///
/// Shorthand for [`Follow::new`] + [`Follow::execute`] with default settings.
///
/// # Errors
///
/// See [`Follow::execute`].
pub fn follow<R>(
    linestring: &Linestring,
    region: &R,
    operation: OverlayOperation,
    turns: &mut [Turn],
) -> Result<Vec<Linestring>>
where
    R: PointContainment + ?Sized,
{
    Follow::new(linestring, region, operation).execute(turns)
}
