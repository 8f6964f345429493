use super::turn::{Method, OperationType, Turn, TurnOperation};

/// What a turn means for the piece currently being followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Already inside; the turn point is picked up later by segment copying.
    StayingInside,
    /// The linestring enters the region here.
    Entering,
    /// The linestring leaves the region here.
    Leaving,
    Ignore,
}

/// Whether the very first turn marks the linestring as already entered.
///
/// A linestring starting collinear with (or equal to) the boundary yields a
/// single turn for that stretch, so it counts as having entered. It may still
/// leave right away; that is decided by the regular rules.
#[must_use]
pub fn was_entered(turn: &Turn, first: bool) -> bool {
    first && matches!(turn.method, Method::Collinear | Method::Equal)
}

/// `Blocked` only differs from `Continue` for polygon/polygon overlays, where
/// one operand runs reversed. Along a linestring both mean "going in".
#[must_use]
pub fn is_entering(op: &TurnOperation) -> bool {
    matches!(
        op.operation,
        OperationType::Intersection | OperationType::Continue | OperationType::Blocked
    )
}

/// `v0_inside` is only evaluated while `first` holds and nothing cheaper
/// already decided the answer.
#[must_use]
pub fn is_leaving(
    turn: &Turn,
    op: &TurnOperation,
    entered: bool,
    first: bool,
    v0_inside: impl Fn() -> bool,
) -> bool {
    op.operation == OperationType::Union
        && (entered || turn.method == Method::Crosses || (first && v0_inside()))
}

/// Crossing turns are fully covered by the entering/leaving pair and never
/// need the (expensive) containment check on the first vertex.
#[must_use]
pub fn is_staying_inside(
    turn: &Turn,
    op: &TurnOperation,
    entered: bool,
    first: bool,
    v0_inside: impl Fn() -> bool,
) -> bool {
    if turn.method == Method::Crosses {
        return false;
    }
    is_entering(op) && (entered || (first && v0_inside()))
}

/// Applies the staying-inside, entering and leaving rules in that order.
///
/// The [`was_entered`] pre-mark must already be folded into `entered`.
#[must_use]
pub fn classify(turn: &Turn, entered: bool, first: bool, v0_inside: impl Fn() -> bool) -> Verdict {
    let op = turn.line_op();
    if is_staying_inside(turn, op, entered, first, &v0_inside) {
        Verdict::StayingInside
    } else if is_entering(op) {
        Verdict::Entering
    } else if is_leaving(turn, op, entered, first, &v0_inside) {
        Verdict::Leaving
    } else {
        Verdict::Ignore
    }
}
