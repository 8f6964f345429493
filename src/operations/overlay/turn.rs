use crate::math::Point2;

/// Locates a segment inside a (multi-)geometry.
///
/// Ordering is lexicographic in field order. `None` sorts before any index,
/// so a plain linestring (no multi, no ring) orders purely by `segment_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId {
    pub source_index: usize,
    pub multi_index: Option<usize>,
    pub ring_index: Option<usize>,
    pub segment_index: usize,
}

impl SegmentId {
    /// Segment `segment_index` of source `source_index`, outside any multi or ring.
    #[must_use]
    pub fn new(source_index: usize, segment_index: usize) -> Self {
        Self {
            source_index,
            multi_index: None,
            ring_index: None,
            segment_index,
        }
    }

    #[must_use]
    pub fn with_multi(mut self, multi_index: usize) -> Self {
        self.multi_index = Some(multi_index);
        self
    }

    #[must_use]
    pub fn with_ring(mut self, ring_index: usize) -> Self {
        self.ring_index = Some(ring_index);
        self
    }
}

/// Role a turn plays for the requested set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    None,
    Union,
    Intersection,
    Blocked,
    Continue,
}

/// How the two geometries meet locally at a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    None,
    Disjoint,
    Crosses,
    Touch,
    TouchInterior,
    Collinear,
    Equal,
    Error,
}

/// One side of a turn: where it lies on its geometry and what it means there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOperation {
    pub seg_id: SegmentId,
    /// Distance from the start of `seg_id` to the turn point.
    pub distance: f64,
    pub operation: OperationType,
}

impl TurnOperation {
    #[must_use]
    pub fn new(seg_id: SegmentId, distance: f64, operation: OperationType) -> Self {
        Self {
            seg_id,
            distance,
            operation,
        }
    }
}

/// An intersection point between the linestring and the polygon boundary.
///
/// `operations[0]` describes the linestring side, `operations[1]` the
/// polygon side. Only the linestring side is consulted when following.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    pub point: Point2,
    pub method: Method,
    pub operations: [TurnOperation; 2],
}

impl Turn {
    #[must_use]
    pub fn new(point: Point2, method: Method, operations: [TurnOperation; 2]) -> Self {
        Self {
            point,
            method,
            operations,
        }
    }

    /// Builds a turn whose polygon side carries no information.
    ///
    /// Handy for producers (and tests) that only fill in the linestring side.
    #[must_use]
    pub fn on_line(point: Point2, method: Method, line_op: TurnOperation) -> Self {
        let other = TurnOperation::new(SegmentId::new(1, 0), 0.0, OperationType::None);
        Self::new(point, method, [line_op, other])
    }

    /// The linestring-side operation.
    #[must_use]
    pub fn line_op(&self) -> &TurnOperation {
        &self.operations[0]
    }
}

/// The set operation requested from the follower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayOperation {
    /// Keep the parts of the linestring inside the polygon.
    Intersection,
    /// Keep the parts of the linestring outside the polygon.
    Difference,
}
