use crate::math::{points_equal, Point2};

/// An open polyline made of straight segments.
///
/// Segment `i` runs from vertex `i` to vertex `i + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Linestring {
    points: Vec<Point2>,
}

impl Linestring {
    /// Creates a linestring from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a linestring from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Returns the number of segments in this linestring.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the endpoints of segment `index`, if it exists.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<(Point2, Point2)> {
        match (self.points.get(index), self.points.get(index + 1)) {
            (Some(&a), Some(&b)) => Some((a, b)),
            _ => None,
        }
    }

    /// Iterates over all segments in order.
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Appends `point` unless it equals (within `tol`) the current last vertex.
    pub fn push_no_duplicates(&mut self, point: Point2, tol: f64) {
        if self
            .points
            .last()
            .is_some_and(|last| points_equal(last, &point, tol))
        {
            return;
        }
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

impl From<Vec<Point2>> for Linestring {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}
