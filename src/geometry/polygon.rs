use crate::math::polygon_2d::{classify_point_in_ring, PointClassification};
use crate::math::{points_equal, Point2, TOLERANCE};

/// Something a point can be classified against.
///
/// The overlay follower only ever asks [`within`](Self::within), and only for
/// the first vertex of the linestring.
pub trait PointContainment {
    fn classify_point(&self, point: &Point2) -> PointClassification;

    /// Strict interior test: points on the boundary are not within.
    fn within(&self, point: &Point2) -> bool {
        self.classify_point(point) == PointClassification::Inside
    }
}

/// A closed ring. The closing vertex is implied and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2>,
}

impl Ring {
    /// Creates a ring, dropping an explicit closing vertex if present.
    #[must_use]
    pub fn new(mut points: Vec<Point2>) -> Self {
        let closed = points.len() > 1
            && points
                .first()
                .zip(points.last())
                .is_some_and(|(first, last)| points_equal(first, last, TOLERANCE));
        if closed {
            points.pop();
        }
        Self { points }
    }

    /// Creates a ring from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }
}

impl PointContainment for Ring {
    fn classify_point(&self, point: &Point2) -> PointClassification {
        classify_point_in_ring(point, &self.points)
    }
}

/// A polygon with one outer ring and any number of holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    outer: Ring,
    inners: Vec<Ring>,
}

impl Polygon {
    #[must_use]
    pub fn new(outer: Ring, inners: Vec<Ring>) -> Self {
        Self { outer, inners }
    }

    #[must_use]
    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    #[must_use]
    pub fn inners(&self) -> &[Ring] {
        &self.inners
    }
}

impl From<Ring> for Polygon {
    fn from(outer: Ring) -> Self {
        Self::new(outer, Vec::new())
    }
}

impl PointContainment for Polygon {
    fn classify_point(&self, point: &Point2) -> PointClassification {
        match self.outer.classify_point(point) {
            PointClassification::Inside => {
                for hole in &self.inners {
                    match hole.classify_point(point) {
                        PointClassification::Inside => return PointClassification::Outside,
                        PointClassification::OnBoundary => {
                            return PointClassification::OnBoundary
                        }
                        PointClassification::Outside => {}
                    }
                }
                PointClassification::Inside
            }
            other => other,
        }
    }
}
