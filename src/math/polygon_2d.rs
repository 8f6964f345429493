use super::distance_2d::point_to_segment_dist;
use super::{Point2, TOLERANCE};

/// Classification of a point relative to a closed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Classifies `point` against the closed ring `verts` (closing vertex implied).
///
/// Points within [`TOLERANCE`] of an edge are `OnBoundary`. Otherwise the
/// winding number decides: non-zero is `Inside`, zero is `Outside`.
#[must_use]
pub fn classify_point_in_ring(point: &Point2, verts: &[Point2]) -> PointClassification {
    let n = verts.len();
    if n < 3 {
        return PointClassification::Outside;
    }

    for i in 0..n {
        if point_to_segment_dist(point, &verts[i], &verts[(i + 1) % n]) < TOLERANCE {
            return PointClassification::OnBoundary;
        }
    }

    if winding_number_2d(point, verts) == 0 {
        PointClassification::Outside
    } else {
        PointClassification::Inside
    }
}

/// Winding number of `p` with respect to the closed ring `verts`.
fn winding_number_2d(p: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];

        if a.y <= p.y {
            if b.y > p.y && cross_2d(b.x - a.x, b.y - a.y, p.x - a.x, p.y - a.y) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && cross_2d(b.x - a.x, b.y - a.y, p.x - a.x, p.y - a.y) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<Point2> {
        vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ]
    }

    #[test]
    fn classify_inside_outside() {
        let sq = square(0.0, 10.0);
        assert_eq!(
            classify_point_in_ring(&Point2::new(5.0, 5.0), &sq),
            PointClassification::Inside
        );
        assert_eq!(
            classify_point_in_ring(&Point2::new(-1.0, 5.0), &sq),
            PointClassification::Outside
        );
        assert_eq!(
            classify_point_in_ring(&Point2::new(5.0, 11.0), &sq),
            PointClassification::Outside
        );
    }

    #[test]
    fn classify_edges_and_corners_are_boundary() {
        let sq = square(0.0, 10.0);
        for p in [
            Point2::new(0.0, 5.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
        ] {
            assert_eq!(
                classify_point_in_ring(&p, &sq),
                PointClassification::OnBoundary,
                "{p:?}"
            );
        }
    }

    #[test]
    fn classify_clockwise_ring() {
        let mut sq = square(0.0, 10.0);
        sq.reverse();
        assert_eq!(
            classify_point_in_ring(&Point2::new(5.0, 5.0), &sq),
            PointClassification::Inside
        );
    }

    #[test]
    fn classify_concave_notch() {
        // U shape: notch cut from the top between x=4 and x=6.
        let u = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(6.0, 10.0),
            Point2::new(6.0, 4.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        assert_eq!(
            classify_point_in_ring(&Point2::new(5.0, 8.0), &u),
            PointClassification::Outside
        );
        assert_eq!(
            classify_point_in_ring(&Point2::new(2.0, 8.0), &u),
            PointClassification::Inside
        );
    }

    #[test]
    fn classify_degenerate_ring() {
        let line = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(
            classify_point_in_ring(&Point2::new(0.5, 0.0), &line),
            PointClassification::Outside
        );
    }
}
