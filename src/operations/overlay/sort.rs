use std::cmp::Ordering;

use super::turn::Turn;

/// Orders two turns along the linestring: by segment, then by distance.
#[must_use]
pub fn compare_along_line(left: &Turn, right: &Turn) -> Ordering {
    let (l, r) = (left.line_op(), right.line_op());
    l.seg_id
        .cmp(&r.seg_id)
        .then_with(|| l.distance.total_cmp(&r.distance))
}

/// Sorts turns in place into their order along the linestring.
///
/// The sort is stable, so turns at the same location keep producer order.
pub fn sort_turns(turns: &mut [Turn]) {
    turns.sort_by(compare_along_line);
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::math::Point2;
    use crate::operations::overlay::turn::{Method, OperationType, SegmentId, TurnOperation};

    fn turn(segment_index: usize, distance: f64, tag: f64) -> Turn {
        Turn::on_line(
            Point2::new(tag, 0.0),
            Method::Crosses,
            TurnOperation::new(
                SegmentId::new(0, segment_index),
                distance,
                OperationType::Intersection,
            ),
        )
    }

    #[test]
    fn sorts_by_segment_then_distance() {
        let mut turns = vec![turn(2, 0.5, 0.0), turn(0, 3.0, 1.0), turn(0, 1.0, 2.0)];
        sort_turns(&mut turns);
        let tags: Vec<f64> = turns.iter().map(|t| t.point.x).collect();
        assert_eq!(tags, vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut turns = vec![turn(1, 2.0, 0.0), turn(0, 0.0, 1.0), turn(1, 2.0, 2.0)];
        sort_turns(&mut turns);
        let tags: Vec<f64> = turns.iter().map(|t| t.point.x).collect();
        assert_eq!(tags, vec![1.0, 0.0, 2.0]);
    }

    proptest! {
        #[test]
        fn sorted_turns_are_nondecreasing(
            raw in prop::collection::vec((0usize..6, 0.0f64..10.0), 0..40)
        ) {
            let mut turns: Vec<Turn> = raw
                .iter()
                .enumerate()
                .map(|(i, &(seg, dist))| turn(seg, dist, i as f64))
                .collect();
            sort_turns(&mut turns);
            for pair in turns.windows(2) {
                prop_assert_ne!(compare_along_line(&pair[0], &pair[1]), Ordering::Greater);
            }
        }

        #[test]
        fn resorting_is_a_no_op(
            raw in prop::collection::vec((0usize..6, 0.0f64..10.0), 0..40)
        ) {
            let mut turns: Vec<Turn> = raw
                .iter()
                .enumerate()
                .map(|(i, &(seg, dist))| turn(seg, dist, i as f64))
                .collect();
            sort_turns(&mut turns);
            let once = turns.clone();
            sort_turns(&mut turns);
            prop_assert_eq!(once, turns);
        }
    }
}
