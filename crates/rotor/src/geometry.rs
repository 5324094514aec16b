use std::f64::consts::{PI, TAU};

/// Screen angle of the fixed pointer: straight up from the wheel center,
/// with 0 pointing east and angles growing clockwise (cairo and canvas arcs).
pub const POINTER_ANGLE: f64 = (PI * 3.0) / 2.0;

pub fn segment_width(count: usize) -> f64 {
    TAU / count as f64
}

/// Wraps any real angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

/// Start and end angle of segment `index` for a wheel turned by `rotation`.
pub fn segment_span(rotation: f64, index: usize, count: usize) -> (f64, f64) {
    let width = segment_width(count);
    let start = rotation + index as f64 * width;
    (start, start + width)
}

/// Index of the segment under the pointer. Pure in `(rotation, count)`;
/// `count` must be non-zero.
pub fn winning_index(rotation: f64, count: usize) -> usize {
    let width = segment_width(count);
    let normalized = normalize_angle(rotation);
    let target = (POINTER_ANGLE - normalized + TAU) % TAU;
    (target / width).floor() as usize % count
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_angle() {
        assert_relative_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(TAU + 1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(-1.0), TAU - 1.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(-7.0 * TAU - 0.5), TAU - 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_stays_in_range() {
        for i in -2000..2000 {
            let a = normalize_angle(i as f64 * 0.37);
            assert!((0.0..TAU).contains(&a), "{a} out of range");
        }
    }

    #[test]
    fn test_four_segments_at_rest_picks_last() {
        assert_eq!(winning_index(0.0, 4), 3);
    }

    #[test]
    fn test_index_matches_segment_quarter() {
        // each quarter turn clockwise brings the previous segment under the pointer
        assert_eq!(winning_index(0.01, 4), 2);
        assert_eq!(winning_index(PI / 2.0 + 0.01, 4), 1);
        assert_eq!(winning_index(PI + 0.01, 4), 0);
        assert_eq!(winning_index(3.0 * PI / 2.0 + 0.01, 4), 3);
    }

    #[test]
    fn test_index_in_bounds_for_any_rotation() {
        for count in 2..20 {
            for step in -500..500 {
                let rotation = step as f64 * 0.731;
                let idx = winning_index(rotation, count);
                assert!(idx < count);
                assert_eq!(idx, winning_index(rotation, count));
            }
        }
    }

    #[test]
    fn test_full_turns_do_not_change_index() {
        for count in 2..12 {
            let base = winning_index(0.3, count);
            assert_eq!(winning_index(0.3 + 5.0 * TAU, count), base);
            assert_eq!(winning_index(0.3 - 3.0 * TAU, count), base);
        }
    }

    #[test]
    fn test_winning_segment_spans_pointer() {
        for count in 2..16 {
            for step in 0..200 {
                let rotation = 0.013 + step as f64 * 0.29;
                let idx = winning_index(rotation, count);
                let (start, _) = segment_span(rotation, idx, count);
                let offset = normalize_angle(POINTER_ANGLE - start);
                assert!(offset < segment_width(count) + 1e-9);
            }
        }
    }

    #[test]
    fn test_segment_span() {
        let (start, end) = segment_span(1.0, 2, 4);
        assert_relative_eq!(start, 1.0 + PI);
        assert_relative_eq!(end, 1.0 + 1.5 * PI);
    }
}
