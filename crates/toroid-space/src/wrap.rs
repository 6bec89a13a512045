//! Wraparound arithmetic for toroidal axes.

/// Normalize `val` onto an axis of length `len` with periodic boundary.
///
/// Uses Euclidean remainder, so the result lies in `[0, len)` for every
/// `i64` input, including `i64::MIN` and `i64::MAX`. Negative values wrap
/// to the high end: `wrap_axis(-1, 5) == 4`.
///
/// `len` must be non-zero and no larger than `i64::MAX`; [`Grid`](crate::Grid)
/// construction guarantees both.
#[inline]
pub fn wrap_axis(val: i64, len: usize) -> usize {
    debug_assert!(len > 0 && len <= i64::MAX as usize);
    let n = len as i64;
    if (0..n).contains(&val) {
        return val as usize;
    }
    val.rem_euclid(n) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn in_range_is_identity() {
        for v in 0..7 {
            assert_eq!(wrap_axis(v, 7), v as usize);
        }
    }

    #[test]
    fn negative_wraps_to_high_end() {
        assert_eq!(wrap_axis(-1, 5), 4);
        assert_eq!(wrap_axis(-5, 5), 0);
        assert_eq!(wrap_axis(-6, 5), 4);
    }

    #[test]
    fn far_out_of_range() {
        assert_eq!(wrap_axis(5, 5), 0);
        assert_eq!(wrap_axis(1_000_003, 10), 3);
        assert_eq!(wrap_axis(-1_000_003, 10), 7);
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert!(wrap_axis(i64::MIN, 3) < 3);
        assert!(wrap_axis(i64::MAX, 3) < 3);
        assert_eq!(wrap_axis(i64::MIN, 1), 0);
        assert_eq!(wrap_axis(i64::MAX, i64::MAX as usize), 0);
    }

    proptest! {
        #[test]
        fn result_in_bounds(val in any::<i64>(), len in 1usize..1000) {
            prop_assert!(wrap_axis(val, len) < len);
        }

        #[test]
        fn periodic(val in -1_000_000i64..1_000_000, len in 1usize..100, k in -1000i64..1000) {
            let shifted = val + k * len as i64;
            prop_assert_eq!(wrap_axis(val, len), wrap_axis(shifted, len));
        }
    }
}
