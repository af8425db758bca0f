use std::cmp;

use crate::indices::Ids;

/// Partially sort the items in `[left, right]` along `axis` so the k-th smallest value ends up at
/// position `k`, with no larger value before it and no smaller value after it.
///
/// This is Floyd-Rivest selection: large ranges first recurse on a sample window around `k` so
/// the pivot lands close to its final place.
pub(crate) fn select(
    ids: &mut Ids,
    coords: &mut [f64],
    k: usize,
    mut left: usize,
    mut right: usize,
    axis: usize,
) {
    let value = |coords: &[f64], i: usize| coords[2 * i + axis];

    while right > left {
        if right - left > 600 {
            let (lo, hi) = sample_window(k, left, right);
            select(ids, coords, k, lo, hi, axis);
        }

        let pivot = value(coords, k);
        swap_item(ids, coords, left, k);
        if value(coords, right) > pivot {
            swap_item(ids, coords, left, right);
        }

        // Hoare partition; the pivot sits at `left` or `right` as a sentinel for both scans
        let (mut i, mut j) = (left, right);
        while i < j {
            swap_item(ids, coords, i, j);
            i += 1;
            j -= 1;
            while value(coords, i) < pivot {
                i += 1;
            }
            while value(coords, j) > pivot {
                j -= 1;
            }
        }

        // move the pivot to its final position `j`
        if value(coords, left) == pivot {
            swap_item(ids, coords, left, j);
        } else {
            j += 1;
            swap_item(ids, coords, j, right);
        }

        // keep only the side that holds `k`
        if j <= k {
            left = j + 1;
        }
        if k <= j {
            // j == 0 implies k == 0, and then the loop is done
            right = j.saturating_sub(1);
        }
    }
}

/// The sub-range of `[left, right]` that most likely contains the k-th value, sized about
/// `n^(2/3)` for `n` items.
fn sample_window(k: usize, left: usize, right: usize) -> (usize, usize) {
    let n = (right - left + 1) as f64;
    let m = (k - left + 1) as f64;
    let z = n.ln();
    let s = 0.5 * (2. * z / 3.).exp();
    let sd = 0.5 * (z * s * (n - s) / n).sqrt() * if m < n / 2. { -1. } else { 1. };
    // float to usize casts saturate at 0, and the bounds clamp to the range
    let lo = (k as f64 - m * s / n + sd).floor() as usize;
    let hi = (k as f64 + (n - m) * s / n + sd).floor() as usize;
    (cmp::max(left, lo), cmp::min(right, hi))
}

/// Swap the items at tree positions `i` and `j`, keeping id and both coordinates together.
#[inline]
pub(crate) fn swap_item(ids: &mut Ids, coords: &mut [f64], i: usize, j: usize) {
    ids.swap(i, j);
    coords.swap(2 * i, 2 * j);
    coords.swap(2 * i + 1, 2 * j + 1);
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{sample_window, select};
    use crate::indices::Ids;

    fn check_selected(ids: &Ids, coords: &[f64], original: &[f64], k: usize, axis: usize) {
        let pivot = coords[2 * k + axis];
        for i in 0..ids.len() {
            // ids and coords still travel together
            let id = ids.get(i);
            assert_eq!(coords[2 * i], original[2 * id]);
            assert_eq!(coords[2 * i + 1], original[2 * id + 1]);

            let v = coords[2 * i + axis];
            if i < k {
                assert!(v <= pivot, "{v} left of pivot {pivot}");
            } else if i > k {
                assert!(v >= pivot, "{v} right of pivot {pivot}");
            }
        }

        let mut sorted: Vec<f64> = original.iter().skip(axis).step_by(2).copied().collect();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(pivot, sorted[k], "pivot is the true order statistic");
    }

    #[test]
    fn selects_small_ranges() {
        let original = vec![5., 0., 3., 1., 9., 2., 1., 3., 7., 4., 3., 5.];
        for axis in 0..2 {
            for k in 0..6 {
                let mut ids = Ids::identity(6).unwrap();
                let mut coords = original.clone();
                select(&mut ids, &mut coords, k, 0, 5, axis);
                check_selected(&ids, &coords, &original, k, axis);
            }
        }
    }

    #[test]
    fn selects_with_sampling() {
        // more than 600 items takes the sampling branch
        let mut rng = StdRng::seed_from_u64(42);
        let n = 5_000;
        let original: Vec<f64> = (0..2 * n).map(|_| rng.gen_range(0..500) as f64).collect();

        for (k, axis) in [(0, 0), (1, 1), (n / 2, 0), (n / 3, 1), (n - 1, 0)] {
            let mut ids = Ids::identity(n).unwrap();
            let mut coords = original.clone();
            select(&mut ids, &mut coords, k, 0, n - 1, axis);
            check_selected(&ids, &coords, &original, k, axis);
        }
    }

    #[test]
    fn sample_window_stays_in_range() {
        let cases = [(0, 0, 999), (500, 0, 999), (999, 0, 999), (1_700, 1_000, 9_000)];
        for (k, left, right) in cases {
            let (lo, hi) = sample_window(k, left, right);
            assert!(left <= lo && lo <= k && k <= hi && hi <= right, "{lo}..{hi} for {k}");
            assert!(hi - lo < right - left);
        }
    }
}
