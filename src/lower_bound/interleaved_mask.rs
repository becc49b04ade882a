use crate::lower_bound::LANES;

/// Runs 8 independent lower-bound searches over the same sorted slice in an
/// interleaved fashion: all 8 `(left, right)` states advance by one round of
/// the mask-select update per outer iteration. Each round contains 8
/// independent load-compare-update chains, so an out-of-order core can overlap
/// one lane's cache miss with the other lanes' work. Throughput-oriented; a
/// single lookup is better served by the scalar variants.
///
/// Result lane `i` is the lower bound for `keys[i]`. Lanes are otherwise
/// unordered.
pub fn lower_bound_8x<T>(arr: &[T], keys: &[T; LANES]) -> [usize; LANES]
where
    T: Ord,
{
    let len = arr.len();
    let mut left = [0usize; LANES];
    let mut right = [len; LANES];

    if len == 0 {
        return right;
    }

    // The loop runs until every lane has converged, so already-converged lanes
    // keep executing rounds. Two things keep those rounds no-ops:
    // - the probe index is clamped to len - 1 (a lane that converged at `len`
    //   would otherwise read one past the slice),
    // - both update masks are ANDed with the lane's not_done flag, so a
    //   converged lane's state never changes again.
    while left.iter().zip(right.iter()).any(|(l, r)| l < r) {
        for i in 0..LANES {
            let mid = (left[i] + right[i]) / 2;
            let probe = mid.min(len - 1);

            let not_done = (left[i] < right[i]) as usize;
            let lt = (arr[probe] < keys[i]) as usize;

            let mask_lt = (lt & not_done).wrapping_neg();
            let mask_ge = ((lt ^ 1) & not_done).wrapping_neg();

            right[i] ^= (right[i] ^ mid) & mask_ge;
            left[i] ^= (left[i] ^ (mid + 1)) & mask_lt;
        }
    }

    right
}
