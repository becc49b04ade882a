lower_bound_impl!("branchy");

/// Baseline: classic binary search over the half-open interval `[left, right)`
/// with a data-dependent branch per iteration.
///
/// Returns the first index for which `is_less` is false, `arr.len()` if none.
pub fn lower_bound<T, P>(arr: &[T], mut is_less: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut left = 0;
    let mut right = arr.len();

    while left < right {
        // Slices are at most isize::MAX elements, so left + right cannot wrap.
        // The truncation toward `left` matters for parity with the other
        // variants, not for correctness.
        let mid = (left + right) / 2;

        if is_less(&arr[mid]) {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    // Invariant on exit: everything below `left` is less than the search
    // value, everything from `right` on is not. left == right pins the result.
    right
}
