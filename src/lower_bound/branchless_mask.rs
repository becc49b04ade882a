lower_bound_impl!("branchless_mask");

/// Branchless variant that blends the interval endpoints with all-ones /
/// all-zeros masks instead of multiplies. `x ^ ((x ^ y) & mask)` selects `y`
/// when the mask is all ones and `x` when it is all zeros, so each endpoint
/// is either kept or replaced without a conditional control transfer.
pub fn lower_bound<T, P>(arr: &[T], mut is_less: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut left = 0;
    let mut right = arr.len();

    while left < right {
        let mid = (left + right) / 2;

        // wrapping_neg turns the 0/1 comparison result into all-zeros or
        // all-ones (two's complement -1).
        let lt = is_less(&arr[mid]) as usize;
        let mask_lt = lt.wrapping_neg();
        let mask_ge = (lt ^ 1).wrapping_neg();

        right ^= (right ^ mid) & mask_ge;
        left ^= (left ^ (mid + 1)) & mask_lt;
    }

    right
}
