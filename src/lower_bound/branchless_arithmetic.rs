lower_bound_impl!("branchless_arithmetic");

/// Branchless variant that blends the two candidate next-intervals by
/// multiplying with the 0/1 value of the comparison. Converts the control
/// dependency of the baseline into a data dependency, trading a possible
/// branch misprediction for two unconditional multiplies.
pub fn lower_bound<T, P>(arr: &[T], mut is_less: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut left = 0;
    let mut right = arr.len();

    while left < right {
        let mid = (left + right) / 2;

        // `bool as usize` is guaranteed to be exactly 0 or 1, which is what
        // makes the multiplicative select sound.
        let lt = is_less(&arr[mid]) as usize;
        let ge = lt ^ 1;

        right = right * lt + mid * ge;
        left = left * ge + (mid + 1) * lt;
    }

    right
}
