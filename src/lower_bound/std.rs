lower_bound_impl!("std");

/// The stdlib binary search, as the trusted reference point. `partition_point`
/// with an `elem < val` predicate is exactly the lower bound.
pub fn lower_bound<T, P>(arr: &[T], pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    arr.partition_point(pred)
}
