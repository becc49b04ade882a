/// Lower-bound search: smallest index whose element is >= the search value,
/// or `arr.len()` if no such element exists. The DB-style building block for
/// finding the start position of a range scan.
///
/// All implementations require `arr` to be sorted ascending (duplicates ok).
/// Violating that is a caller contract violation and yields an unspecified
/// index, not an error.
pub trait LowerBound {
    fn name() -> String;

    fn lower_bound<T>(arr: &[T], val: &T) -> usize
    where
        T: Ord;

    fn lower_bound_by<T, F>(arr: &[T], val: &T, compare: F) -> usize
    where
        F: FnMut(&T, &T) -> core::cmp::Ordering;
}

/// Number of searches the interleaved variant runs concurrently. Compile-time
/// constant on purpose, the ILP benefit depends on a fixed unrollable lane
/// count.
pub const LANES: usize = 8;

macro_rules! lower_bound_impl {
    ($name:expr) => {
        pub struct LowerBoundImpl;

        impl crate::lower_bound::LowerBound for LowerBoundImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn lower_bound<T>(arr: &[T], val: &T) -> usize
            where
                T: Ord,
            {
                lower_bound(arr, |elem| elem < val)
            }

            #[inline]
            fn lower_bound_by<T, F>(arr: &[T], val: &T, mut compare: F) -> usize
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                lower_bound(arr, |elem| compare(elem, val).is_lt())
            }
        }
    };
}

pub mod branchless_arithmetic;
pub mod branchless_mask;
pub mod branchy;
pub mod interleaved_mask;
pub mod std;
