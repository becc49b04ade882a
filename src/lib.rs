// Testbed for comparing lower-bound binary search strategies. All variants
// compute the same thing; they differ only in how the interval update is
// executed (branching vs. branchless selection vs. interleaved batching).

pub mod lower_bound;
pub mod patterns;

pub use lower_bound::LowerBound;
