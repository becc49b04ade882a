use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

/// Provides sorted arrays and search keys useful for testing and benchmarking
/// lower-bound search implementations. Currently limited to i64 values.

// --- Public ---

pub fn random_sorted(size: usize) -> Vec<i64> {
    //     .
    //   .::
    // .::::

    let mut vals = random_vec(size);
    vals.sort_unstable();

    vals
}

pub fn random_uniform_sorted<R>(size: usize, range: R) -> Vec<i64>
where
    R: Into<rand::distributions::Uniform<i64>>,
{
    //   .:
    // .:::
    // Narrow ranges give runs of duplicates, which a lower bound must resolve
    // to the first occurrence.
    let mut rng = rand::rngs::StdRng::from(new_seed());

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i64> = range.into();

    let mut vals: Vec<i64> = (0..size).map(|_| dist.sample(&mut rng)).collect();
    vals.sort_unstable();

    vals
}

pub fn ascending(size: usize) -> Vec<i64> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i64).collect::<Vec<_>>()
}

pub fn all_equal(size: usize) -> Vec<i64> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn random_keys(count: usize) -> Vec<i64> {
    let mut rng = rand::rngs::StdRng::from(new_seed());

    (0..count).map(|_| rng.gen::<i64>()).collect()
}

pub fn random_keys_in(count: usize, low: i64, high: i64) -> Vec<i64> {
    // Keys drawn from [low, high), i.e. somewhere inside the array's value
    // range rather than almost always outside it.
    let mut rng = rand::rngs::StdRng::from(new_seed());
    let dist = rand::distributions::Uniform::from(low..high);

    (0..count).map(|_| dist.sample(&mut rng)).collect()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    // return 360013155987181959;
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i64> {
    let mut rng = rand::rngs::StdRng::from(new_seed());

    (0..size).map(|_| rng.gen::<i64>()).collect()
}
