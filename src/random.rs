//! Injectable randomness for handlers and the forecast generator.
//!
//! Handlers never reach for a global RNG; they draw through a [`RandomSource`]
//! carried in the application state, so tests can swap in [`SeededSource`]
//! and pin every generated value.

use std::ops::Range;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First names used for server-generated product names.
pub const FIRST_NAMES: [&str; 20] = [
    "Liam", "Olivia", "Noah", "Emma", "Oliver", "Ava", "Elijah", "Sophia", "James", "Isabella",
    "William", "Mia", "Benjamin", "Charlotte", "Lucas", "Amelia", "Henry", "Harper", "Alexander",
    "Evelyn",
];

/// Source of uniform random values.
pub trait RandomSource: Send + Sync {
    /// Uniform integer drawn from a half-open range.
    fn int_in(&self, range: Range<i32>) -> i32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;
}

/// Production source backed by the thread-local generator.
///
/// `thread_rng` hands out a per-thread generator, so concurrent requests
/// never contend on shared RNG state.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn int_in(&self, range: Range<i32>) -> i32 {
        rand::thread_rng().gen_range(range)
    }

    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source for tests and reproducible demos.
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn int_in(&self, range: Range<i32>) -> i32 {
        self.rng.lock().expect("rng lock poisoned").gen_range(range)
    }

    fn index(&self, len: usize) -> usize {
        self.rng.lock().expect("rng lock poisoned").gen_range(0..len)
    }
}

/// Server-assigned product id, uniform in `[1, 1000]`.
pub fn product_id(random: &dyn RandomSource) -> i32 {
    random.int_in(1..1001)
}

/// Server-assigned product name, drawn from [`FIRST_NAMES`].
pub fn first_name(random: &dyn RandomSource) -> &'static str {
    FIRST_NAMES[random.index(FIRST_NAMES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_stays_in_range() {
        let random = ThreadRngSource;
        for _ in 0..1000 {
            let id = product_id(&random);
            assert!((1..=1000).contains(&id), "id {} out of range", id);
        }
    }

    #[test]
    fn first_name_comes_from_the_list() {
        let random = ThreadRngSource;
        for _ in 0..100 {
            assert!(FIRST_NAMES.contains(&first_name(&random)));
        }
    }

    #[test]
    fn seeded_source_is_deterministic() {
        let a = SeededSource::new(7);
        let b = SeededSource::new(7);

        for _ in 0..20 {
            assert_eq!(a.int_in(1..1001), b.int_in(1..1001));
            assert_eq!(a.index(10), b.index(10));
        }
    }

    #[test]
    fn seeds_differ() {
        let a = SeededSource::new(1);
        let b = SeededSource::new(2);

        let draws_a: Vec<i32> = (0..8).map(|_| a.int_in(0..1_000_000)).collect();
        let draws_b: Vec<i32> = (0..8).map(|_| b.int_in(0..1_000_000)).collect();
        assert_ne!(draws_a, draws_b);
    }
}
