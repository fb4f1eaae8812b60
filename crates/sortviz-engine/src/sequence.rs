//! Sequence generation.

use rand::Rng;
use std::ops::RangeInclusive;

/// The array of numeric values being sorted and visualized.
///
/// Owned by the active run while it executes; handed back to the caller
/// in the [`RunReport`](crate::RunReport). A new run always receives a
/// freshly generated sequence.
pub type Sequence = Vec<u32>;

/// Values double as bar heights; renderers scale from this range.
const VALUE_RANGE: RangeInclusive<u32> = 1..=100;

/// Generates a random sequence of `len` values in `1..=100`.
#[must_use]
pub fn generate_sequence(len: usize) -> Sequence {
    generate_sequence_in(len, VALUE_RANGE)
}

/// Generates a random sequence of `len` values in the given range.
#[must_use]
pub fn generate_sequence_in(len: usize, range: RangeInclusive<u32>) -> Sequence {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_range() {
        let seq = generate_sequence(160);
        assert_eq!(seq.len(), 160);
        assert!(seq.iter().all(|&v| (1..=100).contains(&v)));
    }

    #[test]
    fn empty_sequence() {
        assert!(generate_sequence(0).is_empty());
    }

    #[test]
    fn custom_range() {
        let seq = generate_sequence_in(50, 10..=20);
        assert!(seq.iter().all(|&v| (10..=20).contains(&v)));
    }
}
