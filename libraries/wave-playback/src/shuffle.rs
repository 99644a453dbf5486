//! Seeded shuffle orders
//!
//! A shuffle order is a permutation of source indices produced by
//! Fisher-Yates from a seeded RNG: the same seed always yields the same
//! order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Permutation of `0..len` derived from `seed`
pub fn shuffled_order(len: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
}

/// Permutation of `0..len` that keeps `0..keep` in place and shuffles the
/// rest with `seed`
pub fn shuffled_tail(len: usize, keep: usize, seed: u64) -> Vec<usize> {
    let keep = keep.min(len);
    let mut order: Vec<usize> = (0..len).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order[keep..].shuffle(&mut rng);
    order
}

/// Active shuffle state of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shuffle {
    seed: u64,
    /// Completed `RepeatAll` passes under reshuffling
    pass: u64,
    order: Vec<usize>,
}

impl Shuffle {
    /// Create a shuffle over `len` tracks
    pub fn new(len: usize, seed: u64) -> Self {
        Self {
            seed,
            pass: 0,
            order: shuffled_order(len, seed),
        }
    }

    /// Create a shuffle enabled mid-pass at source index `cursor`.
    ///
    /// Tracks up to and including `cursor` keep their places; only the
    /// upcoming ones are reordered, so the pass still plays every track once.
    pub fn from_cursor(len: usize, cursor: usize, seed: u64) -> Self {
        Self {
            seed,
            pass: 0,
            order: shuffled_tail(len, cursor + 1, seed),
        }
    }

    /// Seed the shuffle was enabled with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current permutation (play position -> source index)
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Source index played at a play position
    pub fn source_index(&self, position: usize) -> usize {
        self.order[position]
    }

    /// Play position of a source index
    pub fn position_of(&self, source_index: usize) -> usize {
        self.order
            .iter()
            .position(|&index| index == source_index)
            .unwrap_or(0)
    }

    /// Draw the permutation for the next pass.
    ///
    /// Pass `n` always uses `seed + n`, so the order after any number of
    /// wraparounds does not depend on how time was advanced.
    pub fn reshuffle(&mut self) {
        self.pass += 1;
        self.order = shuffled_order(self.order.len(), self.seed.wrapping_add(self.pass));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_same_order() {
        assert_eq!(shuffled_order(20, 42), shuffled_order(20, 42));
    }

    #[test]
    fn order_is_a_permutation() {
        let order = shuffled_order(50, 7);
        let unique: HashSet<usize> = order.iter().copied().collect();
        assert_eq!(order.len(), 50);
        assert_eq!(unique.len(), 50);
        assert!(order.iter().all(|&i| i < 50));
    }

    #[test]
    fn different_seeds_usually_differ() {
        // 1/20! chance of a false failure
        assert_ne!(shuffled_order(20, 1), shuffled_order(20, 2));
    }

    #[test]
    fn position_of_inverts_source_index() {
        let shuffle = Shuffle::new(10, 3);
        for position in 0..10 {
            let source = shuffle.source_index(position);
            assert_eq!(shuffle.position_of(source), position);
        }
    }

    #[test]
    fn reshuffle_is_deterministic() {
        let mut a = Shuffle::new(15, 9);
        let mut b = Shuffle::new(15, 9);
        a.reshuffle();
        a.reshuffle();
        b.reshuffle();
        b.reshuffle();
        assert_eq!(a, b);
        assert_eq!(a.order(), shuffled_order(15, 11).as_slice());
    }

    #[test]
    fn from_cursor_keeps_the_played_prefix() {
        let shuffle = Shuffle::from_cursor(12, 4, 7);
        let order = shuffle.order();
        assert_eq!(&order[..5], &[0, 1, 2, 3, 4]);

        let mut upcoming = order[5..].to_vec();
        upcoming.sort_unstable();
        assert_eq!(upcoming, (5..12).collect::<Vec<_>>());
        assert_eq!(shuffle.position_of(4), 4);
    }

    #[test]
    fn from_cursor_at_the_last_track() {
        let shuffle = Shuffle::from_cursor(3, 2, 1);
        assert_eq!(shuffle.order(), &[0, 1, 2]);
    }

    #[test]
    fn empty_order() {
        let shuffle = Shuffle::new(0, 1);
        assert!(shuffle.order().is_empty());
    }
}
