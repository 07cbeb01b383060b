//! Strategies for choosing a canned answer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index into a non-empty response pool.
pub trait ResponsePicker {
    fn pick(&mut self, pool_len: usize) -> usize;
}

/// Uniform choice from the thread-local rng.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformPicker;

impl ResponsePicker for UniformPicker {
    fn pick(&mut self, pool_len: usize) -> usize {
        rand::rng().random_range(0..pool_len)
    }
}

/// Uniform choice from a seeded rng, reproducible across runs.
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ResponsePicker for SeededPicker {
    fn pick(&mut self, pool_len: usize) -> usize {
        self.rng.random_range(0..pool_len)
    }
}

/// Replays a fixed index sequence, wrapping around.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            cursor: 0,
        }
    }
}

impl ResponsePicker for SequencePicker {
    fn pick(&mut self, pool_len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % pool_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_and_stays_in_range() {
        let mut picker = SequencePicker::new([1, 7, 2]);
        let picks: Vec<_> = (0..5).map(|_| picker.pick(4)).collect();
        assert_eq!(picks, vec![1, 3, 2, 1, 3]);
    }

    #[test]
    fn seeded_picker_is_reproducible() {
        let mut a = SeededPicker::new(42);
        let mut b = SeededPicker::new(42);
        let left: Vec<_> = (0..16).map(|_| a.pick(4)).collect();
        let right: Vec<_> = (0..16).map(|_| b.pick(4)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn uniform_picker_covers_pool() {
        let mut picker = UniformPicker;
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[picker.pick(4)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
