//! Random video selection
//!
//! `PLAY_RANDOM` goes through the `VideoPicker` trait so tests can swap the
//! random source for a fixed one.

use rand::Rng;

/// Chooses one index out of `count` candidates
pub trait VideoPicker {
    /// Returns `None` only when `count` is zero
    fn pick(&mut self, count: usize) -> Option<usize>;
}

/// Uniform random picker backed by the thread RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl RandomPicker {
    pub fn new() -> Self {
        Self
    }
}

impl VideoPicker for RandomPicker {
    fn pick(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..count))
    }
}

/// Always picks the same position, clamped to the candidate count
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl VideoPicker for FixedPicker {
    fn pick(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(self.0.min(count - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_stays_in_range() {
        let mut picker = RandomPicker::new();
        for _ in 0..200 {
            assert!(picker.pick(5).unwrap() < 5);
        }
        assert_eq!(picker.pick(0), None);
    }

    #[test]
    fn test_fixed_picker_clamps() {
        let mut picker = FixedPicker(3);
        assert_eq!(picker.pick(10), Some(3));
        assert_eq!(picker.pick(2), Some(1));
        assert_eq!(picker.pick(0), None);
    }
}
