//! Injectable randomness for tip selection.

use rand::Rng;

/// Picks an index in `0..len`. Callers never pass `len == 0`.
pub trait RandomSource: Send {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform choice from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same index, wrapped into range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let mut random = ThreadRandom;
        for _ in 0..100 {
            assert!(random.pick(4) < 4);
        }
    }

    #[test]
    fn test_fixed_random_wraps() {
        assert_eq!(FixedRandom(2).pick(4), 2);
        assert_eq!(FixedRandom(6).pick(4), 2);
        assert_eq!(FixedRandom(3).pick(0), 0);
    }
}
