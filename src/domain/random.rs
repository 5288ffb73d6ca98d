//! Randomness used by tile spawning.
//!
//! The engine never touches a global generator; it draws from a
//! [`RandomSource`] handed to it at construction so games can be replayed.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait for the engine's only source of nondeterminism
pub trait RandomSource: Send {
    /// Uniform index in `0..n`; `n` is always > 0
    fn pick(&mut self, n: usize) -> usize;

    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool;
}

/// Adapter over any `rand` generator
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for tests, benchmarks and `--seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }
}

/// Deterministic fake that replays queued answers.
/// Once a queue runs dry it answers 0 / false.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue uniform picks (taken modulo the requested range)
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queue outcomes for `chance`; `true` spawns a 4
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, n: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % n
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        let xs: Vec<usize> = (0..32).map(|_| a.pick(16)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.pick(16)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 16));
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = RngSource::seeded(1);
        assert!((0..100).all(|_| !rng.chance(0.0)));
        assert!((0..100).all(|_| rng.chance(1.0)));
        assert!(!rng.chance(f64::NAN));
    }

    #[test]
    fn test_scripted_replays_then_defaults() {
        let mut src = ScriptedSource::new().with_picks([3, 9]).with_chances([true]);
        assert_eq!(src.pick(4), 3);
        assert_eq!(src.pick(4), 1);
        assert_eq!(src.pick(4), 0);
        assert!(src.chance(0.1));
        assert!(!src.chance(0.1));
    }
}
