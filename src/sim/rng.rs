//! Seeded random source shared by the spawner and the flow field

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Stream of uniform integer draws.
///
/// The simulation only ever asks for `0..bound`, in a fixed order per tick,
/// so any implementation that replays the same draws replays the same game.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// PCG-backed random source
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Use the given seed, or the current Unix time when there is none
    pub fn from_seed_or_clock(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        });
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed list of draws, then zeros. Each draw is reduced modulo
/// the requested bound so scripts can't produce out-of-range values.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedRng {
    draws: std::collections::VecDeque<u32>,
    pub calls: Vec<u32>,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            calls: Vec::new(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.calls.push(bound);
        self.draws.pop_front().unwrap_or(0) % bound
    }
}
