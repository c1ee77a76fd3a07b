//! Chance events behind an injectable seam.
//!
//! Every dice roll and coin toss in a match flows through
//! [`RandomSource`], so tests can script exact sequences and seeded
//! matches replay deterministically.

use super::TossCall;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the match's chance events.
pub trait RandomSource {
    /// Rolls a six-sided die, returning a value in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Draws a coin, uniformly heads or tails.
    fn flip_coin(&mut self) -> TossCall;

    /// Picks an index in `0..n`, uniformly. `n` must be non-zero;
    /// callers only ask with a non-empty candidate list.
    fn choose_index(&mut self, n: usize) -> usize;
}

/// Seedable RNG backing interactive and replayable matches.
///
/// ChaCha8 so the same seed always produces the same match. Forks give
/// the AI its own stream, keeping its tie-breaks from perturbing the
/// match-level dice and coins.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from OS entropy, for interactive play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn flip_coin(&mut self) -> TossCall {
        if self.inner.gen_bool(0.5) {
            TossCall::Heads
        } else {
            TossCall::Tails
        }
    }

    fn choose_index(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }
}
