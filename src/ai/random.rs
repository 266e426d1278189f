use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::game::Board;

use super::mover::Mover;

/// Picks uniformly at random among the columns that are not full.
pub struct RandomMover<R = StdRng> {
    rng: R,
}

impl RandomMover<StdRng> {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        RandomMover {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices for a given seed
    pub fn seeded(seed: u64) -> Self {
        RandomMover {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomMover<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomMover { rng }
    }
}

impl Default for RandomMover<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Mover for RandomMover<R> {
    fn choose_column(&mut self, board: &Board) -> usize {
        let columns = board.legal_columns();
        assert!(!columns.is_empty(), "No legal columns available");
        let idx = self.rng.random_range(0..columns.len());
        trace!(idx, legal = columns.len(), "random column draw");
        columns[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
