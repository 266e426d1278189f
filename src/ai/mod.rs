//! Computer opponent strategies.

mod mover;
mod random;

pub use mover::Mover;
pub use random::RandomMover;
