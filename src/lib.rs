//! Monte Carlo equity estimation for heads-up Texas Hold-Em.
//!
//! Given a hero's two hole cards and a three-card flop, this crate estimates
//! the hero's chance of winning a showdown against one unknown opponent by
//! simulating the unseen cards: each trial deals the opponent's hole cards,
//! the turn, and the river uniformly at random from the remaining deck, then
//! compares the best five-card hands both players can make.
//!
//! ## Core Types
//!
//! - [`cards::card::Card`] — A single card as a `(Rank, Suit)` pair encoded in one byte
//! - [`cards::hand::Hand`] — An unordered set of cards as a 64-bit bitmask
//! - [`cards::strength::Strength`] — Evaluated hand category with kicker resolution
//! - [`equity::simulation::Simulation`] — A configured Monte Carlo run
//! - [`equity::equity::Equity`] — Aggregated win/tie/loss rates and category frequencies

pub mod cards;
pub mod equity;
pub mod error;

pub use cards::card::Card;
pub use cards::category::Category;
pub use cards::evaluator::evaluate;
pub use cards::flop::Flop;
pub use cards::hole::Hole;
pub use cards::strength::Strength;
pub use equity::equity::Equity;
pub use equity::equity::aggregate;
pub use equity::simulation::Simulation;
pub use error::InvalidInput;

/// Sampling distributions, win rates, and category frequencies.
pub type Probability = f32;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Trials simulated when the caller does not choose a count.
pub const DEFAULT_ITERATIONS: usize = 10_000;
