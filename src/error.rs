use crate::cards::card::Card;
use thiserror::Error;

/// A rejected input.
///
/// Every fallible constructor and entry point reports one of these. Inputs
/// are validated before any randomness is consumed, so a simulation either
/// fails up front or runs to completion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("unknown rank: {0}")]
    UnknownRank(String),
    #[error("unknown suit: {0}")]
    UnknownSuit(String),
    #[error("unparsable card: {0}")]
    UnparsableCard(String),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("expected {expected} cards, got {got}")]
    CardCount { expected: &'static str, got: usize },
    #[error("no trials to aggregate")]
    NoTrials,
}
