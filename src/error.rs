//! Error taxonomy.
//!
//! Expected conditions are not errors: selecting a card that is not on the
//! table yields `SelectOutcome::NotOnTable`, and a search that finds nothing
//! yields `None`. `SetError` covers contract violations and calls that the
//! current state rejects.

use thiserror::Error;

use crate::engine::EndReason;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("a set is exactly 3 cards, got {0}")]
    InvalidTripleArity(usize),
    #[error("game is over: {0}")]
    GameOver(EndReason),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}
