//! Game engine: the selection/matching state machine.
//!
//! ## States
//!
//! - `InProgress`: selects and deals are accepted
//! - `Ended(AllCardsMatched)`: draw pile and table are empty
//! - `Ended(NoSetRemains)`: at most 20 cards remain and none form a set
//!
//! Once ended, `select` and `deal` fail with `SetError::GameOver`;
//! `new_game` starts over.

mod game;
mod outcome;
mod status;

pub use game::SetEngine;
pub use outcome::{DealOutcome, HintOutcome, SelectOutcome};
pub use status::{EndReason, GameSnapshot, GameStatus, Layout};
