//! # set-engine
//!
//! A single-player engine for the "Set" card-matching game.
//!
//! ## Design Principles
//!
//! 1. **Rules are pure**: validity and search are plain functions over
//!    cards. The engine owns all state.
//!
//! 2. **Commands resolve fully**: a `select` that completes a triple
//!    validates, discards or deselects, refills and checks for the end of
//!    the game before returning.
//!
//! 3. **Explicit outcomes**: every command returns a tagged enum. Expected
//!    conditions (card not on table, no set found) are outcomes; only
//!    contract violations and calls on an ended game are `SetError`s.
//!
//! 4. **Injected collaborators**: shuffling and time come in through the
//!    `Shuffle` and `Clock` traits, so games replay deterministically.
//!
//! ## Modules
//!
//! - `core`: card ids, RNG, configuration
//! - `cards`: attributes, cards, deck factory
//! - `rules`: set validator and exhaustive finder
//! - `zones`: draw pile, table, discard pile
//! - `engine`: the selection/matching state machine
//! - `session`: timing, hint and shake bookkeeping for a UI
//!
//! ## Example
//!
//! ```
//! use set_engine::{GameSession, HintOutcome, SelectOutcome};
//!
//! let mut session = GameSession::start(7).unwrap();
//! if let HintOutcome::Found(ids) = session.give_hint() {
//!     assert!(session.hint_shown());
//!     let mut last = None;
//!     for id in ids {
//!         last = Some(session.select(id).unwrap());
//!     }
//!     assert!(matches!(last, Some(SelectOutcome::Matched(_))));
//!     assert!(!session.hint_shown());
//! }
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardIdAllocator, GameRng, GameRngState, HintFallback, NoShuffle, ReplenishPolicy,
    SessionConfig, SetConfig, Shuffle,
};

pub use crate::cards::{create_deck, Card, CardAttributes, Color, Count, Shading, Shape, DECK_SIZE};

pub use crate::rules::{find_set, is_valid_set, is_valid_slice, MAX_CARDS_WITHOUT_SET};

pub use crate::zones::{Piles, Zone};

pub use crate::engine::{
    DealOutcome, EndReason, GameSnapshot, GameStatus, HintOutcome, Layout, SelectOutcome,
    SetEngine,
};

pub use crate::session::{Clock, GameSession, ManualClock, SystemClock};

pub use crate::error::SetError;
