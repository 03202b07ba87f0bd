//! Core building blocks: card ids, RNG, configuration.
//!
//! Nothing in here knows the rules of Set. The engine and session modules
//! are built on top of these types.

pub mod config;
pub mod entity;
pub mod rng;

pub use config::{HintFallback, ReplenishPolicy, SessionConfig, SetConfig};
pub use entity::{CardId, CardIdAllocator};
pub use rng::{GameRng, GameRngState, NoShuffle, Shuffle};
