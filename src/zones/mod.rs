//! Zones: where each card of a game currently lives.
//!
//! - `Zone`: draw pile, table, or discard pile
//! - `Piles`: ordered contents of all three, with relocation helpers

pub mod piles;

pub use piles::{Piles, Zone};
