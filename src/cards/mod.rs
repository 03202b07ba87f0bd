//! Card model and deck factory.
//!
//! ## Key Types
//!
//! - `Shape`, `Count`, `Shading`, `Color`: the four three-valued dimensions
//! - `CardAttributes`: one point in the 3×3×3×3 attribute space
//! - `Card`: attributes plus id and selection flag
//! - `create_deck`: the shuffled 81-card universe

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{CardAttributes, Color, Count, Shading, Shape};
pub use card::Card;
pub use deck::{create_deck, universe, DECK_SIZE};
