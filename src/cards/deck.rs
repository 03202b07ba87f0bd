//! Deck factory.
//!
//! Builds the 81-card universe (every combination of the four dimensions,
//! once) and hands it to an injected shuffler.

use super::attributes::{CardAttributes, Color, Count, Shading, Shape};
use super::card::Card;
use crate::core::entity::CardIdAllocator;
use crate::core::rng::Shuffle;

/// Number of cards in a full deck (3^4).
pub const DECK_SIZE: usize = 81;

/// Every attribute tuple in canonical (base-3 index) order.
pub fn universe() -> impl Iterator<Item = CardAttributes> {
    Shape::ALL.into_iter().flat_map(|shape| {
        Count::ALL.into_iter().flat_map(move |count| {
            Shading::ALL.into_iter().flat_map(move |shading| {
                Color::ALL
                    .into_iter()
                    .map(move |color| CardAttributes::new(shape, count, shading, color))
            })
        })
    })
}

/// Create a full deck with fresh ids, permuted by `shuffler`.
pub fn create_deck<S: Shuffle + ?Sized>(ids: &mut CardIdAllocator, shuffler: &mut S) -> Vec<Card> {
    let mut deck: Vec<Card> = universe().map(|attrs| Card::new(ids.alloc(), attrs)).collect();
    shuffler.shuffle_cards(&mut deck);
    deck
}
