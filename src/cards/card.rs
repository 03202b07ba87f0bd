//! Card: identity, attributes, and the mutable selection flag.
//!
//! Equality and hashing look at the attributes only. The deck holds each
//! attribute tuple once, so within a game attribute equality and identity
//! coincide; the distinction matters when comparing cards across games.

use serde::{Deserialize, Serialize};

use super::attributes::CardAttributes;
use crate::core::entity::CardId;

/// A physical card in a game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique id assigned at creation.
    pub id: CardId,

    /// Immutable attribute tuple.
    pub attributes: CardAttributes,

    /// Is this card currently selected on the table?
    pub is_selected: bool,
}

impl Card {
    /// Create an unselected card.
    #[must_use]
    pub fn new(id: CardId, attributes: CardAttributes) -> Self {
        Self {
            id,
            attributes,
            is_selected: false,
        }
    }

    /// Flip the selection flag and return the new value.
    pub fn toggle_selected(&mut self) -> bool {
        self.is_selected = !self.is_selected;
        self.is_selected
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.attributes.hash(hasher);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.attributes.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::attributes::{Color, Count, Shading, Shape};

    fn attrs() -> CardAttributes {
        CardAttributes::new(Shape::Squiggle, Count::Three, Shading::Open, Color::Blue)
    }

    #[test]
    fn test_new_card_unselected() {
        let card = Card::new(CardId(3), attrs());
        assert_eq!(card.id, CardId(3));
        assert!(!card.is_selected);
    }

    #[test]
    fn test_toggle() {
        let mut card = Card::new(CardId(3), attrs());
        assert!(card.toggle_selected());
        assert!(card.is_selected);
        assert!(!card.toggle_selected());
        assert!(!card.is_selected);
    }

    #[test]
    fn test_equality_ignores_id_and_selection() {
        let a = Card::new(CardId(1), attrs());
        let mut b = Card::new(CardId(2), attrs());
        b.is_selected = true;
        assert_eq!(a, b);

        let c = Card::new(
            CardId(1),
            CardAttributes::new(Shape::Oval, Count::Three, Shading::Open, Color::Blue),
        );
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = Card::new(CardId(1), attrs());
        let b = Card::new(CardId(99), attrs());

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        a.hash(&mut h1);
        b.hash(&mut h2);

        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId(0), attrs());
        assert_eq!(card.to_string(), "3 blue open squiggles");
    }

    #[test]
    fn test_serialization() {
        let mut card = Card::new(CardId(10), attrs());
        card.is_selected = true;

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, card.id);
        assert_eq!(deserialized.attributes, card.attributes);
        assert!(deserialized.is_selected);
    }
}
