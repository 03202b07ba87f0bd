//! Card locations: draw pile, table, discard pile.
//!
//! `Piles` owns every card of a game and only ever relocates them, so the
//! three zones always partition the deck. All three are ordered:
//! - draw: dealt from the front
//! - table: dealt cards appended at the back
//! - discard: newest matched triple at the front
//!
//! Zones are `im::Vector`s, so snapshots of a whole layout clone in O(1).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, DECK_SIZE};
use crate::core::entity::CardId;

/// The three places a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down, not yet dealt.
    Draw,
    /// Face-up and selectable.
    Table,
    /// Matched and out of play.
    Discard,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Zone::Draw => "draw pile",
            Zone::Table => "table",
            Zone::Discard => "discard pile",
        })
    }
}

/// Ordered card zones for one game.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Piles {
    draw: Vector<Card>,
    table: Vector<Card>,
    discard: Vector<Card>,
}

impl Piles {
    /// Put a whole deck into the draw pile, in the given order.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            draw: Vector::from(deck),
            table: Vector::new(),
            discard: Vector::new(),
        }
    }

    /// Build piles from explicit zone contents.
    ///
    /// The caller is responsible for checking `is_partition()`.
    #[must_use]
    pub fn from_zones(draw: Vec<Card>, table: Vec<Card>, discard: Vec<Card>) -> Self {
        Self {
            draw: Vector::from(draw),
            table: Vector::from(table),
            discard: Vector::from(discard),
        }
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &Vector<Card> {
        match zone {
            Zone::Draw => &self.draw,
            Zone::Table => &self.table,
            Zone::Discard => &self.discard,
        }
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.cards(zone).len()
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw.len() + self.table.len() + self.discard.len()
    }

    /// Find which zone holds a card.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        [Zone::Table, Zone::Draw, Zone::Discard]
            .into_iter()
            .find(|&zone| self.cards(zone).iter().any(|c| c.id == id))
    }

    /// Position of a card on the table.
    #[must_use]
    pub fn table_position(&self, id: CardId) -> Option<usize> {
        self.table.iter().position(|c| c.id == id)
    }

    /// Table card by id.
    #[must_use]
    pub fn table_card(&self, id: CardId) -> Option<&Card> {
        self.table.iter().find(|c| c.id == id)
    }

    /// Flip selection on a table card. Returns the new flag, or `None` if
    /// the card is not on the table.
    pub fn toggle_selected(&mut self, id: CardId) -> Option<bool> {
        let idx = self.table_position(id)?;
        self.table.get_mut(idx).map(Card::toggle_selected)
    }

    /// Selected table cards, in table order.
    #[must_use]
    pub fn selected(&self) -> SmallVec<[Card; 3]> {
        self.table.iter().filter(|c| c.is_selected).copied().collect()
    }

    /// Number of selected table cards.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.table.iter().filter(|c| c.is_selected).count()
    }

    /// Deselect every table card.
    pub fn clear_selection(&mut self) {
        for card in self.table.iter_mut() {
            card.is_selected = false;
        }
    }

    /// Move up to `count` cards from the front of the draw pile to the back
    /// of the table. Returns the ids moved.
    pub fn deal(&mut self, count: usize) -> SmallVec<[CardId; 3]> {
        let mut dealt = SmallVec::new();
        for _ in 0..count {
            match self.draw.pop_front() {
                Some(card) => {
                    dealt.push(card.id);
                    self.table.push_back(card);
                }
                None => break,
            }
        }
        dealt
    }

    /// Move the given table cards to the front of the discard pile.
    ///
    /// Moved cards keep their table order and lose their selection flag.
    /// Ids not on the table are ignored. Returns how many cards moved.
    pub fn discard_from_table(&mut self, ids: &[CardId]) -> usize {
        let (mut moved, kept): (Vec<Card>, Vec<Card>) =
            self.table.iter().copied().partition(|c| ids.contains(&c.id));
        for card in &mut moved {
            card.is_selected = false;
        }

        let count = moved.len();
        let mut front = Vector::from(moved);
        front.append(std::mem::take(&mut self.discard));
        self.discard = front;
        self.table = Vector::from(kept);
        count
    }

    /// Check the zones hold each card of the deck exactly once.
    #[must_use]
    pub fn is_partition(&self) -> bool {
        if self.total() != DECK_SIZE {
            return false;
        }
        let mut ids = FxHashSet::default();
        let mut tuples = FxHashSet::default();
        self.draw
            .iter()
            .chain(self.table.iter())
            .chain(self.discard.iter())
            .all(|c| ids.insert(c.id) && tuples.insert(c.attributes))
    }
}
