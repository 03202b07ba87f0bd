//! Exhaustive set search.
//!
//! `find_set` walks every unordered triple `i < j < k` in the caller's order
//! and returns the first one that validates. Both hints and end-of-game
//! detection go through it, so they always agree.

use super::validator::is_valid_set;
use crate::cards::Card;
use crate::core::entity::CardId;

/// Largest number of cards that can be laid out without containing a set.
///
/// Any 21 distinct cards contain at least one set, so the engine only scans
/// for a dead end once `table + draw` has shrunk to this size.
pub const MAX_CARDS_WITHOUT_SET: usize = 20;

/// First valid triple under ascending `(i, j, k)` enumeration.
///
/// Returns `None` if no triple validates, including when `cards.len() < 3`.
#[must_use]
pub fn find_set(cards: &[Card]) -> Option<[CardId; 3]> {
    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_set(&cards[i], &cards[j], &cards[k]) {
                    return Some([cards[i].id, cards[j].id, cards[k].id]);
                }
            }
        }
    }
    None
}

/// Number of valid triples in `cards`.
#[must_use]
pub fn count_sets(cards: &[Card]) -> usize {
    let n = cards.len();
    let mut found = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_set(&cards[i], &cards[j], &cards[k]) {
                    found += 1;
                }
            }
        }
    }
    found
}
