//! Tagged results of engine commands.
//!
//! Each command returns exactly one outcome tag, with ids attached only
//! where they mean something. Callers match on the tag instead of guessing
//! from an empty or missing payload.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::entity::CardId;

/// Result of `select`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The card is not on the table. Nothing changed.
    NotOnTable(CardId),
    /// The card is now selected; fewer than 3 are selected in total.
    Selected(CardId),
    /// The card was selected and no longer is.
    Deselected(CardId),
    /// The third selection completed a set. The cards are now in the
    /// discard pile.
    Matched([CardId; 3]),
    /// The third selection did not form a set. The cards stay on the table,
    /// deselected. A UI typically shakes them.
    Mismatched([CardId; 3]),
}

impl SelectOutcome {
    /// True only for a completed set.
    #[must_use]
    pub fn matched(&self) -> bool {
        matches!(self, SelectOutcome::Matched(_))
    }

    /// The three cards evaluated, if this call filled the selection.
    #[must_use]
    pub fn affected_ids(&self) -> Option<[CardId; 3]> {
        match *self {
            SelectOutcome::Matched(ids) | SelectOutcome::Mismatched(ids) => Some(ids),
            _ => None,
        }
    }

    /// Did selection state change?
    #[must_use]
    pub fn changed_selection(&self) -> bool {
        !matches!(self, SelectOutcome::NotOnTable(_))
    }
}

/// Result of `deal` / `deal_more`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOutcome {
    /// These cards moved from the draw pile to the table.
    Dealt(SmallVec<[CardId; 3]>),
    /// Nothing left to deal.
    DrawPileEmpty,
}

impl DealOutcome {
    #[must_use]
    pub fn is_dealt(&self) -> bool {
        matches!(self, DealOutcome::Dealt(_))
    }

    #[must_use]
    pub fn dealt_ids(&self) -> &[CardId] {
        match self {
            DealOutcome::Dealt(ids) => ids.as_slice(),
            DealOutcome::DrawPileEmpty => &[],
        }
    }
}

/// Result of `give_hint`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    Found([CardId; 3]),
    NoSetOnTable,
}

impl HintOutcome {
    #[must_use]
    pub fn found(&self) -> bool {
        matches!(self, HintOutcome::Found(_))
    }

    #[must_use]
    pub fn ids(&self) -> Option<[CardId; 3]> {
        match *self {
            HintOutcome::Found(ids) => Some(ids),
            HintOutcome::NoSetOnTable => None,
        }
    }
}
