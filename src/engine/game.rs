//! The Set state machine.
//!
//! `SetEngine` owns the piles of one game and exposes the player's intents
//! as commands. Every command resolves completely before it returns: a
//! third selection is validated, the triple is discarded or deselected, the
//! table is refilled per policy and the end-of-game check runs, all inside
//! the one call.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::outcome::{DealOutcome, HintOutcome, SelectOutcome};
use super::status::{EndReason, GameSnapshot, GameStatus, Layout};
use crate::cards::{create_deck, Card, CardAttributes};
use crate::core::config::{ReplenishPolicy, SetConfig};
use crate::core::entity::{CardId, CardIdAllocator};
use crate::core::rng::{GameRng, Shuffle};
use crate::error::SetError;
use crate::rules::{find_set, is_valid_set, MAX_CARDS_WITHOUT_SET};
use crate::zones::{Piles, Zone};

/// Single-player Set game engine.
///
/// ```
/// use set_engine::engine::{SetEngine, GameStatus, HintOutcome};
/// use set_engine::core::SetConfig;
///
/// let mut engine = SetEngine::new(SetConfig::default(), 42).unwrap();
/// assert_eq!(engine.table().len(), 12);
/// assert_eq!(engine.game_status(), GameStatus::InProgress);
///
/// if let HintOutcome::Found(ids) = engine.give_hint() {
///     for id in ids {
///         engine.select(id).unwrap();
///     }
///     assert_eq!(engine.matched_count(), 3);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SetEngine<S: Shuffle = GameRng> {
    config: SetConfig,
    shuffler: S,
    ids: CardIdAllocator,
    piles: Piles,
    status: GameStatus,
}

impl SetEngine<GameRng> {
    /// Create an engine with a seeded `GameRng` and deal the first game.
    pub fn new(config: SetConfig, seed: u64) -> Result<Self, SetError> {
        Self::with_shuffler(config, GameRng::new(seed))
    }
}

impl<S: Shuffle> SetEngine<S> {
    /// Create an engine with an injected shuffler and deal the first game.
    pub fn with_shuffler(config: SetConfig, shuffler: S) -> Result<Self, SetError> {
        config.validate()?;
        let mut engine = Self {
            config,
            shuffler,
            ids: CardIdAllocator::new(),
            piles: Piles::default(),
            status: GameStatus::InProgress,
        };
        engine.new_game();
        Ok(engine)
    }

    /// Create an engine positioned at an explicit layout.
    ///
    /// Cards get fresh ids in zone order (draw, table, discard). The status
    /// is evaluated immediately, so a layout may start already ended.
    pub fn from_layout(config: SetConfig, shuffler: S, layout: &Layout) -> Result<Self, SetError> {
        config.validate()?;
        let mut ids = CardIdAllocator::new();
        let mut place = |attrs: &[CardAttributes]| -> Vec<Card> {
            attrs.iter().map(|&a| Card::new(ids.alloc(), a)).collect()
        };
        let draw = place(&layout.draw);
        let table = place(&layout.table);
        let discard = place(&layout.discard);

        let piles = Piles::from_zones(draw, table, discard);
        if !piles.is_partition() {
            return Err(SetError::InvalidLayout(format!(
                "{} draw + {} table + {} discard cards do not cover the deck exactly once",
                layout.draw.len(),
                layout.table.len(),
                layout.discard.len()
            )));
        }

        let mut engine = Self {
            config,
            shuffler,
            ids,
            piles,
            status: GameStatus::InProgress,
        };
        engine.refresh_status();
        Ok(engine)
    }

    // === Commands ===

    /// Start over with a freshly shuffled deck.
    pub fn new_game(&mut self) {
        let deck = create_deck(&mut self.ids, &mut self.shuffler);
        self.piles = Piles::new(deck);
        self.piles.deal(self.config.initial_table_size);
        self.status = GameStatus::InProgress;
        self.refresh_status();
        debug!(table = self.piles.len(Zone::Table), "new game");
    }

    /// Toggle a table card and resolve a full selection.
    ///
    /// Returns `NotOnTable` without mutating anything if `id` is not face-up.
    /// Fails with `GameOver` once the game has ended.
    pub fn select(&mut self, id: CardId) -> Result<SelectOutcome, SetError> {
        self.ensure_in_progress()?;

        // A full selection is always resolved before returning, so at most
        // two cards are selected here and any toggle is allowed.
        debug_assert!(self.piles.selected_count() < 3);

        let now_selected = match self.piles.toggle_selected(id) {
            Some(selected) => selected,
            None => {
                trace!(%id, "select ignored: card not on table");
                return Ok(SelectOutcome::NotOnTable(id));
            }
        };

        let selected = self.piles.selected();
        let [a, b, c] = match selected.as_slice() {
            [a, b, c] => [*a, *b, *c],
            _ => {
                trace!(%id, now_selected, "selection toggled");
                return Ok(if now_selected {
                    SelectOutcome::Selected(id)
                } else {
                    SelectOutcome::Deselected(id)
                });
            }
        };
        let ids = [a.id, b.id, c.id];

        if is_valid_set(&a, &b, &c) {
            debug!(cards = ?ids, "matched");
            self.piles.discard_from_table(&ids);
            if self.config.replenish == ReplenishPolicy::AutoReplenish {
                self.replenish();
            }
            self.refresh_status();
            Ok(SelectOutcome::Matched(ids))
        } else {
            debug!(cards = ?ids, "match failed");
            self.piles.clear_selection();
            Ok(SelectOutcome::Mismatched(ids))
        }
    }

    /// Deal `config.deal_count` more cards.
    pub fn deal_more(&mut self) -> Result<DealOutcome, SetError> {
        self.deal(self.config.deal_count)
    }

    /// Deal up to `count` cards from the draw pile onto the table.
    pub fn deal(&mut self, count: usize) -> Result<DealOutcome, SetError> {
        self.ensure_in_progress()?;
        if self.piles.len(Zone::Draw) == 0 {
            return Ok(DealOutcome::DrawPileEmpty);
        }

        let dealt = self.piles.deal(count);
        debug!(dealt = dealt.len(), remaining = self.piles.len(Zone::Draw), "dealt");
        self.refresh_status();
        Ok(DealOutcome::Dealt(dealt))
    }

    // === Queries ===

    /// First set on the table in table order. Never mutates.
    #[must_use]
    pub fn give_hint(&self) -> HintOutcome {
        let table: Vec<Card> = self.piles.cards(Zone::Table).iter().copied().collect();
        match find_set(&table) {
            Some(ids) => HintOutcome::Found(ids),
            None => HintOutcome::NoSetOnTable,
        }
    }

    /// Snapshot of the whole observable state.
    #[must_use]
    pub fn status(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            table: self.piles.cards(Zone::Table).clone(),
            draw_count: self.piles.len(Zone::Draw),
            discard: self.piles.cards(Zone::Discard).clone(),
        }
    }

    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn table(&self) -> &Vector<Card> {
        self.piles.cards(Zone::Table)
    }

    /// Matched cards, newest triple first.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        self.piles.cards(Zone::Discard)
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.piles.len(Zone::Draw)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.piles.len(Zone::Discard)
    }

    /// Cards across all three piles. Always the full deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.total()
    }

    #[must_use]
    pub fn can_deal_more(&self) -> bool {
        !self.is_over() && self.piles.len(Zone::Draw) > 0
    }

    /// Selected table cards, in table order.
    #[must_use]
    pub fn selected_ids(&self) -> SmallVec<[CardId; 3]> {
        self.piles.selected().iter().map(|c| c.id).collect()
    }

    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        self.piles.zone_of(id)
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> Result<(), SetError> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::Ended(reason) => Err(SetError::GameOver(reason)),
        }
    }

    /// Refill the table up to its visible target.
    fn replenish(&mut self) {
        let missing = self
            .config
            .initial_table_size
            .saturating_sub(self.piles.len(Zone::Table));
        if missing > 0 {
            let dealt = self.piles.deal(missing);
            trace!(dealt = dealt.len(), "replenished table");
        }
    }

    fn evaluate_status(&self) -> GameStatus {
        let draw = self.piles.cards(Zone::Draw);
        let table = self.piles.cards(Zone::Table);

        if draw.is_empty() && table.is_empty() {
            return GameStatus::Ended(EndReason::AllCardsMatched);
        }
        if draw.len() + table.len() <= MAX_CARDS_WITHOUT_SET {
            let remaining: Vec<Card> = table.iter().chain(draw.iter()).copied().collect();
            if find_set(&remaining).is_none() {
                return GameStatus::Ended(EndReason::NoSetRemains);
            }
        }
        GameStatus::InProgress
    }

    fn refresh_status(&mut self) {
        let next = self.evaluate_status();
        if let (GameStatus::InProgress, GameStatus::Ended(reason)) = (self.status, next) {
            debug!(%reason, matched = self.piles.len(Zone::Discard), "game over");
        }
        self.status = next;
    }
}
