//! View-model boundary around the engine.
//!
//! `GameSession` adds what a UI needs on top of the rules: how long the game
//! has taken, which cards to shake after a failed match, and which cards a
//! hint is highlighting. It never decides anything about the game itself.

use std::time::Duration;

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use crate::cards::Card;
use crate::core::config::{HintFallback, SessionConfig, SetConfig};
use crate::core::entity::CardId;
use crate::core::rng::{GameRng, Shuffle};
use crate::engine::{DealOutcome, GameSnapshot, HintOutcome, SelectOutcome, SetEngine};
use crate::error::SetError;

/// Ids that stay highlighted until a deadline on the session clock.
#[derive(Clone, Debug)]
struct Transient {
    ids: FxHashSet<CardId>,
    expires_at: Duration,
}

/// A running game plus its presentation state.
#[derive(Clone, Debug)]
pub struct GameSession<C: Clock = SystemClock, S: Shuffle = GameRng> {
    engine: SetEngine<S>,
    clock: C,
    config: SessionConfig,
    started_at: Duration,
    time_taken: Option<Duration>,
    shake: Option<Transient>,
    hinted: FxHashSet<CardId>,
}

impl GameSession<SystemClock, GameRng> {
    /// Start a default game on the wall clock.
    pub fn start(seed: u64) -> Result<Self, SetError> {
        let engine = SetEngine::new(SetConfig::default(), seed)?;
        Ok(Self::new(engine, SystemClock::new(), SessionConfig::default()))
    }
}

impl<C: Clock, S: Shuffle> GameSession<C, S> {
    /// Wrap an engine. The game clock starts now.
    pub fn new(engine: SetEngine<S>, clock: C, config: SessionConfig) -> Self {
        let started_at = clock.now();
        let mut session = Self {
            engine,
            clock,
            config,
            started_at,
            time_taken: None,
            shake: None,
            hinted: FxHashSet::default(),
        };
        session.observe_end();
        session
    }

    // === Intents ===

    /// Deal a fresh game and restart the clock.
    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.started_at = self.clock.now();
        self.time_taken = None;
        self.shake = None;
        self.hinted.clear();
    }

    /// Forward a tap to the engine and update shake/hint state.
    pub fn select(&mut self, id: CardId) -> Result<SelectOutcome, SetError> {
        let outcome = self.engine.select(id)?;

        if outcome.changed_selection() {
            self.hinted.clear();
        }
        if let SelectOutcome::Mismatched(ids) = outcome {
            self.shake = Some(Transient {
                ids: ids.into_iter().collect(),
                expires_at: self.clock.now() + self.config.shake_duration,
            });
        }

        self.observe_end();
        Ok(outcome)
    }

    /// Deal more cards.
    pub fn deal_more(&mut self) -> Result<DealOutcome, SetError> {
        let outcome = self.engine.deal_more()?;
        self.observe_end();
        Ok(outcome)
    }

    /// Highlight a set on the table.
    ///
    /// With `HintFallback::AutoDeal`, a miss deals one more batch (when the
    /// draw pile allows) and looks again.
    pub fn give_hint(&mut self) -> HintOutcome {
        let mut outcome = self.engine.give_hint();

        if !outcome.found()
            && self.config.hint_fallback == HintFallback::AutoDeal
            && self.engine.can_deal_more()
        {
            if let Ok(DealOutcome::Dealt(dealt)) = self.engine.deal_more() {
                debug!(dealt = dealt.len(), "no set on table, dealt more for hint");
                outcome = self.engine.give_hint();
                self.observe_end();
            }
        }

        self.hinted = outcome
            .ids()
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default();
        outcome
    }

    /// Drop the shake set now, ahead of its deadline.
    pub fn clear_shake(&mut self) {
        self.shake = None;
    }

    /// Drop transient state whose deadline has passed. Returns true if
    /// anything was cleared.
    pub fn expire_transients(&mut self) -> bool {
        let now = self.clock.now();
        match &self.shake {
            Some(shake) if now >= shake.expires_at => {
                self.shake = None;
                true
            }
            _ => false,
        }
    }

    // === Projections ===

    #[must_use]
    pub fn engine(&self) -> &SetEngine<S> {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        self.engine.table()
    }

    #[must_use]
    pub fn status(&self) -> GameSnapshot {
        self.engine.status()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.engine.matched_count()
    }

    #[must_use]
    pub fn can_deal_more(&self) -> bool {
        self.engine.can_deal_more()
    }

    /// Cards a hint is currently highlighting.
    #[must_use]
    pub fn hinted_ids(&self) -> &FxHashSet<CardId> {
        &self.hinted
    }

    #[must_use]
    pub fn hint_shown(&self) -> bool {
        !self.hinted.is_empty()
    }

    #[must_use]
    pub fn is_hinted(&self, id: CardId) -> bool {
        self.hinted.contains(&id)
    }

    /// Cards that should be shaking right now, if any.
    #[must_use]
    pub fn shaking_ids(&self) -> Option<&FxHashSet<CardId>> {
        let now = self.clock.now();
        self.shake
            .as_ref()
            .filter(|shake| now < shake.expires_at)
            .map(|shake| &shake.ids)
    }

    #[must_use]
    pub fn is_shaking(&self, id: CardId) -> bool {
        self.shaking_ids().is_some_and(|ids| ids.contains(&id))
    }

    /// Time since the game started; frozen once the game ends.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.time_taken
            .unwrap_or_else(|| self.clock.now().saturating_sub(self.started_at))
    }

    /// Total time of a finished game.
    #[must_use]
    pub fn time_taken(&self) -> Option<Duration> {
        self.time_taken
    }

    fn observe_end(&mut self) {
        if self.time_taken.is_none() && self.engine.is_over() {
            let taken = self.clock.now().saturating_sub(self.started_at);
            debug!(seconds = taken.as_secs_f64(), "game finished");
            self.time_taken = Some(taken);
        }
    }
}
