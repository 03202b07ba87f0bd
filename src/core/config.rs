//! Engine and session configuration.
//!
//! - `SetConfig`: table sizing and the replenish-after-match policy
//! - `SessionConfig`: transient UI timings and the hint fallback policy
//!
//! Both are plain serde structs with `Default` impls and `with_*` builders.
//! Call `validate()` before handing a config to an engine; the engine
//! constructors do this for you.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::error::SetError;

/// What happens to the table after a matched triple leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplenishPolicy {
    /// Deal from the draw pile until the table is back at its visible target.
    #[default]
    AutoReplenish,
    /// Leave the hole; the player must call `deal_more()`.
    Manual,
}

/// What a session does when a hint finds no set on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintFallback {
    /// Report "no set" and leave the table alone.
    #[default]
    None,
    /// Deal one more batch (if possible) and look again.
    AutoDeal,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetConfig {
    /// Cards face-up at the start of a game, and the target that
    /// auto-replenish refills to.
    pub initial_table_size: usize,

    /// Cards moved by a single `deal_more()`.
    pub deal_count: usize,

    /// Table refill behaviour after a match.
    pub replenish: ReplenishPolicy,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            initial_table_size: 12,
            deal_count: 3,
            replenish: ReplenishPolicy::AutoReplenish,
        }
    }
}

impl SetConfig {
    /// Set the initial visible card count.
    #[must_use]
    pub fn with_initial_table_size(mut self, size: usize) -> Self {
        self.initial_table_size = size;
        self
    }

    /// Set the number of cards per deal.
    #[must_use]
    pub fn with_deal_count(mut self, count: usize) -> Self {
        self.deal_count = count;
        self
    }

    /// Set the replenish policy.
    #[must_use]
    pub fn with_replenish(mut self, policy: ReplenishPolicy) -> Self {
        self.replenish = policy;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), SetError> {
        if self.deal_count == 0 {
            return Err(SetError::InvalidConfig("deal_count must be at least 1".into()));
        }
        if self.initial_table_size > DECK_SIZE {
            return Err(SetError::InvalidConfig(format!(
                "initial_table_size {} exceeds the {DECK_SIZE}-card deck",
                self.initial_table_size
            )));
        }
        Ok(())
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long a mismatched triple is reported as shaking.
    pub shake_duration: Duration,

    /// Behaviour when a hint finds nothing.
    pub hint_fallback: HintFallback,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            shake_duration: Duration::from_millis(200),
            hint_fallback: HintFallback::None,
        }
    }
}

impl SessionConfig {
    /// Set the shake feedback window.
    #[must_use]
    pub fn with_shake_duration(mut self, duration: Duration) -> Self {
        self.shake_duration = duration;
        self
    }

    /// Set the hint fallback policy.
    #[must_use]
    pub fn with_hint_fallback(mut self, fallback: HintFallback) -> Self {
        self.hint_fallback = fallback;
        self
    }
}
