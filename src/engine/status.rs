//! Game status and observable snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardAttributes};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// Draw pile and table are both empty.
    AllCardsMatched,
    /// Cards remain, but no set can be formed from them.
    NoSetRemains,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EndReason::AllCardsMatched => "all cards matched",
            EndReason::NoSetRemains => "no set remains",
        })
    }
}

/// State machine position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Ended(EndReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }

    #[must_use]
    pub fn end_reason(self) -> Option<EndReason> {
        match self {
            GameStatus::Ended(reason) => Some(reason),
            GameStatus::InProgress => None,
        }
    }
}

/// Everything a UI needs to render one frame.
///
/// Pile contents are persistent vectors, so taking a snapshot is cheap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub table: Vector<Card>,
    pub draw_count: usize,
    pub discard: Vector<Card>,
}

impl GameSnapshot {
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.status.end_reason()
    }
}

/// Explicit card placement used to restore or construct a game.
///
/// Each list is in zone order (draw front first, discard newest first).
/// Together the lists must cover the 81 attribute tuples exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub draw: Vec<CardAttributes>,
    pub table: Vec<CardAttributes>,
    pub discard: Vec<CardAttributes>,
}

impl Layout {
    #[must_use]
    pub fn new(
        draw: Vec<CardAttributes>,
        table: Vec<CardAttributes>,
        discard: Vec<CardAttributes>,
    ) -> Self {
        Self {
            draw,
            table,
            discard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::InProgress.is_over());
        assert_eq!(GameStatus::InProgress.end_reason(), None);

        let ended = GameStatus::Ended(EndReason::NoSetRemains);
        assert!(ended.is_over());
        assert_eq!(ended.end_reason(), Some(EndReason::NoSetRemains));
        assert_eq!(GameStatus::default(), GameStatus::InProgress);
    }

    #[test]
    fn test_end_reason_display() {
        assert_eq!(EndReason::AllCardsMatched.to_string(), "all cards matched");
        assert_eq!(EndReason::NoSetRemains.to_string(), "no set remains");
    }
}
