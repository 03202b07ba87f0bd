//! Card identification.
//!
//! Every physical card dealt by an engine has a unique `CardId`. Ids are
//! handed out by a `CardIdAllocator` that only ever counts upward, so an id
//! is never reused, not even across `new_game()` calls on the same engine.
//!
//! ## Usage
//!
//! ```
//! use set_engine::core::{CardId, CardIdAllocator};
//!
//! let mut ids = CardIdAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_ne!(first, second);
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Identity is separate from a card's attributes: two cards compare equal
/// when their attributes match, but each keeps its own `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic source of fresh card ids.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unused id.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
