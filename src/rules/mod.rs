//! The rules of Set: triple validity and exhaustive search.
//!
//! - `is_valid_set`: fixed-arity predicate over three cards
//! - `find_set`: first valid triple in a collection, or `None`
//!
//! Both are pure functions; the engine owns all state.

pub mod finder;
pub mod validator;

pub use finder::{count_sets, find_set, MAX_CARDS_WITHOUT_SET};
pub use validator::{complete_set, is_set, is_valid_set, is_valid_slice};
