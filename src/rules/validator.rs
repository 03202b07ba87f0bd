//! Set validity.
//!
//! Three cards form a set when, on every dimension independently, they are
//! either all equal or all pairwise distinct. "Exactly two equal" on any
//! dimension breaks the set.

use crate::cards::{Card, CardAttributes, Color, Count, Shading, Shape};
use crate::error::SetError;

fn all_same_or_all_different<T: Eq>(a: T, b: T, c: T) -> bool {
    (a == b && b == c) || (a != b && b != c && a != c)
}

/// Check three attribute tuples.
#[must_use]
pub fn is_set(a: &CardAttributes, b: &CardAttributes, c: &CardAttributes) -> bool {
    all_same_or_all_different(a.shape, b.shape, c.shape)
        && all_same_or_all_different(a.count, b.count, c.count)
        && all_same_or_all_different(a.shading, b.shading, c.shading)
        && all_same_or_all_different(a.color, b.color, c.color)
}

/// Check three cards. Symmetric in its arguments.
#[must_use]
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    is_set(&a.attributes, &b.attributes, &c.attributes)
}

/// Check a dynamically sized selection.
///
/// Returns `InvalidTripleArity` unless `cards` holds exactly three cards.
pub fn is_valid_slice(cards: &[Card]) -> Result<bool, SetError> {
    match cards {
        [a, b, c] => Ok(is_valid_set(a, b, c)),
        _ => Err(SetError::InvalidTripleArity(cards.len())),
    }
}

/// The unique attribute tuple that completes a set with `a` and `b`.
///
/// When `a == b` the completion is `a` itself, which the deck never holds
/// twice.
#[must_use]
pub fn complete_set(a: &CardAttributes, b: &CardAttributes) -> CardAttributes {
    // On each dimension the three indices of a set sum to 0 mod 3.
    let third = |x: usize, y: usize| (6 - x - y) % 3;
    let [sa, ca, ha, la] = a.dimensions();
    let [sb, cb, hb, lb] = b.dimensions();
    CardAttributes::new(
        Shape::ALL[third(sa, sb)],
        Count::ALL[third(ca, cb)],
        Shading::ALL[third(ha, hb)],
        Color::ALL[third(la, lb)],
    )
}
