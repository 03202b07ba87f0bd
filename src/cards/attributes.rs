//! The four card dimensions and the attribute tuple.
//!
//! Every dimension has exactly three values. A card's attributes are a
//! point in a 3×3×3×3 space, which also gives each tuple a compact
//! base-3 index in `0..81`:
//!
//! ```text
//! index = shape * 27 + count * 9 + shading * 3 + color
//! ```

use serde::{Deserialize, Serialize};

/// Shape drawn on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Squiggle,
    Oval,
}

/// Number of shapes on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

/// Fill style of the shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

/// Colour of the shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Purple,
    Pink,
    Blue,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Oval];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Squiggle => "squiggle",
            Shape::Oval => "oval",
        }
    }
}

impl Count {
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of shapes printed (1, 2 or 3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }
}

impl Shading {
    pub const ALL: [Shading; 3] = [Shading::Solid, Shading::Striped, Shading::Open];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Purple, Color::Pink, Color::Blue];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::fmt::Display for Shading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Shading::Solid => "solid",
            Shading::Striped => "striped",
            Shading::Open => "open",
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Blue => "blue",
        })
    }
}

/// The immutable attribute tuple of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardAttributes {
    pub shape: Shape,
    pub count: Count,
    pub shading: Shading,
    pub color: Color,
}

impl CardAttributes {
    #[must_use]
    pub const fn new(shape: Shape, count: Count, shading: Shading, color: Color) -> Self {
        Self {
            shape,
            count,
            shading,
            color,
        }
    }

    /// Decode a base-3 index in `0..81`.
    ///
    /// Returns `None` for indices outside the deck.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 81 {
            return None;
        }
        Some(Self {
            shape: Shape::ALL[index / 27],
            count: Count::ALL[(index / 9) % 3],
            shading: Shading::ALL[(index / 3) % 3],
            color: Color::ALL[index % 3],
        })
    }

    /// Base-3 index of this tuple in `0..81`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.shape.index() * 27 + self.count.index() * 9 + self.shading.index() * 3 + self.color.index()
    }

    /// Per-dimension value indices, in shape/count/shading/color order.
    #[must_use]
    pub const fn dimensions(&self) -> [usize; 4] {
        [
            self.shape.index(),
            self.count.index(),
            self.shading.index(),
            self.color.index(),
        ]
    }
}

impl std::fmt::Display for CardAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.count == Count::One { "" } else { "s" };
        write!(
            f,
            "{} {} {} {}{}",
            self.count, self.color, self.shading, self.shape, plural
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_covers_deck() {
        let mut seen = [false; 81];
        for i in 0..81 {
            let attrs = CardAttributes::from_index(i).unwrap();
            assert_eq!(attrs.index(), i);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert!(CardAttributes::from_index(81).is_none());
    }

    #[test]
    fn test_index_layout() {
        let attrs = CardAttributes::new(Shape::Oval, Count::One, Shading::Striped, Color::Blue);
        // shape 2, count 0, shading 1, color 2
        assert_eq!(attrs.index(), 54 + 3 + 2);
        assert_eq!(attrs.dimensions(), [2, 0, 1, 2]);
    }

    #[test]
    fn test_count_value() {
        assert_eq!(Count::One.value(), 1);
        assert_eq!(Count::Two.value(), 2);
        assert_eq!(Count::Three.value(), 3);
    }

    #[test]
    fn test_display() {
        let one = CardAttributes::new(Shape::Diamond, Count::One, Shading::Solid, Color::Purple);
        assert_eq!(one.to_string(), "1 purple solid diamond");

        let two = CardAttributes::new(Shape::Oval, Count::Two, Shading::Striped, Color::Pink);
        assert_eq!(two.to_string(), "2 pink striped ovals");
    }
}
