//! Quarto pieces and their attributes.

use std::fmt;

use anyhow::{bail, Context};

bitflags::bitflags! {
    /// The four binary properties every Quarto piece has. A piece either has
    /// the property (tall, colored, solid, square) or its opposite (short,
    /// neutral, hollow, round).
    ///
    /// The bit of each attribute matches its position in the piece index:
    ///
    /// | Bit | Set    | Unset   |
    /// | --- | ------ | ------- |
    /// | 0   | tall   | short   |
    /// | 1   | colored| neutral |
    /// | 2   | solid  | hollow  |
    /// | 3   | square | round   |
    ///
    /// The same type is used as a set of attributes, e.g. the attributes two
    /// pieces agree on or the attributes a nearly complete line shares.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attributes: u8 {
        /// Tall (set) or short (unset).
        const TALL = 0b0001;
        /// Colored (set) or neutral (unset).
        const COLORED = 0b0010;
        /// Solid (set) or hollow (unset).
        const SOLID = 0b0100;
        /// Square (set) or round (unset).
        const SQUARE = 0b1000;
    }
}

impl Attributes {
    /// Every single attribute in bit order.
    pub const EACH: [Self; 4] = [Self::TALL, Self::COLORED, Self::SOLID, Self::SQUARE];
}

/// One of the 16 distinct Quarto pieces, identified by a 4-bit index where bit
/// `i` holds the value of attribute `i` (see [`Attributes`]).
///
/// ```
/// use quarto_search::quarto::{Attributes, Piece};
///
/// let piece = Piece::from_index(0b0101).unwrap();
/// assert!(piece.has(Attributes::TALL));
/// assert!(!piece.has(Attributes::COLORED));
/// assert!(piece.has(Attributes::SOLID));
/// assert!(!piece.has(Attributes::SQUARE));
/// assert!(Piece::from_index(16).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces in the game.
    pub const COUNT: usize = 16;

    /// Returns the piece with given index or `None` if the index is outside of
    /// `[0, 15]`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < Self::COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Builds the piece that has exactly the given attributes set.
    #[must_use]
    pub const fn from_attributes(attributes: Attributes) -> Self {
        Self(attributes.bits())
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Attributes this piece has (the unset ones are the opposite values).
    #[must_use]
    pub const fn attributes(self) -> Attributes {
        Attributes::from_bits_truncate(self.0)
    }

    /// Returns `true` if the piece has the given attribute(s) set.
    #[must_use]
    pub const fn has(self, attribute: Attributes) -> bool {
        self.attributes().contains(attribute)
    }

    /// Attributes on which both pieces have the same value, set or unset.
    ///
    /// ```
    /// use quarto_search::quarto::{Attributes, Piece};
    ///
    /// let short_neutral = Piece::from_index(0b0000).unwrap();
    /// let tall_neutral = Piece::from_index(0b0001).unwrap();
    /// assert_eq!(
    ///     short_neutral.agreement(tall_neutral),
    ///     Attributes::COLORED | Attributes::SOLID | Attributes::SQUARE
    /// );
    /// ```
    #[must_use]
    pub const fn agreement(self, other: Self) -> Attributes {
        Attributes::from_bits_truncate(!(self.0 ^ other.0))
    }

    /// Returns the piece that differs from this one only in given attributes.
    #[must_use]
    pub const fn flip(self, attributes: Attributes) -> Self {
        Self(self.0 ^ attributes.bits())
    }

    /// All pieces in the order of their indices.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for Piece {
    type Error = anyhow::Error;

    fn try_from(index: u8) -> anyhow::Result<Self> {
        match Self::from_index(index) {
            Some(piece) => Ok(piece),
            None => bail!("piece index should be within [0, 15], got {index}"),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses a single hexadecimal digit.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let index = symbol
            .to_digit(16)
            .with_context(|| format!("piece should be a hexadecimal digit, got '{symbol}'"))?;
        // `to_digit(16)` never yields a value above 15.
        Self::try_from(index as u8)
    }
}

impl fmt::Display for Piece {
    /// Formats the piece as a lowercase hexadecimal digit, the notation used by
    /// [`crate::quarto::Game`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}
