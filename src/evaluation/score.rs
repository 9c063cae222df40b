use std::fmt::Display;
use std::ops::Neg;

/// Value of a position found by [`crate::search::minimax`], from the
/// perspective of the maximizing player at the root.
///
/// Quarto search does not use heuristic leaf values: a line either leads to a
/// Quarto within the horizon or it is treated as neutral.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    value: i8,
}

impl Score {
    /// Neutral value: a draw or a position whose outcome is beyond the search
    /// horizon.
    pub const DRAW: Self = Self { value: 0 };
    /// Bound used to initialize alpha-beta windows. Never returned for an
    /// explored position.
    pub const INFINITY: Self = Self { value: i8::MAX };
    /// The minimizing player completes a line.
    pub const LOSS: Self = Self { value: -1 };
    /// The maximizing player completes a line.
    pub const WIN: Self = Self { value: 1 };

    /// Returns `true` if the score is a win or a loss, not a neutral value.
    #[must_use]
    pub const fn is_decisive(self) -> bool {
        self.value == Self::WIN.value || self.value == Self::LOSS.value
    }
}

impl Neg for Score {
    type Output = Self;

    /// Mirrors the score to the other player's perspective.
    fn neg(self) -> Self::Output {
        Self { value: -self.value }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::WIN => write!(f, "win"),
            Self::LOSS => write!(f, "loss"),
            Self::DRAW => write!(f, "draw"),
            Self::INFINITY => write!(f, "+inf"),
            _ if *self == -Self::INFINITY => write!(f, "-inf"),
            _ => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order() {
        assert!(-Score::INFINITY < Score::LOSS);
        assert!(Score::LOSS < Score::DRAW);
        assert!(Score::DRAW < Score::WIN);
        assert!(Score::WIN < Score::INFINITY);
    }

    #[test]
    fn neg() {
        assert_eq!(-Score::WIN, Score::LOSS);
        assert_eq!(-Score::DRAW, Score::DRAW);
        assert_eq!(-(-Score::INFINITY), Score::INFINITY);
    }

    #[test]
    fn decisive() {
        assert!(Score::WIN.is_decisive());
        assert!(Score::LOSS.is_decisive());
        assert!(!Score::DRAW.is_decisive());
        assert!(!Score::INFINITY.is_decisive());
    }

    #[test]
    fn display() {
        assert_eq!(Score::WIN.to_string(), "win");
        assert_eq!(Score::LOSS.to_string(), "loss");
        assert_eq!(Score::DRAW.to_string(), "draw");
        assert_eq!((-Score::INFINITY).to_string(), "-inf");
    }
}
