//! Two-valued player identity.
//!
//! Every variant has exactly two adversarial sides (X/O, Red/Yellow,
//! White/Black). Games define their own side enum and implement `Side`;
//! search code only ever asks for the opponent and compares sides.

use std::fmt::{Debug, Display};

/// One of the two adversarial identities in a game.
pub trait Side: Copy + Eq + Debug + Display + 'static {
    /// Both sides, first mover first.
    const BOTH: [Self; 2];

    /// The other side.
    #[must_use]
    fn opponent(self) -> Self;

    /// Wire symbol for this side (`'X'`, `'R'`, `'W'`, ...).
    #[must_use]
    fn symbol(self) -> char;

    /// Parse a wire symbol. Case-sensitive.
    #[must_use]
    fn from_symbol(symbol: char) -> Option<Self> {
        Self::BOTH.into_iter().find(|side| side.symbol() == symbol)
    }

    /// Index into two-element tables (`0` for the first mover).
    #[must_use]
    fn index(self) -> usize {
        usize::from(self != Self::BOTH[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Coin {
        Heads,
        Tails,
    }

    impl Display for Coin {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.symbol())
        }
    }

    impl Side for Coin {
        const BOTH: [Self; 2] = [Coin::Heads, Coin::Tails];

        fn opponent(self) -> Self {
            match self {
                Coin::Heads => Coin::Tails,
                Coin::Tails => Coin::Heads,
            }
        }

        fn symbol(self) -> char {
            match self {
                Coin::Heads => 'H',
                Coin::Tails => 'T',
            }
        }
    }

    #[test]
    fn test_opponent_is_involution() {
        for side in Coin::BOTH {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_symbol_round_trip() {
        assert_eq!(Coin::from_symbol('H'), Some(Coin::Heads));
        assert_eq!(Coin::from_symbol('T'), Some(Coin::Tails));
        assert_eq!(Coin::from_symbol('h'), None);
    }

    #[test]
    fn test_index() {
        assert_eq!(Coin::Heads.index(), 0);
        assert_eq!(Coin::Tails.index(), 1);
    }
}
