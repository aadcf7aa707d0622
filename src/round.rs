//! Rounds and the guesses each round accepts.

use core::fmt;

use crate::card::{Color, Suit};

/// One of the four rounds, played in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Round {
    /// Round 1: red or black.
    Color,
    /// Round 2: higher or lower than the first card.
    HigherLower,
    /// Round 3: inside or outside the first two cards.
    InsideOutside,
    /// Round 4: the suit.
    Suit,
}

impl Round {
    /// All rounds in play order.
    pub const ALL: [Self; 4] = [
        Self::Color,
        Self::HigherLower,
        Self::InsideOutside,
        Self::Suit,
    ];

    /// Returns the 1-based round number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Color => 1,
            Self::HigherLower => 2,
            Self::InsideOutside => 3,
            Self::Suit => 4,
        }
    }

    /// Returns the round with the given 1-based number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Color),
            2 => Some(Self::HigherLower),
            3 => Some(Self::InsideOutside),
            4 => Some(Self::Suit),
            _ => None,
        }
    }

    /// Returns the following round, or `None` after the last one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Color => Some(Self::HigherLower),
            Self::HigherLower => Some(Self::InsideOutside),
            Self::InsideOutside => Some(Self::Suit),
            Self::Suit => None,
        }
    }

    /// Returns the guess domain of the round.
    #[must_use]
    pub const fn guesses(self) -> &'static [Guess] {
        match self {
            Self::Color => &[Guess::Color(Color::Red), Guess::Color(Color::Black)],
            Self::HigherLower => &[
                Guess::Direction(Direction::Higher),
                Guess::Direction(Direction::Lower),
            ],
            Self::InsideOutside => &[Guess::Span(Span::Inside), Guess::Span(Span::Outside)],
            Self::Suit => &[
                Guess::Suit(Suit::Hearts),
                Guess::Suit(Suit::Diamonds),
                Guess::Suit(Suit::Spades),
                Guess::Suit(Suit::Clubs),
            ],
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Round 2 guess: is the new card higher or lower than the first card?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Strictly higher rank.
    Higher,
    /// Strictly lower rank.
    Lower,
}

/// Round 3 guess: does the new card fall between the first two cards?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// Strictly between the two ranks.
    Inside,
    /// Strictly below the lower or above the higher rank.
    Outside,
}

/// A player's guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// Round 1.
    Color(Color),
    /// Round 2.
    Direction(Direction),
    /// Round 3.
    Span(Span),
    /// Round 4.
    Suit(Suit),
}

impl Guess {
    /// Returns the round whose domain contains this guess.
    #[must_use]
    pub const fn round(self) -> Round {
        match self {
            Self::Color(_) => Round::Color,
            Self::Direction(_) => Round::HigherLower,
            Self::Span(_) => Round::InsideOutside,
            Self::Suit(_) => Round::Suit,
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::Direction(Direction::Higher) => f.write_str("Higher"),
            Self::Direction(Direction::Lower) => f.write_str("Lower"),
            Self::Span(Span::Inside) => f.write_str("Inside"),
            Self::Span(Span::Outside) => f.write_str("Outside"),
            Self::Suit(suit) => write!(f, "{suit}"),
        }
    }
}
