//! Guess evaluation for each round.
//!
//! Every evaluator is a pure function of the drawn card, the guess, and the
//! prior cards it compares against. Rank comparisons use [`Rank`](crate::card::Rank) order, so
//! Ace is always low.

use crate::card::{Card, Color, Suit};
use crate::error::GuessError;
use crate::round::{Direction, Guess, Span};

/// Round 1: the drawn card has the guessed color.
#[must_use]
pub fn color_matches(drawn: Card, guess: Color) -> bool {
    drawn.color() == guess
}

/// Round 2: the drawn card is strictly higher or lower than `first`.
///
/// Equal ranks are never correct.
#[must_use]
pub fn higher_lower(first: Card, drawn: Card, guess: Direction) -> bool {
    match guess {
        Direction::Higher => drawn.rank > first.rank,
        Direction::Lower => drawn.rank < first.rank,
    }
}

/// Round 3: the drawn card falls strictly inside or strictly outside the
/// range spanned by `first` and `second`.
///
/// A rank equal to either bound is never correct.
#[must_use]
pub fn inside_outside(first: Card, second: Card, drawn: Card, guess: Span) -> bool {
    let lo = first.rank.min(second.rank);
    let hi = first.rank.max(second.rank);

    match guess {
        Span::Inside => lo < drawn.rank && drawn.rank < hi,
        Span::Outside => drawn.rank < lo || drawn.rank > hi,
    }
}

/// Round 4: the drawn card has the guessed suit.
#[must_use]
pub fn suit_matches(drawn: Card, guess: Suit) -> bool {
    drawn.suit == guess
}

/// Evaluates `guess` against `drawn`, taking prior cards from the front of
/// the player's `history`.
///
/// # Errors
///
/// Returns [`GuessError::MissingHistory`] if the guess compares against
/// cards the player has not drawn yet.
pub fn evaluate(guess: Guess, drawn: Card, history: &[Card]) -> Result<bool, GuessError> {
    match guess {
        Guess::Color(color) => Ok(color_matches(drawn, color)),
        Guess::Direction(direction) => {
            let [first, ..] = history else {
                return Err(GuessError::MissingHistory);
            };
            Ok(higher_lower(*first, drawn, direction))
        }
        Guess::Span(span) => {
            let [first, second, ..] = history else {
                return Err(GuessError::MissingHistory);
            };
            Ok(inside_outside(*first, *second, drawn, span))
        }
        Guess::Suit(suit) => Ok(suit_matches(drawn, suit)),
    }
}
