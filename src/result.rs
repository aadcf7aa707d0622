//! Result of a single guess.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::round::{Guess, Round};

/// How the game moved on after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The next player plays the same round.
    Turn {
        /// Index of the player now up.
        player_index: usize,
    },
    /// The round is complete; the first player starts the next round.
    Round(Round),
    /// The last player completed the last round.
    Finished,
}

/// The outcome of one player's guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round the guess was made in.
    pub round: Round,
    /// Index of the guessing player in the roster.
    pub player_index: usize,
    /// Name of the guessing player.
    pub player: String,
    /// The guess.
    pub guess: Guess,
    /// The card drawn for the guess.
    pub card: Card,
    /// Whether the guess was correct.
    pub correct: bool,
    /// Where play moved afterwards.
    pub advance: Advance,
}
