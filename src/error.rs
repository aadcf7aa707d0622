//! Error types for lobby and game operations.

use thiserror::Error;

use crate::round::{Guess, Round};

/// Errors that can occur while managing the lobby roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LobbyError {
    /// Player name is empty after trimming.
    #[error("player name is empty")]
    EmptyName,
    /// A player with this name is already registered.
    #[error("player is already registered")]
    DuplicatePlayer,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Fewer than two players are registered.
    #[error("at least two players are needed to start")]
    InsufficientPlayers,
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when leaving the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BeginError {
    /// The first round has already begun.
    #[error("the game has already begun")]
    AlreadyStarted,
}

/// Errors that can occur when a player guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The countdown has not finished yet.
    #[error("the game has not begun")]
    NotStarted,
    /// Every player has completed every round.
    #[error("the game is finished")]
    GameFinished,
    /// The guess does not belong to the current round's guess domain.
    #[error("guess {guess:?} is not valid in round {round}")]
    InvalidGuess {
        /// The round currently being played.
        round: Round,
        /// The rejected guess.
        guess: Guess,
    },
    /// The current player lacks the prior cards the round compares against.
    #[error("player has not drawn the cards this round compares against")]
    MissingHistory,
    /// No cards left in the deck. The game cannot continue and must be reset.
    #[error("deck exhausted")]
    EmptyDeck,
}

impl From<DrawError> for GuessError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}
