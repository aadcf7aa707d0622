//! Events emitted by the game for the presentation layer.

use crate::card::Card;
use crate::round::Round;

/// Something that happened during a game.
///
/// Events are queued in the order they occur and drained with
/// [`Game::take_events`](crate::Game::take_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The countdown finished and round 1 began.
    GameStarted,
    /// A card was drawn for a player.
    CardDrawn {
        /// Index of the player in the roster.
        player_index: usize,
        /// The drawn card.
        card: Card,
    },
    /// A guess was evaluated.
    GuessResult {
        /// Index of the player in the roster.
        player_index: usize,
        /// Whether the guess was correct.
        correct: bool,
    },
    /// The next player in the same round is up.
    TurnAdvanced {
        /// The round being played.
        round: Round,
        /// Index of the player now up.
        player_index: usize,
    },
    /// The previous round is complete and the first player starts the next.
    RoundAdvanced {
        /// The round now being played.
        round: Round,
    },
    /// Every player completed every round.
    GameFinished,
}
