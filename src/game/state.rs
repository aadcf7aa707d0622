//! Game state types.

use crate::round::Round;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the countdown to finish.
    AwaitingStart,
    /// A round is being played.
    InRound(TurnPosition),
    /// Every player completed every round.
    Finished,
}

impl GameState {
    /// Returns the current turn, if a round is being played.
    #[must_use]
    pub const fn turn(&self) -> Option<TurnPosition> {
        match self {
            Self::InRound(turn) => Some(*turn),
            Self::AwaitingStart | Self::Finished => None,
        }
    }
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// The round being played.
    pub round: Round,
    /// Index into the player list.
    pub player_index: usize,
}

impl TurnPosition {
    /// The first player's turn in round 1.
    pub const FIRST: Self = Self {
        round: Round::Color,
        player_index: 0,
    };

    /// Returns the state that follows this turn in a game of `player_count`
    /// players.
    #[must_use]
    pub const fn next(self, player_count: usize) -> GameState {
        if self.player_index + 1 < player_count {
            return GameState::InRound(Self {
                round: self.round,
                player_index: self.player_index + 1,
            });
        }

        match self.round.next() {
            Some(round) => GameState::InRound(Self {
                round,
                player_index: 0,
            }),
            None => GameState::Finished,
        }
    }
}
