use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::round::Round;

use super::{Game, GameState};

/// A player and the cards drawn for them so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// The player's name.
    pub name: String,
    /// Drawn cards in round order.
    pub cards: Vec<Card>,
}

/// A read-only copy of the game for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// The game state.
    pub state: GameState,
    /// The round being played, if any.
    pub round: Option<Round>,
    /// Index of the player whose turn it is, if any.
    pub turn_index: Option<usize>,
    /// Name of the player whose turn it is, if any.
    pub current_player: Option<String>,
    /// Every player in turn order.
    pub players: Vec<PlayerView>,
    /// Whether every player completed every round.
    pub finished: bool,
    /// Number of cards remaining in the deck.
    pub cards_remaining: usize,
}

impl Game {
    /// Returns a snapshot of the current game.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn snapshot(&self) -> GameSnapshot {
        let state = self.state.lock();
        let histories = self.histories.lock();
        let turn = state.turn();

        let players = self
            .players
            .iter()
            .zip(histories.iter())
            .map(|(name, cards)| PlayerView {
                name: name.clone(),
                cards: cards.clone(),
            })
            .collect();

        GameSnapshot {
            state: *state,
            round: turn.map(|t| t.round),
            turn_index: turn.map(|t| t.player_index),
            current_player: turn.and_then(|t| self.players.get(t.player_index).cloned()),
            players,
            finished: *state == GameState::Finished,
            cards_remaining: self.cards_remaining(),
        }
    }
}
