//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::BeginError;
use crate::event::GameEvent;
use crate::options::GameOptions;

mod snapshot;
pub mod state;
mod turn;

pub use snapshot::{GameSnapshot, PlayerView};
pub use state::{GameState, TurnPosition};

/// A "Súbete al Bus" game engine for one sitting of a fixed player list.
///
/// The game owns the deck, every player's drawn cards, and the turn state.
/// It is created by [`Lobby::start`](crate::Lobby::start) and discarded by
/// [`Lobby::reset`](crate::Lobby::reset); a new game always starts from a
/// freshly shuffled deck.
#[derive(Debug)]
pub struct Game {
    /// Cards left in the deck.
    deck: Mutex<Deck>,
    /// Pacing options for the presentation layer.
    pub options: GameOptions,
    /// Current game state.
    state: Mutex<GameState>,
    /// Player names in turn order.
    players: Vec<String>,
    /// Cards drawn by each player, indexed like `players`.
    histories: Mutex<Vec<Vec<Card>>>,
    /// Events not yet taken by the presentation layer.
    events: Mutex<Vec<GameEvent>>,
}

impl Game {
    /// Creates a game for `players` with a deck shuffled from `seed`.
    ///
    /// The roster is assumed to be validated by the lobby.
    pub(crate) fn new(players: Vec<String>, options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let histories = players.iter().map(|_| Vec::with_capacity(4)).collect();

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(GameState::AwaitingStart),
            players,
            histories: Mutex::new(histories),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Leaves the countdown and starts round 1 with the first player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already begun.
    pub fn begin(&self) -> Result<(), BeginError> {
        let mut state = self.state.lock();
        if *state != GameState::AwaitingStart {
            return Err(BeginError::AlreadyStarted);
        }

        *state = GameState::InRound(TurnPosition::FIRST);
        drop(state);

        self.events.lock().push(GameEvent::GameStarted);
        log::info!("game begun with {} players", self.players.len());

        Ok(())
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the player names in turn order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the current turn position.
    ///
    /// Returns `None` before the game begins and after it finishes.
    pub fn current_turn(&self) -> Option<TurnPosition> {
        self.state.lock().turn()
    }

    /// Returns the name of the player whose turn it is.
    pub fn current_player(&self) -> Option<&str> {
        let turn = self.current_turn()?;
        self.players.get(turn.player_index).map(String::as_str)
    }

    /// Returns whether every player completed every round.
    pub fn is_finished(&self) -> bool {
        *self.state.lock() == GameState::Finished
    }

    /// Returns the cards drawn so far by the specified player.
    ///
    /// Returns `None` if the index is out of range.
    pub fn history(&self, player_index: usize) -> Option<Vec<Card>> {
        self.histories.lock().get(player_index).cloned()
    }

    /// Replaces the deck with one that deals `draws` front to back.
    ///
    /// Not part of the public API. The cards are not checked for
    /// uniqueness, so this only exists to rig draws in tests.
    #[doc(hidden)]
    pub fn set_deck_for_testing(&self, draws: Vec<Card>) {
        *self.deck.lock() = Deck::from_draw_order(draws);
    }

    /// Takes every event queued since the last call, oldest first.
    pub fn take_events(&self) -> Vec<GameEvent> {
        core::mem::take(&mut *self.events.lock())
    }
}
