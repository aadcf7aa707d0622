//! Player roster assembled before a game.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::error::LobbyError;
use crate::game::Game;
use crate::options::GameOptions;

/// Minimum number of players needed to start a game.
pub const MIN_PLAYERS: usize = 2;

/// The lobby where players are registered before a game starts.
///
/// Each call to [`Lobby::start`] hands out a new [`Game`] whose deck is
/// shuffled from a seed drawn off the lobby's own generator, so consecutive
/// games never reuse a shuffle.
#[derive(Debug)]
pub struct Lobby {
    /// Registered names in turn order.
    players: Vec<String>,
    /// The same names, for uniqueness checks.
    names: HashSet<String>,
    /// Options handed to every game.
    options: GameOptions,
    /// Source of per-game seeds.
    rng: ChaCha8Rng,
}

impl Lobby {
    /// Creates an empty lobby with default options.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_options(GameOptions::default(), seed)
    }

    /// Creates an empty lobby whose games use `options`.
    #[must_use]
    pub fn with_options(options: GameOptions, seed: u64) -> Self {
        Self {
            players: Vec::new(),
            names: HashSet::new(),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the options handed to every game.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Registers a player. Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or already registered.
    pub fn add_player(&mut self, name: &str) -> Result<(), LobbyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LobbyError::EmptyName);
        }

        if !self.names.insert(name.to_string()) {
            return Err(LobbyError::DuplicatePlayer);
        }
        self.players.push(name.to_string());

        log::debug!("player {name} joined the lobby");
        Ok(())
    }

    /// Removes a registered player.
    ///
    /// # Errors
    ///
    /// Returns an error if no player has this name.
    pub fn remove_player(&mut self, name: &str) -> Result<(), LobbyError> {
        let name = name.trim();
        if !self.names.remove(name) {
            return Err(LobbyError::PlayerNotFound);
        }
        self.players.retain(|player| player != name);

        log::debug!("player {name} left the lobby");
        Ok(())
    }

    /// Returns the registered names in turn order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns whether a player with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name.trim())
    }

    /// Starts a game with the registered players in registration order.
    ///
    /// The roster is kept; [`Lobby::reset`] clears it.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than [`MIN_PLAYERS`] are registered.
    pub fn start(&mut self) -> Result<Game, LobbyError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(LobbyError::InsufficientPlayers);
        }

        let seed = self.rng.next_u64();
        log::info!("starting game with {} players", self.players.len());

        Ok(Game::new(self.players.clone(), self.options.clone(), seed))
    }

    /// Returns to the menu, discarding `game` and clearing the roster.
    pub fn reset(&mut self, game: Game) {
        log::info!(
            "returning to lobby with {} cards left undrawn",
            game.cards_remaining()
        );
        drop(game);

        self.players.clear();
        self.names.clear();
    }
}
