//! A "Súbete al Bus" party card game engine with optional `no_std` support.
//!
//! The crate provides a [`Lobby`] that collects player names and a [`Game`]
//! that runs the four guessing rounds over a single shuffled 52-card deck:
//! red or black, higher or lower, inside or outside, and finally the suit.
//!
//! # Example
//!
//! ```
//! use subete_al_bus::{Color, Guess, Lobby};
//!
//! let mut lobby = Lobby::new(42);
//! lobby.add_player("Ana").unwrap();
//! lobby.add_player("Beto").unwrap();
//!
//! let game = lobby.start().unwrap();
//! game.begin().unwrap();
//!
//! let result = game.guess(Guess::Color(Color::Red)).unwrap();
//! assert_eq!(result.player, "Ana");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod lobby;
pub mod options;
pub mod result;
pub mod round;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{BeginError, DrawError, GuessError, LobbyError};
pub use event::GameEvent;
pub use game::{Game, GameSnapshot, GameState, PlayerView, TurnPosition};
pub use lobby::{Lobby, MIN_PLAYERS};
pub use options::GameOptions;
pub use result::{Advance, RoundResult};
pub use round::{Direction, Guess, Round, Span};
