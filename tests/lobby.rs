//! Lobby integration tests.

use subete_al_bus::{Color, DECK_SIZE, GameOptions, GameState, Guess, Lobby, LobbyError};

#[test]
fn add_player_trims_and_rejects_blank_names() {
    let mut lobby = Lobby::new(1);

    lobby.add_player("  Ana ").unwrap();
    assert_eq!(lobby.players(), ["Ana"]);
    assert!(lobby.contains("Ana"));

    assert_eq!(lobby.add_player("   ").unwrap_err(), LobbyError::EmptyName);
    assert_eq!(lobby.add_player("").unwrap_err(), LobbyError::EmptyName);
    assert_eq!(lobby.player_count(), 1);
}

#[test]
fn duplicate_player_is_rejected_without_change() {
    let mut lobby = Lobby::new(1);
    lobby.add_player("Ana").unwrap();
    lobby.add_player("Beto").unwrap();

    assert_eq!(
        lobby.add_player("Ana ").unwrap_err(),
        LobbyError::DuplicatePlayer
    );
    assert_eq!(lobby.players(), ["Ana", "Beto"]);
}

#[test]
fn remove_player_keeps_order_of_the_rest() {
    let mut lobby = Lobby::new(1);
    for name in ["Ana", "Beto", "Caro"] {
        lobby.add_player(name).unwrap();
    }

    lobby.remove_player("Beto").unwrap();
    assert_eq!(lobby.players(), ["Ana", "Caro"]);
    assert_eq!(
        lobby.remove_player("Beto").unwrap_err(),
        LobbyError::PlayerNotFound
    );

    // The name is free again.
    lobby.add_player("Beto").unwrap();
    assert_eq!(lobby.players(), ["Ana", "Caro", "Beto"]);
}

#[test]
fn start_requires_two_players() {
    let mut lobby = Lobby::new(1);
    assert_eq!(
        lobby.start().unwrap_err(),
        LobbyError::InsufficientPlayers
    );

    lobby.add_player("Ana").unwrap();
    assert_eq!(
        lobby.start().unwrap_err(),
        LobbyError::InsufficientPlayers
    );

    lobby.add_player("Beto").unwrap();
    let game = lobby.start().unwrap();
    assert_eq!(game.players(), ["Ana", "Beto"]);
    assert_eq!(game.state(), GameState::AwaitingStart);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn start_hands_options_to_the_game() {
    let options = GameOptions::default().with_countdown(10);
    let mut lobby = Lobby::with_options(options.clone(), 1);
    lobby.add_player("Ana").unwrap();
    lobby.add_player("Beto").unwrap();

    let game = lobby.start().unwrap();
    assert_eq!(game.options, options);
    assert_eq!(lobby.options(), &options);
}

#[test]
fn reset_discards_game_and_roster() {
    let mut lobby = Lobby::new(9);
    lobby.add_player("Ana").unwrap();
    lobby.add_player("Beto").unwrap();

    let game = lobby.start().unwrap();
    game.begin().unwrap();
    game.guess(Guess::Color(Color::Red)).unwrap();
    lobby.reset(game);

    assert_eq!(lobby.player_count(), 0);
    assert!(!lobby.contains("Ana"));
    assert_eq!(
        lobby.start().unwrap_err(),
        LobbyError::InsufficientPlayers
    );
}

#[test]
fn next_game_starts_fresh_with_a_new_shuffle() {
    let mut lobby = Lobby::with_options(GameOptions::default().instant(), 9);
    let play_through = |lobby: &mut Lobby| {
        lobby.add_player("Ana").unwrap();
        lobby.add_player("Beto").unwrap();
        let game = lobby.start().unwrap();
        assert_eq!(game.cards_remaining(), DECK_SIZE);
        assert!(game.snapshot().players.iter().all(|player| player.cards.is_empty()));

        game.begin().unwrap();
        while let Some(turn) = game.current_turn() {
            game.guess(turn.round.guesses()[0]).unwrap();
        }
        let dealt: Vec<_> = game
            .snapshot()
            .players
            .into_iter()
            .flat_map(|player| player.cards)
            .collect();
        lobby.reset(game);
        dealt
    };

    let first = play_through(&mut lobby);
    let second = play_through(&mut lobby);
    assert_eq!(first.len(), 8);
    assert_ne!(first, second);
}
