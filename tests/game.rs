//! Game integration tests.

use std::collections::HashSet;

use subete_al_bus::{
    Advance, BeginError, Card, Color, DECK_SIZE, Direction, Game, GameEvent, GameOptions,
    GameState, Guess, GuessError, Lobby, Rank, Round, Span, Suit, TurnPosition,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn set_deck_from_draws(game: &Game, draws: &[Card]) {
    game.set_deck_for_testing(draws.to_vec());
}

fn start_game(names: &[&str]) -> Game {
    let mut lobby = Lobby::with_options(GameOptions::default().instant(), 7);
    for name in names {
        lobby.add_player(name).unwrap();
    }
    let game = lobby.start().unwrap();
    game.begin().unwrap();
    game
}

/// Plays every remaining turn of the current round with the round's first guess.
fn finish_round(game: &Game) {
    let round = game.current_turn().unwrap().round;
    while game.current_turn().is_some_and(|turn| turn.round == round) {
        game.guess(round.guesses()[0]).unwrap();
    }
}

#[test]
fn round_one_compares_color() {
    let game = start_game(&["A", "B"]);
    set_deck_from_draws(
        &game,
        &[card(Suit::Diamonds, Rank::Nine), card(Suit::Spades, Rank::Nine)],
    );

    let result = game.guess(Guess::Color(Color::Red)).unwrap();
    assert_eq!(result.card, card(Suit::Diamonds, Rank::Nine));
    assert!(result.correct);

    let result = game.guess(Guess::Color(Color::Red)).unwrap();
    assert_eq!(result.player, "B");
    assert!(!result.correct);
}

#[test]
fn round_two_compares_against_first_card() {
    let game = start_game(&["A", "B"]);
    set_deck_from_draws(
        &game,
        &[
            card(Suit::Hearts, Rank::Six),   // A round 1
            card(Suit::Clubs, Rank::Six),    // B round 1
            card(Suit::Spades, Rank::Jack),  // A round 2
            card(Suit::Diamonds, Rank::Six), // B round 2 (tie)
        ],
    );
    finish_round(&game);

    let result = game.guess(Guess::Direction(Direction::Higher)).unwrap();
    assert_eq!(result.round, Round::HigherLower);
    assert!(result.correct);

    let result = game.guess(Guess::Direction(Direction::Lower)).unwrap();
    assert!(!result.correct);
}

#[test]
fn round_two_tie_is_wrong_for_higher() {
    let game = start_game(&["A", "B"]);
    set_deck_from_draws(
        &game,
        &[
            card(Suit::Hearts, Rank::Six),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Six),
        ],
    );
    finish_round(&game);

    let result = game.guess(Guess::Direction(Direction::Higher)).unwrap();
    assert!(!result.correct);
}

#[test]
fn round_three_checks_strict_range() {
    let game = start_game(&["A", "B", "C"]);
    set_deck_from_draws(
        &game,
        &[
            // Round 1: every player gets a Three.
            card(Suit::Hearts, Rank::Three),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Spades, Rank::Three),
            // Round 2: every player gets a Ten.
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            // Round 3.
            card(Suit::Clubs, Rank::Six),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Clubs, Rank::King),
        ],
    );
    finish_round(&game);
    finish_round(&game);

    assert!(game.guess(Guess::Span(Span::Inside)).unwrap().correct);
    assert!(!game.guess(Guess::Span(Span::Inside)).unwrap().correct);
    assert!(game.guess(Guess::Span(Span::Outside)).unwrap().correct);
}

#[test]
fn round_three_bound_is_wrong_for_outside() {
    let game = start_game(&["A", "B"]);
    set_deck_from_draws(
        &game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Spades, Rank::Ten),
        ],
    );
    finish_round(&game);
    finish_round(&game);

    let result = game.guess(Guess::Span(Span::Outside)).unwrap();
    assert!(!result.correct);
}

#[test]
fn round_four_compares_suit() {
    let game = start_game(&["A", "B"]);
    let mut draws = vec![card(Suit::Hearts, Rank::Two); 6];
    draws.push(card(Suit::Spades, Rank::Queen));
    draws.push(card(Suit::Clubs, Rank::Queen));
    set_deck_from_draws(&game, &draws);
    for _ in 0..3 {
        finish_round(&game);
    }

    assert!(game.guess(Guess::Suit(Suit::Spades)).unwrap().correct);
    assert!(!game.guess(Guess::Suit(Suit::Spades)).unwrap().correct);
}

#[test]
fn turns_follow_player_order_then_next_round() {
    let game = start_game(&["A", "B", "C"]);
    assert_eq!(game.current_turn(), Some(TurnPosition::FIRST));
    assert_eq!(game.current_player(), Some("A"));

    let first = game.guess(Guess::Color(Color::Red)).unwrap();
    assert_eq!(first.advance, Advance::Turn { player_index: 1 });
    assert_eq!(game.current_player(), Some("B"));

    game.guess(Guess::Color(Color::Black)).unwrap();
    let last = game.guess(Guess::Color(Color::Red)).unwrap();
    assert_eq!(last.player, "C");
    assert_eq!(last.advance, Advance::Round(Round::HigherLower));

    assert_eq!(
        game.state(),
        GameState::InRound(TurnPosition {
            round: Round::HigherLower,
            player_index: 0,
        })
    );
    assert_eq!(game.current_player(), Some("A"));
}

#[test]
fn game_finishes_after_last_player_of_round_four() {
    let game = start_game(&["A", "B", "C"]);
    for _ in 0..3 {
        finish_round(&game);
    }

    game.guess(Guess::Suit(Suit::Hearts)).unwrap();
    game.guess(Guess::Suit(Suit::Hearts)).unwrap();
    let last = game.guess(Guess::Suit(Suit::Hearts)).unwrap();
    assert_eq!(last.player, "C");
    assert_eq!(last.advance, Advance::Finished);

    assert!(game.is_finished());
    assert_eq!(game.current_turn(), None);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 12);

    assert_eq!(
        game.guess(Guess::Suit(Suit::Hearts)).unwrap_err(),
        GuessError::GameFinished
    );
    assert_eq!(game.cards_remaining(), DECK_SIZE - 12);
}

#[test]
fn history_holds_every_drawn_card_in_round_order() {
    let game = start_game(&["A", "B"]);
    for _ in 0..4 {
        finish_round(&game);
    }

    let snapshot = game.snapshot();
    assert!(snapshot.finished);
    assert_eq!(snapshot.players.len(), 2);
    for player in &snapshot.players {
        assert_eq!(player.cards.len(), 4);
    }
    assert_eq!(game.history(0).unwrap(), snapshot.players[0].cards);
    assert_eq!(game.history(2), None);
}

#[test]
fn guess_before_begin_is_rejected() {
    let mut lobby = Lobby::new(3);
    lobby.add_player("A").unwrap();
    lobby.add_player("B").unwrap();
    let game = lobby.start().unwrap();

    assert_eq!(game.state(), GameState::AwaitingStart);
    assert_eq!(
        game.guess(Guess::Color(Color::Red)).unwrap_err(),
        GuessError::NotStarted
    );
    assert_eq!(game.cards_remaining(), DECK_SIZE);

    game.begin().unwrap();
    assert_eq!(game.begin().unwrap_err(), BeginError::AlreadyStarted);
}

#[test]
fn invalid_guess_leaves_game_untouched() {
    let game = start_game(&["A", "B"]);
    let before = game.snapshot();

    let err = game.guess(Guess::Suit(Suit::Clubs)).unwrap_err();
    assert_eq!(
        err,
        GuessError::InvalidGuess {
            round: Round::Color,
            guess: Guess::Suit(Suit::Clubs),
        }
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn empty_deck_is_reported_without_advancing() {
    let game = start_game(&["A", "B"]);
    set_deck_from_draws(&game, &[card(Suit::Hearts, Rank::Ace)]);

    game.guess(Guess::Color(Color::Red)).unwrap();
    let before = game.snapshot();

    assert_eq!(
        game.guess(Guess::Color(Color::Red)).unwrap_err(),
        GuessError::EmptyDeck
    );
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.current_player(), Some("B"));
}

#[test]
fn fourteen_players_exhaust_the_deck_in_round_four() {
    let names: Vec<String> = (0..14).map(|i| format!("P{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let game = start_game(&refs);
    for _ in 0..3 {
        finish_round(&game);
    }

    for _ in 0..10 {
        game.guess(Guess::Suit(Suit::Clubs)).unwrap();
    }
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(
        game.guess(Guess::Suit(Suit::Clubs)).unwrap_err(),
        GuessError::EmptyDeck
    );
    assert_eq!(game.current_player(), Some("P10"));
}

#[test]
fn no_card_is_dealt_twice_in_a_full_table() {
    let names: Vec<String> = (0..13).map(|i| format!("P{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let game = start_game(&refs);
    for _ in 0..4 {
        finish_round(&game);
    }

    let dealt: Vec<Card> = game
        .snapshot()
        .players
        .into_iter()
        .flat_map(|player| player.cards)
        .collect();
    let unique: HashSet<Card> = dealt.iter().copied().collect();

    assert!(game.is_finished());
    assert_eq!(dealt.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn events_describe_each_turn() {
    let game = start_game(&["A", "B"]);
    set_deck_from_draws(
        &game,
        &[card(Suit::Hearts, Rank::Four), card(Suit::Clubs, Rank::Five)],
    );

    game.guess(Guess::Color(Color::Red)).unwrap();
    game.guess(Guess::Color(Color::Red)).unwrap();

    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::GameStarted,
            GameEvent::CardDrawn {
                player_index: 0,
                card: card(Suit::Hearts, Rank::Four),
            },
            GameEvent::GuessResult {
                player_index: 0,
                correct: true,
            },
            GameEvent::TurnAdvanced {
                round: Round::Color,
                player_index: 1,
            },
            GameEvent::CardDrawn {
                player_index: 1,
                card: card(Suit::Clubs, Rank::Five),
            },
            GameEvent::GuessResult {
                player_index: 1,
                correct: false,
            },
            GameEvent::RoundAdvanced {
                round: Round::HigherLower,
            },
        ]
    );
    assert!(game.take_events().is_empty());
}

#[test]
fn last_event_is_game_finished() {
    let game = start_game(&["A", "B"]);
    for _ in 0..4 {
        finish_round(&game);
    }

    let events = game.take_events();
    assert_eq!(events.last(), Some(&GameEvent::GameFinished));
    let draws = events
        .iter()
        .filter(|event| matches!(event, GameEvent::CardDrawn { .. }))
        .count();
    assert_eq!(draws, 8);
}

#[test]
fn snapshot_reports_current_turn() {
    let game = start_game(&["Ana", "Beto"]);
    game.guess(Guess::Color(Color::Black)).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.round, Some(Round::Color));
    assert_eq!(snapshot.turn_index, Some(1));
    assert_eq!(snapshot.current_player.as_deref(), Some("Beto"));
    assert_eq!(snapshot.players[0].cards.len(), 1);
    assert!(snapshot.players[1].cards.is_empty());
    assert!(!snapshot.finished);
    assert_eq!(snapshot.cards_remaining, DECK_SIZE - 1);
}
