//! CLI "Súbete al Bus" example.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Log, Metadata, Record};
use subete_al_bus::{
    Card, Color, Direction, Game, GameOptions, Guess, Lobby, LobbyError, Round, Span, Suit,
};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    if std::env::var_os("BUS_LOG").is_some() && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    println!("Súbete al Bus CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut lobby = Lobby::with_options(GameOptions::default(), seed);

    loop {
        if !fill_lobby(&mut lobby) {
            println!("Goodbye.");
            return;
        }

        let game = match lobby.start() {
            Ok(game) => game,
            Err(err) => {
                println!("Cannot start: {err}");
                continue;
            }
        };

        countdown(&game.options);
        if let Err(err) = game.begin() {
            println!("Start error: {err}");
        }

        if !play(&game) {
            return;
        }

        if game.is_finished() {
            println!("\nGame over! Every player completed the four rounds.");
        }
        print_table(&game);
        prompt_line("Press enter to return to the menu...");
        lobby.reset(game);
    }
}

/// Reads player names until the user starts the game. Returns `false` on quit.
fn fill_lobby(lobby: &mut Lobby) -> bool {
    println!("\nAdd players one per line. '-name' removes a player, empty line starts.");

    loop {
        let input = prompt_raw(&format!("Players {:?}> ", lobby.players()));
        match input.as_str() {
            "q" | "quit" => return false,
            "" if lobby.player_count() >= subete_al_bus::MIN_PLAYERS => return true,
            "" => println!("Add at least 2 players to start."),
            _ => {
                let result = match input.strip_prefix('-') {
                    Some(name) => lobby.remove_player(name),
                    None => lobby.add_player(&input),
                };
                match result {
                    Ok(()) => {}
                    Err(LobbyError::DuplicatePlayer) => println!("That player is already in."),
                    Err(err) => println!("Lobby error: {err}"),
                }
            }
        }
    }
}

fn countdown(options: &GameOptions) {
    println!("\nReady?");
    for remaining in (1..=options.countdown).rev() {
        println!("{remaining}");
        pause(1000);
    }
    println!("START!");
}

/// Plays until the game finishes. Returns `false` on quit.
fn play(game: &Game) -> bool {
    while let Some(turn) = game.current_turn() {
        let name = game.current_player().unwrap_or_default();
        println!("\nRound {} | {}'s turn", turn.round, name);
        print_hand(game, turn.player_index);

        let input = prompt_line(&format!("{}: ", guess_prompt(turn.round)));
        if input == "q" || input == "quit" {
            return false;
        }
        let Some(guess) = parse_guess(turn.round, &input) else {
            println!("Unknown choice.");
            continue;
        };

        match game.guess(guess) {
            Ok(result) => {
                pause(game.options.reveal_delay(turn.round));
                println!("{} drew {}", result.player, format_card(&result.card));
                if result.correct {
                    println!("{}", colorize("WHO DRINKS?", "32"));
                } else {
                    println!("{}", colorize("YOU DRINK!", "31"));
                }
                pause(game.options.result_display);
            }
            Err(err) => {
                println!("Guess error: {err}");
                if game.cards_remaining() == 0 {
                    println!("The deck is exhausted; returning to the menu.");
                    return true;
                }
            }
        }
    }

    true
}

fn guess_prompt(round: Round) -> &'static str {
    match round {
        Round::Color => "[r]ed or [b]lack",
        Round::HigherLower => "[h]igher or [l]ower",
        Round::InsideOutside => "[i]nside or [o]utside",
        Round::Suit => "[h]earts, [d]iamonds, [s]pades or [c]lubs",
    }
}

fn parse_guess(round: Round, input: &str) -> Option<Guess> {
    let guess = match (round, input) {
        (Round::Color, "r" | "red") => Guess::Color(Color::Red),
        (Round::Color, "b" | "black") => Guess::Color(Color::Black),
        (Round::HigherLower, "h" | "higher") => Guess::Direction(Direction::Higher),
        (Round::HigherLower, "l" | "lower") => Guess::Direction(Direction::Lower),
        (Round::InsideOutside, "i" | "inside") => Guess::Span(Span::Inside),
        (Round::InsideOutside, "o" | "outside") => Guess::Span(Span::Outside),
        (Round::Suit, "h" | "hearts") => Guess::Suit(Suit::Hearts),
        (Round::Suit, "d" | "diamonds") => Guess::Suit(Suit::Diamonds),
        (Round::Suit, "s" | "spades") => Guess::Suit(Suit::Spades),
        (Round::Suit, "c" | "clubs") => Guess::Suit(Suit::Clubs),
        _ => return None,
    };
    Some(guess)
}

fn pause(millis: u32) {
    thread::sleep(Duration::from_millis(u64::from(millis)));
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_string(),
    }
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn print_hand(game: &Game, player_index: usize) {
    let cards = game.history(player_index).unwrap_or_default();
    if cards.is_empty() {
        return;
    }
    // Round 4 shows at most the first three cards.
    let shown: Vec<String> = cards.iter().take(3).map(format_card).collect();
    println!("Your cards: {}", shown.join(" "));
}

fn print_table(game: &Game) {
    for player in game.snapshot().players {
        let cards: Vec<String> = player.cards.iter().map(format_card).collect();
        println!("{:>12}: {}", player.name, cards.join(" "));
    }
    println!("Deck: {} cards remaining", game.cards_remaining());
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("♥", "31"),
        Suit::Diamonds => ("♦", "31"),
        Suit::Spades => ("♠", "34"),
        Suit::Clubs => ("♣", "32"),
    };

    let rank = match card.rank.index() {
        0 => "A".to_string(),
        10 => "J".to_string(),
        11 => "Q".to_string(),
        12 => "K".to_string(),
        index => (index + 1).to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
