use serde::Serialize;
use subete_al_bus::{
    Advance, Card, Color, Direction, Game, GameEvent, GameOptions, GameState, Guess, Lobby,
    Round, RoundResult, Span, Suit,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    lobby: Lobby,
    game: Option<Game>,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            lobby: Lobby::with_options(GameOptions::default(), u64::from(seed)),
            game: None,
        }
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), JsValue> {
        self.lobby.add_player(name).map_err(js_err)
    }

    pub fn remove_player(&mut self, name: &str) -> Result<(), JsValue> {
        self.lobby.remove_player(name).map_err(js_err)
    }

    pub fn players(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.lobby.players())
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.game.is_some() {
            return Err(JsValue::from_str("a game is already running"));
        }

        self.game = Some(self.lobby.start().map_err(js_err)?);
        Ok(())
    }

    pub fn begin(&self) -> Result<(), JsValue> {
        self.require_game()?.begin().map_err(js_err)
    }

    /// Guesses for the current player. `choice` is one of `red`, `black`,
    /// `higher`, `lower`, `inside`, `outside`, `hearts`, `diamonds`, `spades`,
    /// `clubs`.
    pub fn guess(&self, choice: &str) -> Result<JsValue, JsValue> {
        let guess = parse_guess(choice)
            .ok_or_else(|| JsValue::from_str(&format!("unknown guess: {choice}")))?;
        let result = self.require_game()?.guess(guess).map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn take_events(&self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .require_game()?
            .take_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn reset(&mut self) {
        if let Some(game) = self.game.take() {
            self.lobby.reset(game);
        }
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let options = self.lobby.options();
        let pacing = JsPacing {
            countdown: options.countdown,
            reveal_delays: options.reveal_delays,
            result_display: options.result_display,
        };

        let Some(game) = &self.game else {
            let snapshot = Snapshot {
                state: "Lobby",
                round: None,
                turn_index: None,
                current_player: None,
                guesses: Vec::new(),
                players: self
                    .lobby
                    .players()
                    .iter()
                    .map(|name| JsPlayer {
                        name: name.clone(),
                        cards: Vec::new(),
                    })
                    .collect(),
                finished: false,
                cards_remaining: 0,
                pacing,
            };
            return to_js_value(&snapshot);
        };

        let view = game.snapshot();
        let snapshot = Snapshot {
            state: state_to_str(view.state),
            round: view.round.map(Round::number),
            turn_index: view.turn_index.map(|index| index as u32),
            current_player: view.current_player,
            guesses: view
                .round
                .map(|round| round.guesses().iter().copied().map(guess_to_str).collect())
                .unwrap_or_default(),
            players: view
                .players
                .into_iter()
                .map(|player| JsPlayer {
                    name: player.name,
                    cards: player.cards.into_iter().map(card_to_js).collect(),
                })
                .collect(),
            finished: view.finished,
            cards_remaining: view.cards_remaining as u32,
            pacing,
        };

        to_js_value(&snapshot)
    }
}

impl WasmTable {
    fn require_game(&self) -> Result<&Game, JsValue> {
        self.game
            .as_ref()
            .ok_or_else(|| JsValue::from_str("no game is running"))
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    round: Option<u8>,
    turn_index: Option<u32>,
    current_player: Option<String>,
    guesses: Vec<&'static str>,
    players: Vec<JsPlayer>,
    finished: bool,
    cards_remaining: u32,
    pacing: JsPacing,
}

#[derive(Serialize)]
struct JsPacing {
    countdown: u8,
    reveal_delays: [u32; 4],
    result_display: u32,
}

#[derive(Serialize)]
struct JsPlayer {
    name: String,
    cards: Vec<JsCard>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    color: &'static str,
    rank: u8,
    label: String,
}

#[derive(Serialize)]
struct JsRoundResult {
    round: u8,
    player_index: u32,
    player: String,
    guess: &'static str,
    card: JsCard,
    correct: bool,
    next: &'static str,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            round: result.round.number(),
            player_index: result.player_index as u32,
            player: result.player,
            guess: guess_to_str(result.guess),
            card: card_to_js(result.card),
            correct: result.correct,
            next: match result.advance {
                Advance::Turn { .. } => "turn",
                Advance::Round(_) => "round",
                Advance::Finished => "finished",
            },
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    GameStarted,
    CardDrawn { player_index: u32, card: JsCard },
    GuessResult { player_index: u32, correct: bool },
    TurnAdvanced { round: u8, player_index: u32 },
    RoundAdvanced { round: u8 },
    GameFinished,
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::GameStarted => Self::GameStarted,
            GameEvent::CardDrawn { player_index, card } => Self::CardDrawn {
                player_index: player_index as u32,
                card: card_to_js(card),
            },
            GameEvent::GuessResult {
                player_index,
                correct,
            } => Self::GuessResult {
                player_index: player_index as u32,
                correct,
            },
            GameEvent::TurnAdvanced {
                round,
                player_index,
            } => Self::TurnAdvanced {
                round: round.number(),
                player_index: player_index as u32,
            },
            GameEvent::RoundAdvanced { round } => Self::RoundAdvanced {
                round: round.number(),
            },
            GameEvent::GameFinished => Self::GameFinished,
        }
    }
}

fn parse_guess(choice: &str) -> Option<Guess> {
    let guess = match choice {
        "red" => Guess::Color(Color::Red),
        "black" => Guess::Color(Color::Black),
        "higher" => Guess::Direction(Direction::Higher),
        "lower" => Guess::Direction(Direction::Lower),
        "inside" => Guess::Span(Span::Inside),
        "outside" => Guess::Span(Span::Outside),
        "hearts" => Guess::Suit(Suit::Hearts),
        "diamonds" => Guess::Suit(Suit::Diamonds),
        "spades" => Guess::Suit(Suit::Spades),
        "clubs" => Guess::Suit(Suit::Clubs),
        _ => return None,
    };
    Some(guess)
}

fn guess_to_str(guess: Guess) -> &'static str {
    match guess {
        Guess::Color(Color::Red) => "red",
        Guess::Color(Color::Black) => "black",
        Guess::Direction(Direction::Higher) => "higher",
        Guess::Direction(Direction::Lower) => "lower",
        Guess::Span(Span::Inside) => "inside",
        Guess::Span(Span::Outside) => "outside",
        Guess::Suit(suit) => suit_to_str(suit),
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        color: match card.color() {
            Color::Red => "red",
            Color::Black => "black",
        },
        rank: card.rank.index(),
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "hearts",
        Suit::Diamonds => "diamonds",
        Suit::Spades => "spades",
        Suit::Clubs => "clubs",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::AwaitingStart => "AwaitingStart",
        GameState::InRound(_) => "InRound",
        GameState::Finished => "Finished",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
