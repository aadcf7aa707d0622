use crate::error::GuessError;
use crate::event::GameEvent;
use crate::result::{Advance, RoundResult};
use crate::round::Guess;
use crate::rules;

use super::{Game, GameState};

impl Game {
    /// The current player guesses.
    ///
    /// Draws one card, records it in the player's history, evaluates the
    /// guess against the round's rule, and moves play to the next player,
    /// the next round, or the end of the game.
    ///
    /// The whole turn happens under the state lock, so a second guess can
    /// never draw for the same turn.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The countdown has not finished
    /// - The game is finished
    /// - The guess is outside the current round's guess domain
    /// - The player lacks the prior cards the round compares against
    /// - The deck is empty (the game must then be reset)
    ///
    /// Nothing is drawn or advanced when an error is returned.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn guess(&self, guess: Guess) -> Result<RoundResult, GuessError> {
        let mut state = self.state.lock();
        let turn = match *state {
            GameState::InRound(turn) => turn,
            GameState::AwaitingStart => return Err(GuessError::NotStarted),
            GameState::Finished => return Err(GuessError::GameFinished),
        };

        if guess.round() != turn.round {
            log::warn!("rejected guess {guess} in round {}", turn.round);
            return Err(GuessError::InvalidGuess {
                round: turn.round,
                guess,
            });
        }

        let mut histories = self.histories.lock();
        let history = histories
            .get_mut(turn.player_index)
            .ok_or(GuessError::MissingHistory)?;

        let mut deck = self.deck.lock();
        let Some(&card) = deck.peek() else {
            log::warn!("deck exhausted in round {}", turn.round);
            return Err(GuessError::EmptyDeck);
        };
        let correct = rules::evaluate(guess, card, history)?;

        deck.draw()?;
        history.push(card);

        let next = turn.next(self.players.len());
        *state = next;

        let advance = match next {
            GameState::InRound(next_turn) if next_turn.round == turn.round => Advance::Turn {
                player_index: next_turn.player_index,
            },
            GameState::InRound(next_turn) => Advance::Round(next_turn.round),
            GameState::Finished | GameState::AwaitingStart => Advance::Finished,
        };

        let mut events = self.events.lock();
        events.push(GameEvent::CardDrawn {
            player_index: turn.player_index,
            card,
        });
        events.push(GameEvent::GuessResult {
            player_index: turn.player_index,
            correct,
        });
        events.push(match advance {
            Advance::Turn { player_index } => GameEvent::TurnAdvanced {
                round: turn.round,
                player_index,
            },
            Advance::Round(round) => GameEvent::RoundAdvanced { round },
            Advance::Finished => GameEvent::GameFinished,
        });

        let player = self.players[turn.player_index].clone();
        log::debug!(
            "{player} guessed {guess} in round {} and drew {card}: {}",
            turn.round,
            if correct { "correct" } else { "wrong" }
        );
        match advance {
            Advance::Round(round) => log::info!("round {round} begins"),
            Advance::Finished => log::info!("game finished"),
            Advance::Turn { .. } => {}
        }

        Ok(RoundResult {
            round: turn.round,
            player_index: turn.player_index,
            player,
            guess,
            card,
            correct,
            advance,
        })
    }
}
