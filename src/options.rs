//! Presentation pacing options.
//!
//! The engine never waits on a clock; these values are carried so that a
//! front end can pace the countdown, the card reveal and the result banner
//! consistently.

use crate::round::Round;

/// Pacing options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use subete_al_bus::{GameOptions, Round};
///
/// let options = GameOptions::default()
///     .with_countdown(5)
///     .with_reveal_delay(Round::Suit, 800)
///     .with_result_display(1500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Seconds counted down before the first round begins.
    pub countdown: u8,
    /// Milliseconds between a guess and revealing the drawn card, per round.
    pub reveal_delays: [u32; 4],
    /// Milliseconds the correct/incorrect banner stays visible.
    pub result_display: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            countdown: 3,
            reveal_delays: [1000, 2000, 2000, 1500],
            result_display: 2000,
        }
    }
}

impl GameOptions {
    /// Sets the countdown length in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use subete_al_bus::GameOptions;
    ///
    /// let options = GameOptions::default().with_countdown(0);
    /// assert_eq!(options.countdown, 0);
    /// ```
    #[must_use]
    pub const fn with_countdown(mut self, seconds: u8) -> Self {
        self.countdown = seconds;
        self
    }

    /// Sets the reveal delay for one round.
    ///
    /// # Example
    ///
    /// ```
    /// use subete_al_bus::{GameOptions, Round};
    ///
    /// let options = GameOptions::default().with_reveal_delay(Round::HigherLower, 250);
    /// assert_eq!(options.reveal_delay(Round::HigherLower), 250);
    /// ```
    #[must_use]
    pub const fn with_reveal_delay(mut self, round: Round, millis: u32) -> Self {
        self.reveal_delays[round.number() as usize - 1] = millis;
        self
    }

    /// Sets how long the result banner is shown.
    ///
    /// # Example
    ///
    /// ```
    /// use subete_al_bus::GameOptions;
    ///
    /// let options = GameOptions::default().with_result_display(500);
    /// assert_eq!(options.result_display, 500);
    /// ```
    #[must_use]
    pub const fn with_result_display(mut self, millis: u32) -> Self {
        self.result_display = millis;
        self
    }

    /// Sets every delay to zero, for tests and headless play.
    ///
    /// # Example
    ///
    /// ```
    /// use subete_al_bus::{GameOptions, Round};
    ///
    /// let options = GameOptions::default().instant();
    /// assert_eq!(options.countdown, 0);
    /// assert_eq!(options.reveal_delay(Round::Color), 0);
    /// ```
    #[must_use]
    pub const fn instant(mut self) -> Self {
        self.countdown = 0;
        self.reveal_delays = [0; 4];
        self.result_display = 0;
        self
    }

    /// Returns the reveal delay for a round, in milliseconds.
    #[must_use]
    pub const fn reveal_delay(&self, round: Round) -> u32 {
        self.reveal_delays[round.number() as usize - 1]
    }
}
