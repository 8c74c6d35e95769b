//! Round state machine
//!
//! A round owns the secret word and six attempts. Submitting a guess fills
//! the active attempt and either ends the round or activates the next one.

use std::fmt;

use log::{debug, info, warn};

use super::attempt::Attempt;
use crate::core::{Feedback, Word};
use crate::error::{GameError, Result};

/// Number of guesses a player gets per round
pub const MAX_ATTEMPTS: usize = 6;

/// Overall state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Won or lost; no further submissions are accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Renderable view of a round
///
/// The secret is only included once the round is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub secret: Option<Word>,
    pub attempts: Vec<Attempt>,
    pub outcome: Outcome,
}

impl RoundSnapshot {
    /// The attempt currently awaiting a guess, if any
    #[must_use]
    pub fn active(&self) -> Option<&Attempt> {
        self.attempts.iter().find(|a| a.is_active())
    }

    /// Submitted attempts, in submission order
    pub fn submitted(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter().filter(|a| a.is_submitted())
    }
}

/// One game: a secret word and up to six guesses at it
///
/// # Examples
/// ```
/// use wordle_round::core::Word;
/// use wordle_round::game::{Outcome, Round};
///
/// let mut round = Round::new(Word::new("apple")?);
///
/// let feedback = round.submit("alert")?;
/// assert_eq!(feedback.to_string(), "GYY--");
/// assert_eq!(round.outcome(), Outcome::InProgress);
/// assert_eq!(round.active().map(|a| a.position()), Some(2));
///
/// round.submit("apple")?;
/// assert_eq!(round.outcome(), Outcome::Won);
/// assert!(round.active().is_none());
/// # Ok::<_, wordle_round::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    attempts: [Attempt; MAX_ATTEMPTS],
    outcome: Outcome,
}

impl Round {
    /// Start a round: attempt 1 active, the rest pristine
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let mut attempts: [Attempt; MAX_ATTEMPTS] =
            std::array::from_fn(|i| Attempt::pristine(i + 1));
        attempts[0].activate();

        Self {
            secret,
            attempts,
            outcome: Outcome::InProgress,
        }
    }

    /// Submit a guess for the active attempt
    ///
    /// The guess is validated before anything changes, so a rejected call
    /// leaves the round exactly as it was.
    ///
    /// # Errors
    /// - `GameError::RoundOver` if the round is already won or lost
    /// - `GameError::InvalidGuess` if `guess` is not five letters a-z
    pub fn submit(&mut self, guess: &str) -> Result<Feedback> {
        self.ensure_in_progress()?;

        let word = Word::new(guess).inspect_err(|e| warn!("rejected guess {guess:?}: {e}"))?;
        self.submit_word(word)
    }

    /// Submit an already validated guess for the active attempt
    ///
    /// # Errors
    /// - `GameError::RoundOver` if the round is already won or lost
    /// - `GameError::NoActiveAttempt` if the round has no active attempt
    pub fn submit_word(&mut self, guess: Word) -> Result<Feedback> {
        self.ensure_in_progress()?;

        let index = self
            .attempts
            .iter()
            .position(Attempt::is_active)
            .ok_or(GameError::NoActiveAttempt)?;

        let feedback = Feedback::evaluate(&self.secret, &guess);
        let solved = guess == self.secret;

        debug!(
            "attempt {}/{MAX_ATTEMPTS}: {guess} {}",
            index + 1,
            feedback.to_emoji()
        );
        self.attempts[index].record(guess, feedback);

        if solved {
            self.outcome = Outcome::Won;
        } else if index + 1 == MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
        } else {
            self.attempts[index + 1].activate();
        }

        if self.outcome.is_terminal() {
            info!("round {} after {} attempts", self.outcome, index + 1);
        }

        Ok(feedback)
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.outcome.is_terminal() {
            warn!("submission rejected: round already {}", self.outcome);
            return Err(GameError::RoundOver(self.outcome));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> &[Attempt; MAX_ATTEMPTS] {
        &self.attempts
    }

    /// The attempt currently awaiting a guess, if any
    #[must_use]
    pub fn active(&self) -> Option<&Attempt> {
        self.attempts.iter().find(|a| a.is_active())
    }

    /// Copy the round into a view safe to hand to a UI
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            secret: (self.outcome == Outcome::Lost).then(|| self.secret.clone()),
            attempts: self.attempts.to_vec(),
            outcome: self.outcome,
        }
    }
}
