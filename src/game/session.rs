//! A player's game session
//!
//! The session owns the word list, the random source and the current round.
//! UIs talk to it through `submit` and `reset` and render the snapshots they
//! get back.

use log::{info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::round::{Round, RoundSnapshot};
use crate::error::Result;
use crate::wordlists::WordList;

/// One player's current round plus what is needed to start the next one
///
/// # Examples
/// ```
/// use wordle_round::game::{Outcome, Session};
/// use wordle_round::wordlists::WordList;
///
/// let words = WordList::from_strs(&["apple"])?;
/// let mut session = Session::from_seed(words, 7);
///
/// let snapshot = session.submit("alert")?;
/// assert_eq!(snapshot.outcome, Outcome::InProgress);
///
/// let snapshot = session.submit("apple")?;
/// assert_eq!(snapshot.outcome, Outcome::Won);
///
/// let snapshot = session.reset();
/// assert_eq!(snapshot.outcome, Outcome::InProgress);
/// # Ok::<_, wordle_round::GameError>(())
/// ```
#[derive(Debug)]
pub struct Session<R = StdRng> {
    words: WordList,
    rng: R,
    round: Round,
    rounds_started: usize,
}

impl Session<StdRng> {
    /// Session with a deterministic secret sequence
    #[must_use]
    pub fn from_seed(words: WordList, seed: u64) -> Self {
        Self::new(words, StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the operating system
    #[must_use]
    pub fn from_os_rng(words: WordList) -> Self {
        Self::new(words, StdRng::from_os_rng())
    }
}

impl<R: Rng> Session<R> {
    /// Start a session and its first round
    #[must_use]
    pub fn new(words: WordList, mut rng: R) -> Self {
        let round = start_round(&words, &mut rng, 1);

        Self {
            words,
            rng,
            round,
            rounds_started: 1,
        }
    }

    /// Submit a guess to the current round
    ///
    /// # Errors
    /// Propagates `Round::submit` errors; the round is unchanged on error.
    pub fn submit(&mut self, guess: &str) -> Result<RoundSnapshot> {
        self.round.submit(guess)?;
        Ok(self.round.snapshot())
    }

    /// Throw the current round away and start a new one with a fresh secret
    ///
    /// Allowed at any time, whatever the current outcome.
    pub fn reset(&mut self) -> RoundSnapshot {
        self.rounds_started += 1;
        self.round = start_round(&self.words, &mut self.rng, self.rounds_started);
        self.round.snapshot()
    }
}

impl<R> Session<R> {
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    /// Number of rounds started so far, including the current one
    #[inline]
    #[must_use]
    pub const fn rounds_started(&self) -> usize {
        self.rounds_started
    }
}

fn start_round<R: Rng + ?Sized>(words: &WordList, rng: &mut R, number: usize) -> Round {
    let secret = words.pick(rng).clone();
    info!("round {number} started ({} candidate words)", words.len());
    trace!("round {number} secret: {secret}");
    Round::new(secret)
}
