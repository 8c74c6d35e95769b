//! A single guess slot

use crate::core::{Feedback, Word};

/// One of the six guess slots of a round
///
/// A slot starts pristine. It becomes active when it is its turn, and is
/// filled exactly once with a guess and its feedback, at which point it is
/// deactivated for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    position: usize,
    active: bool,
    guess: Option<Word>,
    feedback: Option<Feedback>,
}

impl Attempt {
    pub(crate) const fn pristine(position: usize) -> Self {
        Self {
            position,
            active: false,
            guess: None,
            feedback: None,
        }
    }

    /// 1-based submission order of this slot
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Option<&Word> {
        self.guess.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.guess.is_some()
    }

    /// Neither active nor submitted
    #[inline]
    #[must_use]
    pub const fn is_pristine(&self) -> bool {
        !self.active && self.guess.is_none()
    }

    pub(crate) fn activate(&mut self) {
        debug_assert!(self.is_pristine(), "only a pristine attempt can be activated");
        self.active = true;
    }

    pub(crate) fn record(&mut self, guess: Word, feedback: Feedback) {
        debug_assert!(self.active, "only the active attempt can be filled");
        self.guess = Some(guess);
        self.feedback = Some(feedback);
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pristine_attempt_is_empty() {
        let attempt = Attempt::pristine(3);
        assert_eq!(attempt.position(), 3);
        assert!(attempt.is_pristine());
        assert!(!attempt.is_active());
        assert!(attempt.guess().is_none());
        assert!(attempt.feedback().is_none());
    }

    #[test]
    fn record_fills_and_deactivates() {
        let mut attempt = Attempt::pristine(1);
        attempt.activate();
        assert!(attempt.is_active());
        assert!(!attempt.is_pristine());

        let secret = Word::new("apple").unwrap();
        let guess = Word::new("alert").unwrap();
        let feedback = Feedback::evaluate(&secret, &guess);
        attempt.record(guess.clone(), feedback);

        assert!(!attempt.is_active());
        assert!(attempt.is_submitted());
        assert_eq!(attempt.guess(), Some(&guess));
        assert_eq!(attempt.feedback(), Some(&feedback));
    }
}
