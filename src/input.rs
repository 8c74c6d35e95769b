//! Keystroke buffer for the guess being typed
//!
//! Front-ends feed key presses into a [`GuessInput`] and only hand a guess to
//! the round once it holds exactly five letters.

use crate::core::WORD_LENGTH;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessInput {
    buffer: String,
}

impl GuessInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Type a letter
    ///
    /// Uppercase letters are lowercased. Anything other than a-z, or a sixth
    /// letter, is ignored and `false` is returned.
    pub fn push(&mut self, ch: char) -> bool {
        let ch = ch.to_ascii_lowercase();
        if !ch.is_ascii_lowercase() || self.is_complete() {
            return false;
        }
        self.buffer.push(ch);
        true
    }

    /// Backspace
    pub fn pop(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Hand over the typed guess and empty the buffer, but only if it is
    /// complete
    pub fn take_complete(&mut self) -> Option<String> {
        self.is_complete()
            .then(|| std::mem::take(&mut self.buffer))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.buffer.len() == WORD_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> GuessInput {
        let mut input = GuessInput::new();
        for ch in keys.chars() {
            input.push(ch);
        }
        input
    }

    #[test]
    fn accepts_letters_only() {
        let mut input = GuessInput::new();
        assert!(input.push('a'));
        assert!(!input.push('1'));
        assert!(!input.push(' '));
        assert!(!input.push('é'));
        assert!(input.push('B'));
        assert_eq!(input.as_str(), "ab");
    }

    #[test]
    fn caps_at_five_letters() {
        let mut input = typed("apple");
        assert!(input.is_complete());
        assert!(!input.push('s'));
        assert_eq!(input.as_str(), "apple");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut input = typed("appl");
        assert_eq!(input.pop(), Some('l'));
        assert_eq!(input.as_str(), "app");

        let mut empty = GuessInput::new();
        assert_eq!(empty.pop(), None);
    }

    #[test]
    fn take_complete_requires_five_letters() {
        let mut input = typed("appl");
        assert_eq!(input.take_complete(), None);
        assert_eq!(input.len(), 4);

        input.push('e');
        assert_eq!(input.take_complete(), Some("apple".to_string()));
        assert!(input.is_empty());
    }
}
