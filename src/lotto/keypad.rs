//! Numeric keypad input buffer
//!
//! Collects up to six digits from discrete key presses. Pressing past six
//! digits and backspacing an empty buffer are silently ignored.

use crate::TICKET_LENGTH;
use std::fmt;

/// Digit buffer behind the ticket checker keypad
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeypadBuffer {
    digits: String,
}

impl KeypadBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit. Returns whether the press changed the buffer.
    pub fn press(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.digits.len() >= TICKET_LENGTH {
            return false;
        }
        self.digits.push(digit);
        true
    }

    /// Remove the last digit. Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    /// Submission is enabled only at exactly six digits
    pub fn is_complete(&self) -> bool {
        self.digits.len() == TICKET_LENGTH
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Digit shown in slot `index`, if entered yet
    pub fn slot(&self, index: usize) -> Option<char> {
        self.digits.chars().nth(index)
    }

    /// The submitted ticket, if the buffer is complete
    pub fn submission(&self) -> Option<String> {
        self.is_complete().then(|| self.digits.clone())
    }
}

impl fmt::Display for KeypadBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(digits: &str) -> KeypadBuffer {
        let mut buffer = KeypadBuffer::new();
        for d in digits.chars() {
            buffer.press(d);
        }
        buffer
    }

    #[test]
    fn test_partial_entry_is_not_submittable() {
        let buffer = filled("582");
        assert_eq!(buffer.as_str(), "582");
        assert!(!buffer.is_complete());
        assert_eq!(buffer.submission(), None);
    }

    #[test]
    fn test_six_digits_enable_submission() {
        let buffer = filled("582936");
        assert!(buffer.is_complete());
        assert_eq!(buffer.submission().as_deref(), Some("582936"));
    }

    #[test]
    fn test_seventh_digit_is_ignored() {
        let mut buffer = filled("582936");
        assert!(!buffer.press('1'));
        assert_eq!(buffer.as_str(), "582936");
    }

    #[test]
    fn test_backspace() {
        let mut buffer = filled("58");
        assert!(buffer.backspace());
        assert_eq!(buffer.as_str(), "5");
        assert!(buffer.backspace());
        assert!(!buffer.backspace());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_non_digits_are_ignored() {
        let mut buffer = KeypadBuffer::new();
        assert!(!buffer.press('a'));
        assert!(!buffer.press(' '));
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_slots() {
        let buffer = filled("58");
        assert_eq!(buffer.slot(0), Some('5'));
        assert_eq!(buffer.slot(1), Some('8'));
        assert_eq!(buffer.slot(2), None);
    }
}
