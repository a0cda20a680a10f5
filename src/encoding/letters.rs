//! Alphabet-position encoding of names into numeric sequences
//!
//! Only ASCII letters carry meaning. Everything else (whitespace, punctuation,
//! digits, accented letters) is skipped without error.

use crate::io::configuration::FALLBACK_SEQUENCE;
use std::fmt;

/// Convert a letter to its alphabet position (A/a = 1, ..., Z/z = 26)
pub const fn letter_to_number(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A' + 1)
    } else {
        None
    }
}

/// Convert a name to its ordered sequence of alphabet positions
pub fn name_to_numbers(name: &str) -> NumericSequence {
    NumericSequence(name.chars().filter_map(letter_to_number).collect())
}

/// Ordered alphabet positions of the letters in a name
///
/// Values are always in `1..=26`. The sequence may be empty; use
/// [`NumericSequence::or_fallback`] before deriving field parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NumericSequence(Vec<u8>);

impl NumericSequence {
    /// Values in input order
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// Number of encoded letters
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the name contained no letters
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all values
    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&v| u64::from(v)).sum()
    }

    /// Sum of the values read back to front
    pub fn reversed_sum(&self) -> u64 {
        self.0.iter().rev().map(|&v| u64::from(v)).sum()
    }

    /// Sum of the values at even (0-based) positions
    pub fn even_index_sum(&self) -> u64 {
        self.0.iter().step_by(2).map(|&v| u64::from(v)).sum()
    }

    /// Sum of the values at odd (0-based) positions
    pub fn odd_index_sum(&self) -> u64 {
        self.0.iter().skip(1).step_by(2).map(|&v| u64::from(v)).sum()
    }

    /// This sequence, or `[1]` when it is empty
    pub fn or_fallback(&self) -> Self {
        if self.is_empty() {
            Self(FALLBACK_SEQUENCE.to_vec())
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for NumericSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
