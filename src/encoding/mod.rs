//! Text to number encoding

/// Alphabet-position encoding of names
pub mod letters;

pub use letters::NumericSequence;
