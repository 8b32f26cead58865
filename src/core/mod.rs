//! 한글 음절 코덱

pub mod jamo;
pub mod unicode;

pub use jamo::{compose, decompose, LetterTriple};
