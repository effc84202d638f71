//! Orthographic context.
//!
//! Records in which positions (sentence initial, sentence internal, unknown)
//! and with which case a word type has been seen in the training corpus.

pub type OrthographicContext = u8;

pub const BEGIN_UC: OrthographicContext = 0b0000_0010;
pub const MIDDLE_UC: OrthographicContext = 0b0000_0100;
pub const UNKNOWN_UC: OrthographicContext = 0b0000_1000;
pub const BEGIN_LC: OrthographicContext = 0b0001_0000;
pub const MIDDLE_LC: OrthographicContext = 0b0010_0000;
pub const UNKNOWN_LC: OrthographicContext = 0b0100_0000;
pub const ORTHO_UC: OrthographicContext = BEGIN_UC | MIDDLE_UC | UNKNOWN_UC;
pub const ORTHO_LC: OrthographicContext = BEGIN_LC | MIDDLE_LC | UNKNOWN_LC;

/// Position of a token relative to sentence boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Initial,
    Internal,
    Unknown,
}

/// Case of the first character of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
    None,
}

/// Flag for a (position, case) pair. Uncased tokens have no flag.
pub fn flag(position: Position, case: LetterCase) -> OrthographicContext {
    match (position, case) {
        (Position::Initial, LetterCase::Upper) => BEGIN_UC,
        (Position::Internal, LetterCase::Upper) => MIDDLE_UC,
        (Position::Unknown, LetterCase::Upper) => UNKNOWN_UC,
        (Position::Initial, LetterCase::Lower) => BEGIN_LC,
        (Position::Internal, LetterCase::Lower) => MIDDLE_LC,
        (Position::Unknown, LetterCase::Lower) => UNKNOWN_LC,
        (_, LetterCase::None) => 0,
    }
}
