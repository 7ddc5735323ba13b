//! # Error Types
//!
//! Structured errors for SEDOL decoding, built with `thiserror`.
//!
//! - [`SedolError`] covers precondition violations raised by the facets of a
//!   raw [`Sedol`](crate::Sedol): input too short to index, or a character
//!   with no defined code.
//! - [`ValidationError`] is returned when a string fails a rule set while
//!   building a [`ValidatedSedol`](crate::ValidatedSedol).

use thiserror::Error;

use crate::rules::Rejection;

/// Precondition violation while decoding a SEDOL.
///
/// These are returned to the caller immediately. Nothing is retried or
/// recovered inside the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SedolError {
    /// A facet needed the character at `index`, but the input is shorter.
    ///
    /// Absent input reports `length: 0`.
    #[error("character {index} is out of range for input of length {length} (call is_valid_length first)")]
    OutOfRange {
        /// Zero-based position that was required.
        index: usize,
        /// Number of characters actually present.
        length: usize,
    },

    /// The character has no SEDOL code. Only `[0-9A-Za-z]` is mapped.
    #[error("{} has no SEDOL code (expected 0-9, A-Z or a-z){}", describe_char(.ch), describe_position(.position))]
    UndefinedCharacter {
        /// The offending character.
        ch: char,
        /// Position in the input, when known.
        position: Option<usize>,
    },

    /// A check digit was requested for a body longer than six characters.
    #[error("SEDOL body has {length} characters (expected 6)")]
    InvalidBodyLength {
        /// Number of characters in the body.
        length: usize,
    },
}

fn describe_char(ch: &char) -> String {
    format!("character {ch:?} (U+{:04X})", *ch as u32)
}

fn describe_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" at position {p}"),
        None => String::new(),
    }
}

/// A string was rejected while constructing a validated SEDOL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value failed the rule set it was checked against.
    #[error("invalid SEDOL: \"{value}\" ({reason})")]
    InvalidSedol {
        /// The rejected input.
        value: String,
        /// The first rule it broke.
        reason: Rejection,
    },

    /// The input was absent.
    #[error("invalid SEDOL: value is absent")]
    Absent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = SedolError::OutOfRange {
            index: 6,
            length: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("character 6"));
        assert!(msg.contains("length 2"));
        assert!(msg.contains("is_valid_length"));
    }

    #[test]
    fn undefined_character_display_with_position() {
        let err = SedolError::UndefinedCharacter {
            ch: 'é',
            position: Some(0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("'é'"));
        assert!(msg.contains("U+00E9"));
        assert!(msg.contains("at position 0"));
    }

    #[test]
    fn undefined_character_display_without_position() {
        let err = SedolError::UndefinedCharacter {
            ch: '-',
            position: None,
        };
        let msg = format!("{err}");
        assert!(msg.contains("'-'"));
        assert!(!msg.contains("position"));
    }

    #[test]
    fn invalid_body_length_display() {
        let err = SedolError::InvalidBodyLength { length: 8 };
        assert!(format!("{err}").contains("8 characters"));
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::InvalidSedol {
            value: "12".to_string(),
            reason: Rejection::InvalidLength { length: 2 },
        };
        let msg = format!("{err}");
        assert!(msg.contains("\"12\""));
        assert!(msg.contains("7 characters"));

        assert!(format!("{}", ValidationError::Absent).contains("absent"));
    }

    #[test]
    fn all_error_types_are_debug() {
        let e1 = SedolError::InvalidBodyLength { length: 0 };
        let e2 = ValidationError::Absent;
        assert!(!format!("{e1:?}").is_empty());
        assert!(!format!("{e2:?}").is_empty());
    }
}
