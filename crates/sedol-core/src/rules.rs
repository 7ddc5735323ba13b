//! # Validation Rules
//!
//! The facets of a [`Sedol`] are independent; none of them decides on its own
//! whether a code is acceptable. This module composes them:
//!
//! - [`SedolRules`]: which optional checks apply. Plain serde data, so it
//!   loads from whatever configuration format the application uses.
//! - [`SedolVerdict`]: outcome of [`SedolRules::evaluate`].
//! - [`Rejection`]: the first check that failed.
//!
//! Checks run in a fixed order and the first failure decides: length,
//! charset, user-defined range, vowels, check digit. Length and charset are
//! always enforced.

use serde::{Deserialize, Serialize};

use crate::charset::{self, BODY_LENGTH, SEDOL_LENGTH};
use crate::sedol::Sedol;

/// Which optional checks a SEDOL must pass.
///
/// ```
/// use sedol_core::{Sedol, SedolRules};
///
/// let rules: SedolRules = serde_json::from_str(r#"{"allow_user_defined": false}"#).unwrap();
/// assert!(!Sedol::new("9123458").validate(&rules).is_valid());
/// assert!(Sedol::new("0709954").validate(&rules).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SedolRules {
    /// Accept codes in the user-allocated range (leading `9`).
    pub allow_user_defined: bool,
    /// Accept vowels in the six-character body. Exchange-issued codes never
    /// contain them.
    pub allow_vowels: bool,
    /// Require the final character to match the computed check digit.
    pub verify_check_digit: bool,
}

impl Default for SedolRules {
    fn default() -> Self {
        Self {
            allow_user_defined: true,
            allow_vowels: true,
            verify_check_digit: true,
        }
    }
}

impl SedolRules {
    /// Only length and charset are enforced.
    pub fn lenient() -> Self {
        Self {
            allow_user_defined: true,
            allow_vowels: true,
            verify_check_digit: false,
        }
    }

    /// Exchange-issued codes only: no user range, no vowels, valid digit.
    pub fn strict() -> Self {
        Self {
            allow_user_defined: false,
            allow_vowels: false,
            verify_check_digit: true,
        }
    }

    /// Evaluate a SEDOL against these rules.
    pub fn evaluate(&self, sedol: &Sedol) -> SedolVerdict {
        let verdict = match self.first_rejection(sedol) {
            Some(reason) => SedolVerdict::Invalid(reason),
            None => SedolVerdict::Valid,
        };
        match &verdict {
            SedolVerdict::Valid => {
                tracing::trace!(sedol = %sedol, "SEDOL accepted");
            }
            SedolVerdict::Invalid(reason) => {
                tracing::debug!(sedol = ?sedol.raw(), reason = %reason, "SEDOL rejected");
            }
        }
        verdict
    }

    fn first_rejection(&self, sedol: &Sedol) -> Option<Rejection> {
        let raw = match sedol.raw() {
            Some(raw) => raw,
            None => return Some(Rejection::InvalidLength { length: 0 }),
        };

        let length = raw.chars().count();
        if length != SEDOL_LENGTH {
            return Some(Rejection::InvalidLength { length });
        }

        if let Some((position, ch)) = raw
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphanumeric())
        {
            return Some(Rejection::NonAlphanumeric { position, ch });
        }

        if !self.allow_user_defined && sedol.is_user_defined() {
            return Some(Rejection::UserDefined);
        }

        if !self.allow_vowels {
            if let Some(position) = raw.chars().take(BODY_LENGTH).position(charset::is_vowel) {
                return Some(Rejection::ContainsVowel { position });
            }
        }

        if self.verify_check_digit {
            // Seven ASCII alphanumerics: both lookups are in range.
            match (sedol.check_digit(), sedol.char_at(SEDOL_LENGTH - 1)) {
                (Ok(expected), Ok(found)) if expected != found => {
                    return Some(Rejection::CheckDigitMismatch { expected, found });
                }
                (Ok(_), Ok(_)) => {}
                (Err(_), _) | (_, Err(_)) => {
                    return Some(Rejection::InvalidLength { length });
                }
            }
        }

        None
    }
}

/// Outcome of evaluating a SEDOL against [`SedolRules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SedolVerdict {
    /// Every enabled check passed.
    Valid,
    /// A check failed. The first failure is recorded.
    Invalid(Rejection),
}

impl SedolVerdict {
    /// Whether the SEDOL passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}

/// Why a SEDOL was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Absent, or not exactly seven characters.
    InvalidLength {
        /// Characters present (0 when absent).
        length: usize,
    },
    /// A character outside `[0-9A-Za-z]`.
    NonAlphanumeric {
        /// Position of the first offending character.
        position: usize,
        /// The character itself.
        ch: char,
    },
    /// Leading `9` while user-defined codes are disallowed.
    UserDefined,
    /// A vowel in the body while vowels are disallowed.
    ContainsVowel {
        /// Position of the first vowel.
        position: usize,
    },
    /// The final character does not match the computed check digit.
    CheckDigitMismatch {
        /// Computed digit.
        expected: char,
        /// Character actually present.
        found: char,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { length } => {
                write!(f, "expected 7 characters, found {length}")
            }
            Self::NonAlphanumeric { position, ch } => {
                write!(f, "character {ch:?} at position {position} is not alphanumeric")
            }
            Self::UserDefined => write!(f, "user-defined codes (leading 9) are not accepted"),
            Self::ContainsVowel { position } => {
                write!(f, "vowel at position {position} is not accepted")
            }
            Self::CheckDigitMismatch { expected, found } => {
                write!(f, "check digit mismatch: expected {expected}, found {found}")
            }
        }
    }
}
