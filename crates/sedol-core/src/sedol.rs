//! # SEDOL Value Type
//!
//! [`Sedol`] holds a candidate identifier exactly as supplied and derives its
//! facets on demand. Construction never fails and never rewrites the input:
//! no trimming, no case folding, absent input is kept as absent.
//!
//! ## Preconditions
//!
//! Facets that index into the input return [`SedolError::OutOfRange`] when
//! the required position does not exist:
//!
//! | Facet                     | Needs positions |
//! |---------------------------|-----------------|
//! | `contains_vowel`          | 0-5             |
//! | `check_digit`             | 0-6             |
//! | `has_valid_check_digit`   | 0-6             |
//!
//! Absent input reports the same variant with `length: 0`. Call
//! [`Sedol::is_valid_length`] first to avoid it.

use serde::{Deserialize, Serialize};

use crate::charset::{self, BODY_LENGTH, SEDOL_LENGTH};
use crate::error::SedolError;
use crate::rules::{SedolRules, SedolVerdict};

/// A candidate SEDOL with derived, read-only facets.
///
/// Equality, ordering and hashing follow the raw input. Serializes as the
/// raw string, or `null` when absent.
///
/// ```
/// use sedol_core::Sedol;
///
/// let sedol = Sedol::new("B0YBKJ7");
/// assert!(sedol.is_valid_length());
/// assert_eq!(sedol.check_digit(), Ok('7'));
/// assert_eq!(sedol.has_valid_check_digit(), Ok(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sedol {
    raw: Option<String>,
}

impl Sedol {
    /// Wrap a candidate string. The value is stored unmodified.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// Wrap a possibly absent candidate.
    pub fn from_option(raw: Option<String>) -> Self {
        Self { raw }
    }

    /// A SEDOL with no input at all.
    pub fn absent() -> Self {
        Self { raw: None }
    }

    /// The input as supplied, or `None` if absent.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// SEDOL code of a single character. See [`charset::code`].
    pub fn code(ch: char) -> Result<u32, SedolError> {
        charset::code(ch)
    }

    /// Present and exactly seven characters long.
    pub fn is_valid_length(&self) -> bool {
        self.char_count() == Some(SEDOL_LENGTH)
    }

    /// Every character is an ASCII letter or digit.
    ///
    /// Accented letters and punctuation fail. Absent input is `false`; an
    /// empty string is vacuously `true` and fails on length instead.
    pub fn is_alphanumeric(&self) -> bool {
        match self.raw() {
            Some(raw) => raw.chars().all(|c| c.is_ascii_alphanumeric()),
            None => false,
        }
    }

    /// First character is the digit `9`, the range reserved for user
    /// allocation.
    ///
    /// Independent of length and charset; combine with
    /// [`is_valid_length`](Self::is_valid_length) for a qualified answer.
    /// Absent or empty input is `false`.
    pub fn is_user_defined(&self) -> bool {
        self.raw().is_some_and(|raw| raw.starts_with('9'))
    }

    /// Any of the first six characters is a vowel, in either case.
    ///
    /// The check digit position is not scanned.
    ///
    /// # Errors
    ///
    /// [`SedolError::OutOfRange`] if fewer than six characters are present.
    pub fn contains_vowel(&self) -> Result<bool, SedolError> {
        self.char_at(BODY_LENGTH - 1)?;
        Ok(self.chars().take(BODY_LENGTH).any(charset::is_vowel))
    }

    /// The check digit computed from positions 0-5.
    ///
    /// # Errors
    ///
    /// - [`SedolError::OutOfRange`] if fewer than seven characters are
    ///   present.
    /// - [`SedolError::UndefinedCharacter`] if a body character has no code.
    pub fn check_digit(&self) -> Result<char, SedolError> {
        self.char_at(SEDOL_LENGTH - 1)?;
        charset::weighted_check_digit(self.chars())
    }

    /// The computed check digit equals the character at position 6.
    ///
    /// # Errors
    ///
    /// Same as [`check_digit`](Self::check_digit).
    pub fn has_valid_check_digit(&self) -> Result<bool, SedolError> {
        let expected = self.check_digit()?;
        Ok(self.char_at(SEDOL_LENGTH - 1)? == expected)
    }

    /// Evaluate the facets against a rule set.
    pub fn validate(&self, rules: &SedolRules) -> SedolVerdict {
        rules.evaluate(self)
    }

    /// Every facet at once, with failed preconditions as `None`.
    pub fn facets(&self) -> SedolFacets {
        SedolFacets {
            is_valid_length: self.is_valid_length(),
            is_alphanumeric: self.is_alphanumeric(),
            is_user_defined: self.is_user_defined(),
            contains_vowel: self.contains_vowel().ok(),
            check_digit: self.check_digit().ok(),
            has_valid_check_digit: self.has_valid_check_digit().ok(),
        }
    }

    pub(crate) fn chars(&self) -> std::str::Chars<'_> {
        self.raw().unwrap_or_default().chars()
    }

    fn char_count(&self) -> Option<usize> {
        self.raw().map(|raw| raw.chars().count())
    }

    pub(crate) fn char_at(&self, index: usize) -> Result<char, SedolError> {
        self.chars().nth(index).ok_or_else(|| SedolError::OutOfRange {
            index,
            length: self.char_count().unwrap_or(0),
        })
    }
}

impl From<&str> for Sedol {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Sedol {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Option<String>> for Sedol {
    fn from(raw: Option<String>) -> Self {
        Self::from_option(raw)
    }
}

impl std::fmt::Display for Sedol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw().unwrap_or_default())
    }
}

/// Snapshot of every facet of a [`Sedol`].
///
/// Fallible facets are `None` when their precondition failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SedolFacets {
    /// See [`Sedol::is_valid_length`].
    pub is_valid_length: bool,
    /// See [`Sedol::is_alphanumeric`].
    pub is_alphanumeric: bool,
    /// See [`Sedol::is_user_defined`].
    pub is_user_defined: bool,
    /// See [`Sedol::contains_vowel`].
    pub contains_vowel: Option<bool>,
    /// See [`Sedol::check_digit`].
    pub check_digit: Option<char>,
    /// See [`Sedol::has_valid_check_digit`].
    pub has_valid_check_digit: Option<bool>,
}
