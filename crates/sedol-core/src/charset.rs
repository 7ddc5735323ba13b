//! # SEDOL Character Codes and Check Digit
//!
//! Every SEDOL character maps to a numeric code: digits to their value,
//! letters to `10 + alphabet index` (case-insensitive). The check digit is the
//! ten's complement of a weighted sum of the six body codes, modulo 10.
//!
//! ```text
//! position   0  1  2  3  4  5
//! weight     1  3  1  7  3  9
//! check    = (10 - Σ code × weight mod 10) mod 10
//! ```
//!
//! Characters outside `[0-9A-Za-z]` have no code and are rejected with
//! [`SedolError::UndefinedCharacter`]. No fallback weight exists.

use crate::error::SedolError;

/// Number of characters in a complete SEDOL, check digit included.
pub const SEDOL_LENGTH: usize = 7;

/// Number of characters covered by the checksum.
pub const BODY_LENGTH: usize = 6;

/// Per-position checksum weights for the six body characters.
pub const WEIGHTS: [u32; BODY_LENGTH] = [1, 3, 1, 7, 3, 9];

/// Map a single character to its SEDOL code.
///
/// `'0'..='9'` map to `0..=9`; `'A'..='Z'` and `'a'..='z'` map to `10..=35`.
///
/// # Errors
///
/// Returns [`SedolError::UndefinedCharacter`] (with no position) for any
/// other character.
///
/// ```
/// assert_eq!(sedol_core::code('B'), Ok(11));
/// assert_eq!(sedol_core::code('z'), Ok(35));
/// assert!(sedol_core::code('-').is_err());
/// ```
pub fn code(ch: char) -> Result<u32, SedolError> {
    match ch {
        '0'..='9' => Ok(ch as u32 - '0' as u32),
        'A'..='Z' => Ok(10 + (ch as u32 - 'A' as u32)),
        'a'..='z' => Ok(10 + (ch as u32 - 'a' as u32)),
        _ => Err(SedolError::UndefinedCharacter { ch, position: None }),
    }
}

/// Weighted checksum over the leading six characters of `chars`.
///
/// Callers guarantee at least six characters are yielded; missing ones are
/// reported against the count actually seen.
pub(crate) fn weighted_check_digit<I>(chars: I) -> Result<char, SedolError>
where
    I: IntoIterator<Item = char>,
{
    let mut sum = 0u32;
    let mut seen = 0usize;
    for ((position, ch), weight) in chars.into_iter().enumerate().zip(WEIGHTS) {
        let value = code(ch).map_err(|_| SedolError::UndefinedCharacter {
            ch,
            position: Some(position),
        })?;
        sum += value * weight;
        seen += 1;
    }
    if seen < BODY_LENGTH {
        return Err(SedolError::OutOfRange {
            index: seen,
            length: seen,
        });
    }
    let digit = (10 - sum % 10) % 10;
    Ok(char::from(b'0' + digit as u8))
}

/// Compute the check digit for a six-character SEDOL body.
///
/// # Errors
///
/// - [`SedolError::OutOfRange`] if `body` has fewer than six characters.
/// - [`SedolError::InvalidBodyLength`] if it has more than six.
/// - [`SedolError::UndefinedCharacter`] for any character without a code.
///
/// ```
/// assert_eq!(sedol_core::compute_check_digit("B0YBKJ"), Ok('7'));
/// ```
pub fn compute_check_digit(body: &str) -> Result<char, SedolError> {
    let length = body.chars().count();
    if length < BODY_LENGTH {
        return Err(SedolError::OutOfRange {
            index: BODY_LENGTH - 1,
            length,
        });
    }
    if length > BODY_LENGTH {
        return Err(SedolError::InvalidBodyLength { length });
    }
    weighted_check_digit(body.chars())
}

/// Return `body` with its computed check digit appended.
///
/// The body is kept as given; no case folding is applied.
///
/// # Errors
///
/// Same as [`compute_check_digit`].
pub fn append_check_digit(body: &str) -> Result<String, SedolError> {
    let digit = compute_check_digit(body)?;
    let mut full = String::with_capacity(body.len() + 1);
    full.push_str(body);
    full.push(digit);
    Ok(full)
}

/// Whether `ch` is one of the five vowels, in either case.
pub(crate) fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}
