//! # Validated SEDOL Newtype
//!
//! [`ValidatedSedol`] can only hold a string that passed a [`SedolRules`]
//! evaluation. Use it at boundaries where an unchecked [`Sedol`] must not
//! travel further: deserialized payloads, map keys, domain records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::charset::{BODY_LENGTH, SEDOL_LENGTH};
use crate::error::ValidationError;
use crate::rules::{SedolRules, SedolVerdict};
use crate::sedol::Sedol;

/// A SEDOL that passed validation at construction.
///
/// Serializes as a plain string. Deserialization routes through
/// [`ValidatedSedol::new`], so invalid strings are rejected rather than
/// silently accepted.
///
/// ```
/// use sedol_core::ValidatedSedol;
///
/// let sedol: ValidatedSedol = "B0YBKJ7".parse().unwrap();
/// assert_eq!(sedol.body(), "B0YBKJ");
/// assert_eq!(sedol.check_digit(), '7');
/// assert!("B0YBKJ8".parse::<ValidatedSedol>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ValidatedSedol(String);

impl ValidatedSedol {
    /// Validate with [`SedolRules::default`]: seven ASCII alphanumerics with a
    /// matching check digit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSedol`] carrying the first failed
    /// check.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_rules(value, &SedolRules::default())
    }

    /// Validate against an explicit rule set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSedol`] carrying the first failed
    /// check.
    pub fn with_rules(
        value: impl Into<String>,
        rules: &SedolRules,
    ) -> Result<Self, ValidationError> {
        let sedol = Sedol::new(value);
        match rules.evaluate(&sedol) {
            SedolVerdict::Valid => Ok(Self(sedol.raw().unwrap_or_default().to_string())),
            SedolVerdict::Invalid(reason) => Err(ValidationError::InvalidSedol {
                value: sedol.to_string(),
                reason,
            }),
        }
    }

    /// Validate a possibly absent value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Absent`] for `None`, otherwise as
    /// [`with_rules`](Self::with_rules).
    pub fn from_option(
        value: Option<String>,
        rules: &SedolRules,
    ) -> Result<Self, ValidationError> {
        match value {
            Some(value) => Self::with_rules(value, rules),
            None => Err(ValidationError::Absent),
        }
    }

    /// The full seven-character code, as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six characters covered by the checksum.
    pub fn body(&self) -> &str {
        // Validated as seven ASCII characters, so byte offsets are char offsets.
        &self.0[..BODY_LENGTH]
    }

    /// The final character.
    ///
    /// Equals the computed check digit unless the rules that admitted this
    /// value skipped that check.
    pub fn check_digit(&self) -> char {
        char::from(self.0.as_bytes()[SEDOL_LENGTH - 1])
    }

    /// Leading `9`.
    pub fn is_user_defined(&self) -> bool {
        self.0.starts_with('9')
    }

    /// Convert back into an unchecked [`Sedol`].
    pub fn into_sedol(self) -> Sedol {
        Sedol::new(self.0)
    }
}

impl std::fmt::Display for ValidatedSedol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ValidatedSedol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ValidatedSedol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ValidatedSedol> for Sedol {
    fn from(value: ValidatedSedol) -> Self {
        value.into_sedol()
    }
}

impl TryFrom<Sedol> for ValidatedSedol {
    type Error = ValidationError;

    fn try_from(sedol: Sedol) -> Result<Self, Self::Error> {
        Self::from_option(sedol.raw().map(str::to_string), &SedolRules::default())
    }
}

impl<'de> Deserialize<'de> for ValidatedSedol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(|e| {
            tracing::debug!(error = %e, "rejected SEDOL during deserialization");
            serde::de::Error::custom(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rejection;

    #[test]
    fn accepts_published_codes() {
        for raw in ["0709954", "B0YBKJ7", "9aBcDe1"] {
            let sedol = ValidatedSedol::new(raw).unwrap();
            assert_eq!(sedol.as_str(), raw);
        }
    }

    #[test]
    fn keeps_case_as_supplied() {
        let sedol = ValidatedSedol::new("9aBcDe1").unwrap();
        assert_eq!(sedol.to_string(), "9aBcDe1");
        assert_eq!(sedol.body(), "9aBcDe");
        assert!(sedol.is_user_defined());
    }

    #[test]
    fn parts_of_valid_code() {
        let sedol = ValidatedSedol::new("B0YBLH2").unwrap();
        assert_eq!(sedol.body(), "B0YBLH");
        assert_eq!(sedol.check_digit(), '2');
        assert!(!sedol.is_user_defined());
        assert_eq!(sedol.as_ref(), "B0YBLH2");
    }

    #[test]
    fn rejects_wrong_check_digit() {
        let err = ValidatedSedol::new("1234567").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSedol {
                value: "1234567".to_string(),
                reason: Rejection::CheckDigitMismatch {
                    expected: '3',
                    found: '7'
                },
            }
        );
    }

    #[test]
    fn rejects_bad_length_and_charset() {
        assert!(ValidatedSedol::new("").is_err());
        assert!(ValidatedSedol::new("12").is_err());
        assert!(ValidatedSedol::new("123456789").is_err());
        assert!(ValidatedSedol::new("éz-^&**").is_err());
    }

    #[test]
    fn strict_rules_reject_user_defined() {
        assert!(ValidatedSedol::with_rules("9123458", &SedolRules::strict()).is_err());
        assert!(ValidatedSedol::with_rules("0709954", &SedolRules::strict()).is_ok());
    }

    #[test]
    fn lenient_rules_admit_any_final_character() {
        let sedol = ValidatedSedol::with_rules("B0YBKJX", &SedolRules::lenient()).unwrap();
        assert_eq!(sedol.check_digit(), 'X');
    }

    #[test]
    fn absent_value_is_rejected() {
        assert_eq!(
            ValidatedSedol::from_option(None, &SedolRules::default()),
            Err(ValidationError::Absent)
        );
        assert_eq!(
            ValidatedSedol::try_from(Sedol::absent()),
            Err(ValidationError::Absent)
        );
    }

    #[test]
    fn converts_to_and_from_sedol() {
        let validated = ValidatedSedol::try_from(Sedol::new("5852842")).unwrap();
        let sedol: Sedol = validated.into();
        assert_eq!(sedol, Sedol::new("5852842"));
    }

    #[test]
    fn parses_from_str() {
        let sedol: ValidatedSedol = "B0YBKT7".parse().unwrap();
        assert_eq!(sedol.as_str(), "B0YBKT7");
        assert!("B0YBKT8".parse::<ValidatedSedol>().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let sedol = ValidatedSedol::new("4065663").unwrap();
        let json = serde_json::to_string(&sedol).unwrap();
        assert_eq!(json, "\"4065663\"");
        let back: ValidatedSedol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sedol);
    }

    #[test]
    fn deserialize_rejects_invalid() {
        let result: Result<ValidatedSedol, _> = serde_json::from_str("\"4065664\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("check digit mismatch"), "{err}");

        let result: Result<ValidatedSedol, _> = serde_json::from_str("null");
        assert!(result.is_err());
    }
}
