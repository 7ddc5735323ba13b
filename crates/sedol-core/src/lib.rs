#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # sedol-core — SEDOL Security Identifiers
//!
//! A SEDOL (Stock Exchange Daily Official List) code is seven ASCII
//! alphanumerics: a six-character body followed by a decimal check digit
//! computed from a weighted sum of the body's character codes.
//!
//! ## Design Principles
//!
//! 1. **Raw input is never rewritten.** [`Sedol`] stores what it was given,
//!    absent input included, and derives every facet on demand.
//!
//! 2. **Preconditions are typed errors.** Facets that index past the end of
//!    the input, or meet a character with no code, return [`SedolError`]
//!    instead of panicking or guessing.
//!
//! 3. **Facets do not compose themselves.** [`SedolRules`] is the one place
//!    that turns facets into an accept/reject decision, and
//!    [`ValidatedSedol`] is the type that carries the result.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O. Logging goes through `tracing`; the application installs the
//!   subscriber.

pub mod charset;
pub mod error;
pub mod rules;
pub mod sedol;
pub mod validated;

// Re-export primary types at crate root for ergonomic imports.
pub use charset::{
    append_check_digit, code, compute_check_digit, BODY_LENGTH, SEDOL_LENGTH, WEIGHTS,
};
pub use error::{SedolError, ValidationError};
pub use rules::{Rejection, SedolRules, SedolVerdict};
pub use sedol::{Sedol, SedolFacets};
pub use validated::ValidatedSedol;
