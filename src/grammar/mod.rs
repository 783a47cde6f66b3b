//! The phone grammar seam.
//!
//! Parsing, validation, and formatting of phone numbers are owned by an
//! external library. The pipeline talks to it exclusively through the
//! [`PhoneGrammar`] trait so tests can substitute a scripted implementation.

pub mod libphonenumber;

pub use libphonenumber::LibPhoneGrammar;

use crate::domain::NumberKind;
use crate::error::PhoneResult;

/// A structured parse result from the grammar collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCandidate {
    /// Two-letter region code the number was resolved to, when derivable.
    pub region: Option<String>,

    /// Numeric country dialing prefix (e.g. 44 for GB).
    pub calling_code: u16,

    /// The collaborator's validity judgment of the parsed number.
    pub is_valid: bool,

    /// Number formatted for national dialing.
    pub national_format: String,

    /// Number formatted for international dialing.
    pub international_format: String,

    /// Classified number category.
    pub kind: NumberKind,
}

/// Capability interface over the external phone-number library.
pub trait PhoneGrammar: Send + Sync {
    /// Parse a candidate into a structured result.
    ///
    /// With a `region_hint`, the candidate is interpreted as a national-format
    /// number of that region; without one it must carry its own country code.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PhoneError::Grammar`] when the library rejects
    /// the candidate or fails internally.
    fn parse(&self, candidate: &str, region_hint: Option<&str>) -> PhoneResult<ParsedCandidate>;

    /// Whether the library judges the candidate, as written, a valid number.
    ///
    /// Never fails; library errors count as "not valid".
    fn is_valid_syntax(&self, candidate: &str) -> bool;
}
