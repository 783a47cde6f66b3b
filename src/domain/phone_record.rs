//! PhoneRecord display payload.

use serde::Serialize;

/// The structured result of a successful phone-number analysis.
///
/// Produced only when the grammar collaborator accepted an interpretation of
/// the candidate; a failed analysis reports an error instead of a partial
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneRecord {
    /// Human-readable country name, or the raw region code when the name
    /// table has no entry for it.
    pub country: String,

    /// Country calling code, always `"+"` followed by digits.
    pub country_code: String,

    /// The grammar collaborator's validity judgment.
    pub is_valid: bool,

    /// Number formatted for national dialing.
    pub national_format: String,

    /// Number formatted for international dialing.
    pub international_format: String,

    /// Display label of the classified number type.
    #[serde(rename = "type")]
    pub number_type: String,
}
