//! Phone analysis service.
//!
//! The normalization and country-detection pipeline: clean the candidate,
//! guess a calling-code prefix or region where none is given, delegate the
//! actual parsing to the grammar collaborator, and map the result into a
//! display record. Stateless per call; every value is produced fresh and
//! discarded after the reply.

use crate::domain::{country_name, CleanedNumber, PhoneRecord};
use crate::error::{PhoneError, PhoneResult};
use crate::grammar::{ParsedCandidate, PhoneGrammar};
use std::sync::Arc;
use tracing::{debug, error};

/// Guess lists used when a candidate carries no `+` country prefix.
///
/// Construction data, not module state: the service only ever reads these.
#[derive(Debug, Clone)]
pub struct GuessConfig {
    /// Calling-code prefixes tried, in order, by the validator.
    pub calling_code_prefixes: Vec<String>,

    /// Region codes tried, in order, by the classifier.
    pub region_hints: Vec<String>,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            calling_code_prefixes: ["1", "44", "81", "86"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            region_hints: ["US", "GB", "CA", "AU", "IN", "DE", "FR", "IT", "ES", "BR"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

/// Validation and classification over an injected [`PhoneGrammar`].
pub struct PhoneService {
    grammar: Arc<dyn PhoneGrammar>,
    guesses: GuessConfig,
}

impl PhoneService {
    /// Create a new phone service.
    pub fn new(grammar: Arc<dyn PhoneGrammar>, guesses: GuessConfig) -> Self {
        Self { grammar, guesses }
    }

    /// Whether the candidate can be read as a valid phone number.
    ///
    /// Candidates without a `+` prefix are retried under each configured
    /// calling-code prefix; a prefix hit returns early. Otherwise the bare
    /// cleaned candidate decides, so a number that is only valid as written
    /// still passes. Grammar failures count as "not valid"; this method never
    /// returns an error.
    pub fn is_valid(&self, raw: &str) -> bool {
        let cleaned = CleanedNumber::from_raw(raw);

        if !cleaned.has_country_prefix() {
            for prefix in &self.guesses.calling_code_prefixes {
                let guessed = format!("+{}{}", prefix, cleaned.as_str());
                if self.grammar.is_valid_syntax(&guessed) {
                    return true;
                }
            }
        }

        self.grammar.is_valid_syntax(cleaned.as_str())
    }

    /// Produce the structured analysis record for a candidate.
    ///
    /// # Errors
    ///
    /// [`PhoneError::Unresolvable`] when no region interpretation is accepted,
    /// or [`PhoneError::Grammar`] when a `+`-prefixed candidate is rejected by
    /// the collaborator. Errors are logged here and propagated to the caller.
    pub fn describe(&self, raw: &str) -> PhoneResult<PhoneRecord> {
        let cleaned = CleanedNumber::from_raw(raw);

        let parsed = if cleaned.has_country_prefix() {
            self.grammar.parse(cleaned.as_str(), None)
        } else {
            self.detect_region(&cleaned).ok_or(PhoneError::Unresolvable)
        };

        let parsed = parsed.map_err(|err| {
            error!("failed to interpret candidate {}: {}", cleaned, err);
            err
        })?;

        Ok(Self::build_record(parsed))
    }

    /// Try each configured region hint in order; accept the first whose parse
    /// succeeds and is judged valid. Regions that error are skipped.
    fn detect_region(&self, cleaned: &CleanedNumber) -> Option<ParsedCandidate> {
        for region in &self.guesses.region_hints {
            match self.grammar.parse(cleaned.as_str(), Some(region)) {
                Ok(candidate) if candidate.is_valid => return Some(candidate),
                Ok(_) => continue,
                Err(err) => {
                    debug!("region {} skipped for {}: {}", region, cleaned, err);
                    continue;
                }
            }
        }

        None
    }

    fn build_record(parsed: ParsedCandidate) -> PhoneRecord {
        let country = match parsed.region.as_deref() {
            Some(region) => country_name(region).unwrap_or(region).to_string(),
            None => "Unknown".to_string(),
        };

        PhoneRecord {
            country,
            country_code: format!("+{}", parsed.calling_code),
            is_valid: parsed.is_valid,
            national_format: parsed.national_format,
            international_format: parsed.international_format,
            number_type: parsed.kind.label().to_string(),
        }
    }
}
