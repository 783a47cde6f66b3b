//! `phonenumber`-backed implementation of the grammar seam.
//!
//! All contact with the library lives here. Parses run under
//! `catch_unwind` because the library is known to panic on some degenerate
//! inputs.

use super::{ParsedCandidate, PhoneGrammar};
use crate::domain::NumberKind;
use crate::error::{PhoneError, PhoneResult};
use phonenumber::{country, metadata::DATABASE, Mode};
use tracing::{debug, warn};

/// Phone grammar backed by the `phonenumber` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibPhoneGrammar;

impl LibPhoneGrammar {
    pub fn new() -> Self {
        Self
    }

    fn parse_guarded(
        &self,
        candidate: &str,
        hint: Option<country::Id>,
    ) -> PhoneResult<phonenumber::PhoneNumber> {
        let owned = candidate.to_string();
        let outcome = std::panic::catch_unwind(move || phonenumber::parse(hint, owned));

        match outcome {
            Ok(Ok(number)) => Ok(number),
            Ok(Err(err)) => Err(PhoneError::Grammar(err.to_string())),
            Err(_) => {
                warn!("phone library panicked while parsing a candidate");
                Err(PhoneError::Grammar(
                    "phone library panicked during parsing".to_string(),
                ))
            }
        }
    }

    fn candidate_from(&self, number: &phonenumber::PhoneNumber) -> ParsedCandidate {
        ParsedCandidate {
            region: number.country().id().map(|id| format!("{:?}", id)),
            calling_code: number.country().code(),
            is_valid: phonenumber::is_valid(number),
            national_format: phonenumber::format(number).mode(Mode::National).to_string(),
            international_format: phonenumber::format(number)
                .mode(Mode::International)
                .to_string(),
            kind: kind_from(number.number_type(&DATABASE)),
        }
    }
}

impl PhoneGrammar for LibPhoneGrammar {
    fn parse(&self, candidate: &str, region_hint: Option<&str>) -> PhoneResult<ParsedCandidate> {
        let hint = match region_hint {
            Some(code) => Some(region_id(code).ok_or_else(|| {
                PhoneError::Grammar(format!("unknown region hint: {}", code))
            })?),
            None => None,
        };

        let number = self.parse_guarded(candidate, hint)?;
        Ok(self.candidate_from(&number))
    }

    fn is_valid_syntax(&self, candidate: &str) -> bool {
        match self.parse_guarded(candidate, None) {
            Ok(number) => phonenumber::is_valid(&number),
            Err(err) => {
                debug!("candidate rejected: {}", err);
                false
            }
        }
    }
}

/// Map a two-letter region code to the library's region identifier.
fn region_id(code: &str) -> Option<country::Id> {
    use country::Id;

    let id = match code {
        "US" => Id::US,
        "GB" => Id::GB,
        "CA" => Id::CA,
        "AU" => Id::AU,
        "IN" => Id::IN,
        "DE" => Id::DE,
        "FR" => Id::FR,
        "IT" => Id::IT,
        "ES" => Id::ES,
        "BR" => Id::BR,
        _ => return None,
    };
    Some(id)
}

fn kind_from(kind: phonenumber::Type) -> NumberKind {
    use phonenumber::Type;

    match kind {
        Type::Mobile => NumberKind::Mobile,
        Type::FixedLine => NumberKind::FixedLine,
        Type::FixedLineOrMobile => NumberKind::FixedLineOrMobile,
        Type::TollFree => NumberKind::TollFree,
        Type::PremiumRate => NumberKind::PremiumRate,
        Type::SharedCost => NumberKind::SharedCost,
        Type::Voip => NumberKind::Voip,
        Type::PersonalNumber => NumberKind::PersonalNumber,
        Type::Pager => NumberKind::Pager,
        Type::Uan => NumberKind::Uan,
        _ => NumberKind::Unknown,
    }
}
