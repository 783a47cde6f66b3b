//! Number kind classification with display labels.

use serde::Serialize;
use std::fmt;

/// Category of a classified phone number, as reported by the phone grammar.
///
/// Kinds the grammar reports but this table has no label for collapse into
/// [`NumberKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumberKind {
    Mobile,
    FixedLine,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Unknown,
}

impl NumberKind {
    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::FixedLine => "Landline",
            Self::FixedLineOrMobile => "Landline or Mobile",
            Self::TollFree => "Toll Free",
            Self::PremiumRate => "Premium Rate",
            Self::SharedCost => "Shared Cost",
            Self::Voip => "VoIP",
            Self::PersonalNumber => "Personal Number",
            Self::Pager => "Pager",
            Self::Uan => "Universal Access Number",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
