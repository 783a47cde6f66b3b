//! CleanedNumber value object.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Leading "00" is the international dialing prefix in most of the world.
static INTERNATIONAL_DOUBLE_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^00").unwrap());

// A leading "0" directly followed by 1-9 is treated as a trunk prefix.
static LEADING_TRUNK_ZERO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0([1-9])").unwrap());

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-().]").unwrap());

/// A phone-number candidate reduced to its canonical dialable form.
///
/// Cleaning is total: it accepts arbitrary text and never fails. After
/// cleaning, no whitespace, hyphens, parentheses, or periods remain, and a
/// leading `00` or trunk `0` has been rewritten to `+`. A leading `+` and
/// everything after it are left untouched.
///
/// # Example
///
/// ```
/// use phone_detector_bot::domain::CleanedNumber;
///
/// let cleaned = CleanedNumber::from_raw("00 44 7911 123456");
/// assert_eq!(cleaned.as_str(), "+447911123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CleanedNumber(String);

impl CleanedNumber {
    /// Clean a raw candidate.
    ///
    /// The rewrite order matters: the trunk-zero rule must not see a `00`
    /// prefix, and separator stripping operates on the rewritten string.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();

        let rewritten = INTERNATIONAL_DOUBLE_ZERO.replace(trimmed, "+");
        let rewritten = LEADING_TRUNK_ZERO.replace(&rewritten, "+$1");
        let stripped = SEPARATORS.replace_all(&rewritten, "");

        Self(stripped.into_owned())
    }

    /// Get the cleaned candidate as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the candidate already carries a `+` country-code prefix.
    pub fn has_country_prefix(&self) -> bool {
        self.0.starts_with('+')
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CleanedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
