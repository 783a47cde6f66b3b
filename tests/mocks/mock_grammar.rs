use phone_detector_bot::domain::NumberKind;
use phone_detector_bot::error::{PhoneError, PhoneResult};
use phone_detector_bot::grammar::{ParsedCandidate, PhoneGrammar};
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted phone grammar for testing.
///
/// Configured with canned parse results keyed by `(candidate, region_hint)`
/// and a list of candidates judged valid as written. Records every parse call
/// for order-of-invocation assertions.
#[allow(dead_code)]
pub struct MockPhoneGrammar {
    parses: HashMap<(String, Option<String>), ParsedCandidate>,
    valid_syntax: Vec<String>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

#[allow(dead_code)]
impl MockPhoneGrammar {
    pub fn new() -> Self {
        Self {
            parses: HashMap::new(),
            valid_syntax: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script a parse result for a `(candidate, region_hint)` pair.
    pub fn with_parse(
        mut self,
        candidate: &str,
        hint: Option<&str>,
        result: ParsedCandidate,
    ) -> Self {
        self.parses
            .insert((candidate.to_string(), hint.map(str::to_string)), result);
        self
    }

    /// Script a candidate the grammar judges valid as written.
    pub fn with_valid(mut self, candidate: &str) -> Self {
        self.valid_syntax.push(candidate.to_string());
        self
    }

    /// All parse calls seen so far, in order.
    pub fn recorded_calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    /// A canned valid parse result for tests that only need plausible data.
    pub fn candidate(region: &str, calling_code: u16) -> ParsedCandidate {
        ParsedCandidate {
            region: Some(region.to_string()),
            calling_code,
            is_valid: true,
            national_format: "(234) 567-8900".to_string(),
            international_format: format!("+{} 234 567 8900", calling_code),
            kind: NumberKind::Mobile,
        }
    }
}

impl PhoneGrammar for MockPhoneGrammar {
    fn parse(&self, candidate: &str, region_hint: Option<&str>) -> PhoneResult<ParsedCandidate> {
        let key = (candidate.to_string(), region_hint.map(str::to_string));
        self.calls.lock().unwrap().push(key.clone());
        self.parses
            .get(&key)
            .cloned()
            .ok_or_else(|| PhoneError::Grammar("no script entry".to_string()))
    }

    fn is_valid_syntax(&self, candidate: &str) -> bool {
        self.valid_syntax.iter().any(|v| v == candidate)
    }
}
