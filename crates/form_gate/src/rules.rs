//! Per-field validation rules.
//!
//! `email`, `phone` and `link` are checked against fixed patterns; every other
//! field type only has to be non-empty once surrounding whitespace is removed.

use regex::Regex;

use crate::error::FormGateError;
use crate::field_type::FieldType;

/// Unanchored: any `local@domain` run inside the value is accepted. Allows
/// quoted local parts and bracketed IP-literal domains.
const EMAIL_PATTERN: &str = r#"(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9-]{2,}|(\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\]))"#;

/// Digits plus ` / + - ( )` in any order. The empty string matches.
const PHONE_PATTERN: &str = r"^[ /+\-()0-9]*$";

/// Case-insensitive for ASCII letters only.
const LINK_PATTERN: &str = r"(?i-u)^(https?://)?((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.)+[a-z]{2,}|(([0-9]{1,3}\.){3}[0-9]{1,3}))(:[0-9]+)?(/[-a-z0-9%_.~+]*)*(\?[;&a-z0-9%_.~+=-]*)?(#[-a-z0-9_]*)?$";

/// Compiled patterns for the field types that have one.
#[derive(Debug, Clone)]
pub struct RuleSet {
    email: Regex,
    phone: Regex,
    link: Regex,
}

impl RuleSet {
    pub fn standard() -> Result<Self, FormGateError> {
        Ok(Self {
            email: compile("email", EMAIL_PATTERN)?,
            phone: compile("phone", PHONE_PATTERN)?,
            link: compile("link", LINK_PATTERN)?,
        })
    }

    pub fn pattern(&self, field_type: &FieldType) -> Option<&Regex> {
        match field_type {
            FieldType::Email => Some(&self.email),
            FieldType::Phone => Some(&self.phone),
            FieldType::Link => Some(&self.link),
            _ => None,
        }
    }

    /// Whether `value` is acceptable for `field_type`. Pure: no state is read
    /// besides the compiled patterns.
    pub fn check(&self, field_type: &FieldType, value: &str) -> bool {
        match self.pattern(field_type) {
            Some(pattern) => pattern.is_match(value),
            None => !value.trim().is_empty(),
        }
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex, FormGateError> {
    Regex::new(pattern).map_err(|source| FormGateError::Pattern { rule, source })
}
