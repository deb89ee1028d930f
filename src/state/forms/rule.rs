//! Validation rules for form fields

use regex::Regex;
use std::sync::LazyLock;

/// Loose client-side email check: `local@domain.tld`, no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s]+$").expect("email pattern is a valid regex")
});

/// The predicate half of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Trimmed value must not be empty
    Required,
    /// Trimmed value must look like an email address
    Email,
    /// Trimmed value must have at least this many characters
    MinLength(usize),
}

impl RuleKind {
    /// Format rules are the only ones checked when focus leaves a field
    pub fn is_format(&self) -> bool {
        matches!(self, RuleKind::Email)
    }
}

/// A predicate over a field value paired with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub message: String,
}

impl Rule {
    pub fn required(message: &str) -> Self {
        Self {
            kind: RuleKind::Required,
            message: message.to_string(),
        }
    }

    pub fn email(message: &str) -> Self {
        Self {
            kind: RuleKind::Email,
            message: message.to_string(),
        }
    }

    pub fn min_length(min: usize, message: &str) -> Self {
        Self {
            kind: RuleKind::MinLength(min),
            message: message.to_string(),
        }
    }

    /// Returns true if the value satisfies this rule
    pub fn check(&self, value: &str) -> bool {
        let trimmed = value.trim();
        match self.kind {
            RuleKind::Required => !trimmed.is_empty(),
            RuleKind::Email => is_valid_email(trimmed),
            RuleKind::MinLength(min) => trimmed.chars().count() >= min,
        }
    }
}

/// Check a string against the email pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
