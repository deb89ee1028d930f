//! Field validation
//!
//! Validation is a pure function of the current field values. Errors are
//! returned as data for the UI layer to render next to each field.

use super::field::Field;

/// A validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_id: String,
    pub message: String,
}

/// Per-field error mapping, kept in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    /// True iff no field has an error
    pub fn all_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error message for a field, if it failed
    pub fn error_for(&self, field_id: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field_id == field_id)
            .map(|e| e.message.as_str())
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Record or replace the error for a field
    pub fn set_error(&mut self, field_id: &str, message: &str) {
        match self.errors.iter_mut().find(|e| e.field_id == field_id) {
            Some(existing) => existing.message = message.to_string(),
            None => self.errors.push(FieldError {
                field_id: field_id.to_string(),
                message: message.to_string(),
            }),
        }
    }

    /// Drop the error for a field (used when the user edits it)
    pub fn clear_error(&mut self, field_id: &str) {
        self.errors.retain(|e| e.field_id != field_id);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// First failing rule's message for a single field
pub fn validate_field(field: &Field) -> Option<&str> {
    field
        .rules
        .iter()
        .find(|rule| !rule.check(&field.value))
        .map(|rule| rule.message.as_str())
}

/// Validate every field independently
pub fn validate(fields: &[Field]) -> ValidationResult {
    let mut result = ValidationResult::default();
    for field in fields {
        if let Some(message) = validate_field(field) {
            result.set_error(&field.id, message);
        }
    }
    result
}

/// Real-time check run when focus leaves a field.
///
/// An untouched (empty) field is left alone until submit. Anything else,
/// whitespace included, gets the format rules only, so a half-typed message
/// is not flagged as too short.
pub fn validate_on_blur(field: &Field) -> Option<&str> {
    if field.value.is_empty() {
        return None;
    }
    field
        .rules
        .iter()
        .filter(|rule| rule.kind.is_format())
        .find(|rule| !rule.check(&field.value))
        .map(|rule| rule.message.as_str())
}
