//! Contact form state: field values, focus and displayed errors

use super::field::Field;
use super::validation::{validate_on_blur, ValidationResult};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The contact form as the UI sees it.
///
/// The last focus position (index `fields.len()`) is the submit button.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<Field>,
    pub active_field_index: usize,
    /// Errors currently shown next to fields
    pub errors: ValidationResult,
}

impl ContactForm {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            active_field_index: 0,
            errors: ValidationResult::default(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// The focused field, or None when the submit button is focused
    pub fn get_active_field(&self) -> Option<&Field> {
        self.fields.get(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_active_field()
            .map(|f| f.is_multiline)
            .unwrap_or(false)
    }

    /// Type into the focused field; editing clears that field's error
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.push_char(c);
            self.errors.clear_error(&field.id);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.pop_char();
            self.errors.clear_error(&field.id);
        }
    }

    /// Replace the shown errors with a full validation pass
    pub fn show_validation(&mut self, result: ValidationResult) {
        self.errors = result;
        if let Some(first) = self.errors.errors().first() {
            if let Some(index) = self.fields.iter().position(|f| f.id == first.field_id) {
                self.active_field_index = index;
            }
        }
    }

    /// Empty every field and drop shown errors
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.errors.clear();
        self.active_field_index = 0;
    }

    /// Run the real-time check on the field focus is leaving
    fn blur(&mut self, index: usize) {
        if let Some(field) = self.fields.get(index) {
            match validate_on_blur(field) {
                Some(message) => self.errors.set_error(&field.id, message),
                None => self.errors.clear_error(&field.id),
            }
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(self.fields.len());
        if index != self.active_field_index {
            self.blur(self.active_field_index);
        }
        self.active_field_index = index;
    }
}
