//! Form field value objects

use super::rule::Rule;

/// A single user-editable input tracked for validation
#[derive(Debug, Clone)]
pub struct Field {
    /// Unique within a form
    pub id: String,
    pub label: String,
    pub value: String,
    /// Checked in order; the first failing rule wins
    pub rules: Vec<Rule>,
    pub is_multiline: bool,
}

impl Field {
    /// Create a new single-line text field without rules
    pub fn text(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value: String::new(),
            rules: Vec::new(),
            is_multiline: false,
        }
    }

    /// Create a new multiline text field without rules
    pub fn multiline(id: &str, label: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(id, label)
        }
    }

    /// Append a rule (builder style)
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the initial value (builder style)
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// A field is optional when it carries no rules
    pub fn is_optional(&self) -> bool {
        self.rules.is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Label shown in the form, with a marker for optional fields
    pub fn display_label(&self) -> String {
        if self.is_optional() {
            format!("{} (optional)", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = Field::text("email", "Email");
        assert_eq!(field.id, "email");
        assert_eq!(field.label, "Email");
        assert!(field.value.is_empty());
        assert!(field.rules.is_empty());
        assert!(!field.is_multiline);
    }

    #[test]
    fn test_multiline_field() {
        let field = Field::multiline("message", "Message");
        assert!(field.is_multiline);
        assert_eq!(field.id, "message");
    }

    #[test]
    fn test_with_rule_keeps_order() {
        let field = Field::text("name", "Name")
            .with_rule(Rule::required("required"))
            .with_rule(Rule::min_length(2, "too short"));
        assert_eq!(field.rules.len(), 2);
        assert_eq!(field.rules[0].message, "required");
        assert_eq!(field.rules[1].message, "too short");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = Field::text("name", "Name");
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.value, "Jo");
        field.pop_char();
        assert_eq!(field.value, "J");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = Field::text("name", "Name");
        field.pop_char();
        assert!(field.value.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut field = Field::text("name", "Name").with_value("Jo");
        field.clear();
        assert!(field.value.is_empty());
    }

    #[test]
    fn test_display_label_marks_optional_fields() {
        let optional = Field::text("phone", "Phone");
        let required = Field::text("name", "Name").with_rule(Rule::required("required"));
        assert_eq!(optional.display_label(), "Phone (optional)");
        assert_eq!(required.display_label(), "Name");
    }
}
