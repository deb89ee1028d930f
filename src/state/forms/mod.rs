//! Form domain layer
//!
//! Fields, rules and validation are independent of rendering. The UI layer
//! owns a [`ContactForm`] and drives a [`FormSubmitter`] through it.

mod field;
mod form_state;
mod rule;
mod submission;
mod validation;

pub use field::Field;
pub use form_state::{ContactForm, Form};
pub use rule::{is_valid_email, Rule, RuleKind};
pub use submission::{
    FieldValue, FormSubmitter, Submission, SubmissionHandler, SubmissionState, SubmitError,
    DEFAULT_SUBMIT_DELAY,
};
pub use validation::{validate, validate_field, validate_on_blur, FieldError, ValidationResult};
