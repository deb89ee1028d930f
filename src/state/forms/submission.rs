//! Simulated submission state machine
//!
//! `Idle --(submit, valid)--> Submitting --(delay elapses)--> Succeeded --(reset)--> Idle`
//!
//! The delay is a deadline stored in the machine. The UI loop calls
//! [`FormSubmitter::poll`] every tick; async callers can use
//! [`FormSubmitter::wait_for_completion`] instead.

use super::field::Field;
use super::validation::{validate, ValidationResult};
use chrono::{DateTime, Local};
use thiserror::Error;
use tokio::time::{Duration, Instant};
use uuid::Uuid;

/// Delay between accepting a submission and reporting success
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Lifecycle stage of a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// A field value captured at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub id: String,
    pub value: String,
}

/// Snapshot handed to the success handler
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: Uuid,
    pub values: Vec<FieldValue>,
    pub captured_at: DateTime<Local>,
}

impl Submission {
    /// Value of a field as it was at submit time
    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.id == field_id)
            .map(|v| v.value.as_str())
    }

    /// Long-form timestamp, e.g. "Monday, October 19, 2026 at 3:04:05 PM"
    pub fn captured_at_display(&self) -> String {
        self.captured_at
            .format("%A, %B %-d, %Y at %-I:%M:%S %p")
            .to_string()
    }
}

/// Receives the snapshot once the simulated delay has elapsed
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionHandler {
    fn on_success(&mut self, submission: Submission);
}

/// Why a submit request was rejected
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.error_count())]
    Invalid(ValidationResult),
    #[error("cannot submit while {0:?}")]
    AlreadyInFlight(SubmissionState),
}

#[derive(Debug)]
struct Pending {
    id: Uuid,
    values: Vec<FieldValue>,
    deadline: Instant,
}

/// Drives a single form through the submission lifecycle
#[derive(Debug)]
pub struct FormSubmitter {
    state: SubmissionState,
    delay: Duration,
    pending: Option<Pending>,
}

impl Default for FormSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl FormSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: SubmissionState::Idle,
            delay,
            pending: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// When the in-flight submission completes
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Validate and, if everything passes, move to `Submitting`.
    ///
    /// Only accepted from `Idle`. A rejected submit leaves the state untouched.
    pub fn submit(&mut self, fields: &[Field], now: Instant) -> Result<SubmissionState, SubmitError> {
        if self.state != SubmissionState::Idle {
            return Err(SubmitError::AlreadyInFlight(self.state));
        }

        let result = validate(fields);
        if !result.all_valid() {
            tracing::debug!("Submit rejected: {} invalid field(s)", result.error_count());
            return Err(SubmitError::Invalid(result));
        }

        let id = Uuid::new_v4();
        let values = fields
            .iter()
            .map(|f| FieldValue {
                id: f.id.clone(),
                value: f.value.clone(),
            })
            .collect();

        self.pending = Some(Pending {
            id,
            values,
            deadline: now + self.delay,
        });
        self.state = SubmissionState::Submitting;
        tracing::info!("Submission {id} started");

        Ok(self.state)
    }

    /// Complete the submission if its deadline has passed.
    ///
    /// The handler is invoked at most once per accepted submit.
    pub fn poll<H>(&mut self, now: Instant, handler: &mut H) -> SubmissionState
    where
        H: SubmissionHandler + ?Sized,
    {
        if self.state != SubmissionState::Submitting {
            return self.state;
        }

        let due = self
            .pending
            .as_ref()
            .map(|p| now >= p.deadline)
            .unwrap_or(false);
        if !due {
            return self.state;
        }

        if let Some(pending) = self.pending.take() {
            self.state = SubmissionState::Succeeded;
            tracing::info!("Submission {} succeeded", pending.id);
            handler.on_success(Submission {
                id: pending.id,
                values: pending.values,
                captured_at: Local::now(),
            });
        }

        self.state
    }

    /// Sleep until the in-flight submission is due, then complete it
    pub async fn wait_for_completion<H>(&mut self, handler: &mut H) -> SubmissionState
    where
        H: SubmissionHandler + ?Sized,
    {
        if let Some(deadline) = self.deadline() {
            tokio::time::sleep_until(deadline).await;
        }
        self.poll(Instant::now(), handler)
    }

    /// Return to `Idle`, dropping any in-flight submission
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!("Submission {} cancelled", pending.id);
        }
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::rule::Rule;

    fn contact_fields(name: &str, email: &str, message: &str) -> Vec<Field> {
        vec![
            Field::text("name", "Name")
                .with_rule(Rule::required("required"))
                .with_rule(Rule::min_length(2, "too short"))
                .with_value(name),
            Field::text("email", "Email")
                .with_rule(Rule::required("required"))
                .with_rule(Rule::email("invalid format"))
                .with_value(email),
            Field::multiline("message", "Message")
                .with_rule(Rule::required("required"))
                .with_rule(Rule::min_length(10, "too short"))
                .with_value(message),
        ]
    }

    fn valid_fields() -> Vec<Field> {
        contact_fields("Jo", "jo@x.com", "Hello there!")
    }

    /// Handler that records every snapshot it receives
    #[derive(Default)]
    struct Recorder {
        received: Vec<Submission>,
    }

    impl SubmissionHandler for Recorder {
        fn on_success(&mut self, submission: Submission) {
            self.received.push(submission);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_idle() {
            let submitter = FormSubmitter::default();
            assert_eq!(submitter.state(), SubmissionState::Idle);
            assert_eq!(submitter.delay(), DEFAULT_SUBMIT_DELAY);
            assert!(submitter.deadline().is_none());
        }

        #[test]
        fn test_valid_fields_move_to_submitting() {
            let mut submitter = FormSubmitter::default();
            let now = Instant::now();

            let state = submitter.submit(&valid_fields(), now).unwrap();

            assert_eq!(state, SubmissionState::Submitting);
            assert!(submitter.is_submitting());
            assert_eq!(submitter.deadline(), Some(now + DEFAULT_SUBMIT_DELAY));
        }

        #[test]
        fn test_invalid_fields_keep_idle_and_return_validation_result() {
            let mut submitter = FormSubmitter::default();
            let fields = contact_fields("", "bad", "short");

            let err = submitter.submit(&fields, Instant::now()).unwrap_err();

            match err {
                SubmitError::Invalid(result) => assert_eq!(result, validate(&fields)),
                other => panic!("unexpected error: {other:?}"),
            }
            assert_eq!(submitter.state(), SubmissionState::Idle);
            assert!(submitter.deadline().is_none());
        }

        #[test]
        fn test_second_submit_while_in_flight_is_rejected() {
            let mut submitter = FormSubmitter::default();
            let now = Instant::now();
            submitter.submit(&valid_fields(), now).unwrap();

            let err = submitter.submit(&valid_fields(), now).unwrap_err();

            assert!(matches!(
                err,
                SubmitError::AlreadyInFlight(SubmissionState::Submitting)
            ));
            assert_eq!(submitter.deadline(), Some(now + DEFAULT_SUBMIT_DELAY));
        }

        #[test]
        fn test_submit_after_success_requires_reset() {
            let mut submitter = FormSubmitter::new(Duration::ZERO);
            let now = Instant::now();
            submitter.submit(&valid_fields(), now).unwrap();
            submitter.poll(now, &mut Recorder::default());

            let err = submitter.submit(&valid_fields(), now).unwrap_err();
            assert!(matches!(
                err,
                SubmitError::AlreadyInFlight(SubmissionState::Succeeded)
            ));

            submitter.reset();
            assert!(submitter.submit(&valid_fields(), now).is_ok());
        }

        #[test]
        fn test_error_messages() {
            let mut result = ValidationResult::default();
            result.set_error("name", "required");
            assert_eq!(
                SubmitError::Invalid(result).to_string(),
                "form has 1 invalid field(s)"
            );
            assert_eq!(
                SubmitError::AlreadyInFlight(SubmissionState::Submitting).to_string(),
                "cannot submit while Submitting"
            );
        }
    }

    mod poll {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_before_deadline_stays_submitting() {
            let mut submitter = FormSubmitter::default();
            let start = Instant::now();
            submitter.submit(&valid_fields(), start).unwrap();

            // No expectations: any call would panic
            let mut handler = MockSubmissionHandler::new();
            let state = submitter.poll(
                start + DEFAULT_SUBMIT_DELAY - Duration::from_millis(1),
                &mut handler,
            );

            assert_eq!(state, SubmissionState::Submitting);
        }

        #[test]
        fn test_at_deadline_succeeds_and_calls_handler_once() {
            let mut submitter = FormSubmitter::default();
            let start = Instant::now();
            submitter.submit(&valid_fields(), start).unwrap();

            let mut handler = MockSubmissionHandler::new();
            handler
                .expect_on_success()
                .withf(|s| {
                    s.value("name") == Some("Jo")
                        && s.value("email") == Some("jo@x.com")
                        && s.value("message") == Some("Hello there!")
                })
                .times(1)
                .return_const(());

            let deadline = start + DEFAULT_SUBMIT_DELAY;
            assert_eq!(submitter.poll(deadline, &mut handler), SubmissionState::Succeeded);
            // Later polls must not fire again
            assert_eq!(
                submitter.poll(deadline + Duration::from_secs(5), &mut handler),
                SubmissionState::Succeeded
            );
            assert!(submitter.deadline().is_none());
        }

        #[test]
        fn test_idle_poll_is_noop() {
            let mut submitter = FormSubmitter::default();
            let mut handler = MockSubmissionHandler::new();
            assert_eq!(
                submitter.poll(Instant::now(), &mut handler),
                SubmissionState::Idle
            );
        }

        #[test]
        fn test_snapshot_ignores_later_edits() {
            let mut submitter = FormSubmitter::default();
            let start = Instant::now();
            let mut fields = valid_fields();
            submitter.submit(&fields, start).unwrap();

            fields[0].set_text("Changed".to_string());
            fields[2].clear();

            let mut recorder = Recorder::default();
            submitter.poll(start + DEFAULT_SUBMIT_DELAY, &mut recorder);

            assert_eq!(recorder.received.len(), 1);
            let snapshot = &recorder.received[0];
            assert_eq!(snapshot.value("name"), Some("Jo"));
            assert_eq!(snapshot.value("message"), Some("Hello there!"));
            assert_eq!(snapshot.value("missing"), None);
        }

        #[test]
        fn test_reset_while_submitting_cancels() {
            let mut submitter = FormSubmitter::default();
            let start = Instant::now();
            submitter.submit(&valid_fields(), start).unwrap();

            submitter.reset();

            let mut handler = MockSubmissionHandler::new();
            assert_eq!(
                submitter.poll(start + DEFAULT_SUBMIT_DELAY, &mut handler),
                SubmissionState::Idle
            );
        }
    }

    mod timing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_transition_happens_after_configured_delay() {
            let mut submitter = FormSubmitter::default();
            submitter.submit(&valid_fields(), Instant::now()).unwrap();

            tokio::time::advance(DEFAULT_SUBMIT_DELAY - Duration::from_millis(1)).await;
            let mut untouched = MockSubmissionHandler::new();
            assert_eq!(
                submitter.poll(Instant::now(), &mut untouched),
                SubmissionState::Submitting
            );

            tokio::time::advance(Duration::from_millis(1)).await;
            let mut recorder = Recorder::default();
            assert_eq!(
                submitter.poll(Instant::now(), &mut recorder),
                SubmissionState::Succeeded
            );
            assert_eq!(recorder.received.len(), 1);
        }

        #[tokio::test(start_paused = true)]
        async fn test_wait_for_completion_sleeps_for_delay() {
            let delay = Duration::from_millis(1500);
            let mut submitter = FormSubmitter::new(delay);
            let start = Instant::now();
            submitter.submit(&valid_fields(), start).unwrap();

            let mut recorder = Recorder::default();
            let state = submitter.wait_for_completion(&mut recorder).await;

            assert_eq!(state, SubmissionState::Succeeded);
            assert!(start.elapsed() >= delay);
            assert!(start.elapsed() < delay + Duration::from_millis(5));
            assert_eq!(recorder.received.len(), 1);
        }

        #[tokio::test(start_paused = true)]
        async fn test_wait_for_completion_when_idle_returns_immediately() {
            let mut submitter = FormSubmitter::default();
            let mut recorder = Recorder::default();
            assert_eq!(
                submitter.wait_for_completion(&mut recorder).await,
                SubmissionState::Idle
            );
            assert!(recorder.received.is_empty());
        }
    }

    mod snapshot {
        use super::*;
        use pretty_assertions::assert_eq;
        use chrono::TimeZone;

        #[test]
        fn test_captured_at_display() {
            let submission = Submission {
                id: Uuid::nil(),
                values: vec![],
                captured_at: Local.with_ymd_and_hms(2026, 10, 19, 15, 4, 5).unwrap(),
            };
            assert_eq!(
                submission.captured_at_display(),
                "Monday, October 19, 2026 at 3:04:05 PM"
            );
        }
    }
}
