use log::{error, warn};

use crate::components::notification::Notification;
use crate::join::relay::{ApplicationPayload, SubmissionError, SubmissionResult};
use crate::join::validation::{validate, ErrorMap, Field, FormValues};

/// What the form wants done after the user hits submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// A submission is already in flight; nothing happened.
    Busy,
    /// Validation failed; errors are set and no request should be made.
    Rejected(Notification),
    /// Validation passed; post this payload and hand the outcome to
    /// [`JoinForm::finish_submit`].
    Send(ApplicationPayload),
}

/// State of one join-team form.
///
/// Errors are only recomputed on submit, so a message stays next to its
/// field while the user is correcting it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinForm {
    values: FormValues,
    errors: ErrorMap,
    submitting: bool,
}

impl JoinForm {
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    pub fn toggle_specialization(&mut self, tag: &str) {
        self.values.toggle_specialization(tag);
    }

    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.submitting {
            return SubmitStep::Busy;
        }
        self.submitting = true;

        let validation = validate(&self.values);
        if !validation.is_valid {
            warn!("Join form rejected by validation");
            self.errors = validation.errors;
            self.submitting = false;
            return SubmitStep::Rejected(Notification::error(
                "Form Error",
                "Please correct the errors in the form and try again.",
            ));
        }

        self.errors = ErrorMap::default();
        SubmitStep::Send(ApplicationPayload::from_values(&self.values))
    }

    /// Applies the relay outcome and returns the toast to show.
    pub fn finish_submit(&mut self, outcome: SubmissionResult) -> Notification {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.values = FormValues::default();
                Notification::success(
                    "Application Submitted",
                    "Thank you for your interest in joining our team. We'll be in touch soon!",
                )
            }
            Err(e) => {
                error!("Submission error: {:?}", e);
                Notification::error(
                    "Submission Error",
                    format!(
                        "There was a problem submitting your application: {}",
                        failure_detail(&e)
                    ),
                )
            }
        }
    }

    /// Validates and, when valid, sends through `relay`. Returns `None` if a
    /// submission was already running. Components drive the two halves
    /// through their own messages instead.
    #[cfg(test)]
    pub async fn submit<C: crate::join::relay::RelayClient>(&mut self, relay: &C) -> Option<Notification> {
        match self.begin_submit() {
            SubmitStep::Busy => None,
            SubmitStep::Rejected(notification) => Some(notification),
            SubmitStep::Send(payload) => {
                let outcome = relay.send(&payload).await;
                Some(self.finish_submit(outcome))
            }
        }
    }
}

fn failure_detail(e: &SubmissionError) -> String {
    let detail = e.to_string();
    if detail.trim().is_empty() {
        "Unknown error occurred".to_string()
    } else {
        detail
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::components::notification::NotificationKind;
    use crate::join::relay::RelayClient;

    struct FakeRelay {
        outcome: SubmissionResult,
        sent: RefCell<Vec<ApplicationPayload>>,
    }

    impl FakeRelay {
        fn answering(outcome: SubmissionResult) -> Self {
            Self { outcome, sent: RefCell::new(Vec::new()) }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl RelayClient for FakeRelay {
        async fn send(&self, payload: &ApplicationPayload) -> SubmissionResult {
            self.sent.borrow_mut().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn filled_form() -> JoinForm {
        let mut form = JoinForm::default();
        form.set_field(Field::FirstName, "Ana");
        form.set_field(Field::LastName, "Perez");
        form.set_field(Field::Email, "ana@example.com");
        form.set_field(Field::Phone, "123-456-7890");
        form.set_field(Field::City, "Huntington");
        form.set_field(Field::ZipCode, "11746");
        form.set_field(Field::MaxTravelDistance, "25 miles");
        form.toggle_specialization("Painting");
        form
    }

    #[test]
    fn accepted_submission_resets_the_form() {
        let relay = FakeRelay::answering(Ok(()));
        let mut form = filled_form();

        let notification = block_on(form.submit(&relay)).unwrap();

        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.title, "Application Submitted");
        assert_eq!(form.values(), &FormValues::default());
        assert!(!form.is_submitting());
        assert_eq!(relay.calls(), 1);
        let sent = &relay.sent.borrow()[0];
        assert_eq!(sent.specializations, "Painting");
        assert_eq!(sent.subject, "New Team Member Application");
    }

    #[test]
    fn transport_failure_keeps_values() {
        let relay = FakeRelay::answering(Err(SubmissionError::Transport(
            "NetworkError when attempting to fetch resource.".to_string(),
        )));
        let mut form = filled_form();
        let before = form.values().clone();

        let notification = block_on(form.submit(&relay)).unwrap();

        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.title, "Submission Error");
        assert!(notification
            .description
            .unwrap()
            .contains("NetworkError when attempting to fetch resource."));
        assert_eq!(form.values(), &before);
        assert!(!form.is_submitting());
        assert_eq!(relay.calls(), 1);
    }

    #[test]
    fn relay_rejection_reports_generic_failure() {
        let relay = FakeRelay::answering(Err(SubmissionError::Rejected { status: 500 }));
        let mut form = filled_form();

        let notification = block_on(form.submit(&relay)).unwrap();

        assert_eq!(
            notification.description.as_deref(),
            Some("There was a problem submitting your application: Submission failed")
        );
        assert!(!form.values().first_name.is_empty());
    }

    #[test]
    fn empty_transport_message_falls_back() {
        let mut form = filled_form();
        let step = form.begin_submit();
        assert!(matches!(step, SubmitStep::Send(_)));

        let notification = form.finish_submit(Err(SubmissionError::Transport(String::new())));

        assert_eq!(
            notification.description.as_deref(),
            Some("There was a problem submitting your application: Unknown error occurred")
        );
    }

    #[test]
    fn missing_first_name_never_reaches_the_relay() {
        let relay = FakeRelay::answering(Ok(()));
        let mut form = filled_form();
        form.set_field(Field::FirstName, "");

        let notification = block_on(form.submit(&relay)).unwrap();

        assert_eq!(notification.title, "Form Error");
        assert_eq!(relay.calls(), 0);
        assert!(!form.is_submitting());
        assert_eq!(form.errors().field(Field::FirstName), "First name is required");
        for field in Field::ALL.into_iter().filter(|f| *f != Field::FirstName) {
            assert_eq!(form.errors().field(field), "");
        }
        assert_eq!(form.errors().specializations(), "");
    }

    #[test]
    fn blank_required_fields_block_submission() {
        let relay = FakeRelay::answering(Ok(()));
        let mut form = JoinForm::default();
        form.set_field(Field::CompanyName, "Perez Tile");

        block_on(form.submit(&relay));

        assert_eq!(relay.calls(), 0);
        for field in Field::ALL.into_iter().filter(|f| f.is_required()) {
            assert!(!form.errors().field(field).is_empty(), "{:?}", field);
        }
        assert!(!form.errors().specializations().is_empty());
    }

    #[test]
    fn errors_persist_until_next_submit() {
        let relay = FakeRelay::answering(Ok(()));
        let mut form = filled_form();
        form.set_field(Field::Email, "broken");
        block_on(form.submit(&relay));
        assert!(!form.errors().field(Field::Email).is_empty());

        form.set_field(Field::Email, "ana@example.com");
        assert!(!form.errors().field(Field::Email).is_empty());

        block_on(form.submit(&relay));
        assert!(form.errors().is_empty());
        assert_eq!(relay.calls(), 1);
    }

    #[test]
    fn stepwise_success_resets_the_form() {
        let mut form = filled_form();

        let SubmitStep::Send(payload) = form.begin_submit() else {
            panic!("valid form should produce a payload");
        };
        assert_eq!(payload.first_name, "Ana");
        assert!(form.is_submitting());

        let notification = form.finish_submit(Ok(()));

        assert_eq!(notification.title, "Application Submitted");
        assert_eq!(form.values(), &FormValues::default());
        assert!(!form.is_submitting());
    }

    #[test]
    fn stepwise_transport_failure_keeps_values() {
        let mut form = filled_form();
        let before = form.values().clone();
        assert!(matches!(form.begin_submit(), SubmitStep::Send(_)));

        let notification =
            form.finish_submit(Err(SubmissionError::Transport("Failed to fetch".to_string())));

        assert_eq!(notification.title, "Submission Error");
        assert_eq!(
            notification.description.as_deref(),
            Some("There was a problem submitting your application: Failed to fetch")
        );
        assert_eq!(form.values(), &before);
        assert!(!form.is_submitting());
    }

    #[test]
    fn stepwise_invalid_form_is_rejected_without_payload() {
        let mut form = filled_form();
        form.set_field(Field::ZipCode, "1174");

        let SubmitStep::Rejected(notification) = form.begin_submit() else {
            panic!("invalid form should be rejected");
        };

        assert_eq!(notification.title, "Form Error");
        assert!(!form.is_submitting());
        assert!(!form.errors().field(Field::ZipCode).is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled_form();
        assert!(matches!(form.begin_submit(), SubmitStep::Send(_)));
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), SubmitStep::Busy);

        form.finish_submit(Ok(()));
        assert!(!form.is_submitting());
    }
}
