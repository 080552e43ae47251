use std::collections::BTreeMap;

use log::{error, info, warn};

use crate::config;

use super::errors::{FieldError, SubmissionError};
use super::fields::{FormField, DEMO_YES};
use super::mobile::{is_valid_mobile, normalize_mobile};
use super::state::RegistrationFormState;
use super::transport::{LeadTracker, LeadWebhook};
use super::utm::{QueryParams, UtmParams};

/// Form-level message. The generation lets a delayed auto-hide tell
/// whether the message it was scheduled for is still the one on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub text: &'static str,
    pub generation: u32,
}

/// Payload frozen at the moment the submit button was pressed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSubmission {
    payload: RegistrationFormState,
}

impl PendingSubmission {
    #[cfg(test)]
    pub fn payload(&self) -> &RegistrationFormState {
        &self.payload
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitSuccess {
    pub status: u16,
}

pub struct RegistrationForm {
    state: RegistrationFormState,
    errors: BTreeMap<FormField, FieldError>,
    is_submitting: bool,
    banner: Option<Banner>,
    banner_generation: u32,
    tracker: Option<Box<dyn LeadTracker>>,
}

impl RegistrationForm {
    /// Builds an empty form, keeping whatever campaign attribution the
    /// landing URL carried. The query is never looked at again.
    pub fn initialize(params: &QueryParams) -> Self {
        let utm = UtmParams::from_query(params);
        if !utm.source.is_empty() {
            info!("Visitor attributed to utm_source={}", utm.source);
        }

        Self {
            state: RegistrationFormState::with_utm(utm),
            errors: BTreeMap::new(),
            is_submitting: false,
            banner: None,
            banner_generation: 0,
            tracker: None,
        }
    }

    pub fn with_tracker(mut self, tracker: Box<dyn LeadTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    #[cfg(test)]
    pub fn state(&self) -> &RegistrationFormState {
        &self.state
    }

    pub fn value(&self, field: FormField) -> &str {
        self.state.value(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn field_error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// The market question only exists for visitors asking for a demo.
    pub fn shows_market(&self) -> bool {
        self.state.wants_demo_account == DEMO_YES
    }

    pub fn is_required(&self, field: FormField) -> bool {
        field != FormField::PreferredMarket || self.shows_market()
    }

    pub fn update_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::MobileNumber => {
                self.state.mobile_number = normalize_mobile(raw);
            }
            FormField::WantsDemoAccount => {
                self.state.wants_demo_account = raw.to_string();
                if raw != DEMO_YES {
                    self.state.preferred_market.clear();
                    self.errors.remove(&FormField::PreferredMarket);
                }
            }
            _ => *self.state.value_mut(field) = raw.to_string(),
        }
        self.errors.remove(&field);
    }

    /// Checks one field and remembers the outcome for display.
    pub fn validate_field(&mut self, field: FormField) -> Result<(), FieldError> {
        let outcome = if self.is_required(field) {
            check_field(field, self.state.value(field))
        } else {
            Ok(())
        };

        match &outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e.clone());
            }
        }
        outcome
    }

    /// Validates every required field, so all problems show up at once.
    pub fn validate_form(&mut self) -> Result<(), Vec<(FormField, FieldError)>> {
        let mut failures = Vec::new();
        for field in FormField::ALL {
            if !self.is_required(field) {
                self.errors.remove(&field);
                continue;
            }
            if let Err(e) = self.validate_field(field) {
                failures.push((field, e));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    /// First half of a submit: validation, the in-flight guard and the
    /// payload snapshot. Every `Ok` must be paired with `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmissionError> {
        if self.is_submitting {
            return Err(SubmissionError::AlreadySubmitting);
        }
        self.banner = None;

        if let Err(failures) = self.validate_form() {
            let err = SubmissionError::ValidationFailed(failures);
            self.show_banner(err.banner_text());
            return Err(err);
        }

        self.is_submitting = true;
        info!("Submitting registration form");
        Ok(PendingSubmission {
            payload: self.state.clone(),
        })
    }

    /// Second half of a submit. Runs on every exit path and always leaves
    /// the form interactive again; entered values are never touched.
    pub fn finish_submit(
        &mut self,
        outcome: Result<SubmitSuccess, SubmissionError>,
    ) -> Result<SubmitSuccess, SubmissionError> {
        self.is_submitting = false;

        match &outcome {
            Ok(success) => {
                info!("Lead captured (status {})", success.status);
                if let Some(tracker) = &self.tracker {
                    if let Err(e) = tracker.track_lead() {
                        warn!("{}", e);
                    }
                }
            }
            Err(e) => {
                error!("Form submission failed: {}", e);
                self.show_banner(e.banner_text());
            }
        }
        outcome
    }

    /// All three submit steps for a caller that can hold the form across
    /// the await. The widget runs them separately around `send_future`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn submit<W: LeadWebhook>(
        &mut self,
        webhook: &W,
    ) -> Result<SubmitSuccess, SubmissionError> {
        let pending = self.begin_submit()?;
        let outcome = deliver(webhook, &pending).await;
        self.finish_submit(outcome)
    }

    /// Hides the banner if it is still the one with `generation`.
    pub fn dismiss_banner(&mut self, generation: u32) -> bool {
        if self.banner.as_ref().map(|b| b.generation) == Some(generation) {
            self.banner = None;
            true
        } else {
            false
        }
    }

    fn show_banner(&mut self, text: &'static str) {
        self.banner_generation = self.banner_generation.wrapping_add(1);
        self.banner = Some(Banner {
            text,
            generation: self.banner_generation,
        });
    }
}

/// The single POST for one submit. Anything but a 2xx is a failure.
pub async fn deliver<W: LeadWebhook>(
    webhook: &W,
    pending: &PendingSubmission,
) -> Result<SubmitSuccess, SubmissionError> {
    let status = webhook.post_lead(&pending.payload).await?;
    if (200..300).contains(&status) {
        Ok(SubmitSuccess { status })
    } else {
        Err(SubmissionError::Rejected { status })
    }
}

fn check_field(field: FormField, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::RequiredFieldMissing {
            label: field.label(),
        });
    }

    match field {
        FormField::MobileNumber if !is_valid_mobile(value) => Err(FieldError::InvalidFormat),
        FormField::FullName if value.encode_utf16().count() < config::NAME_MIN_LEN => {
            Err(FieldError::TooShort {
                min: config::NAME_MIN_LEN,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::executor::block_on;
    use serde_json::{json, Value};

    use super::*;
    use crate::registration::errors::{TrackingError, TransportError};

    struct FakeWebhook {
        reply: Result<u16, TransportError>,
        sent: RefCell<Vec<Value>>,
    }

    impl FakeWebhook {
        fn replying(reply: Result<u16, TransportError>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl LeadWebhook for FakeWebhook {
        async fn post_lead(&self, lead: &RegistrationFormState) -> Result<u16, TransportError> {
            self.sent.borrow_mut().push(serde_json::to_value(lead).unwrap());
            self.reply.clone()
        }
    }

    struct CountingTracker {
        calls: Rc<Cell<u32>>,
        fail: bool,
    }

    impl LeadTracker for CountingTracker {
        fn track_lead(&self) -> Result<(), TrackingError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(TrackingError("fbq is not defined".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn blank_form() -> RegistrationForm {
        RegistrationForm::initialize(&QueryParams::default())
    }

    fn filled_form(query: &str) -> RegistrationForm {
        let mut form = RegistrationForm::initialize(&QueryParams::parse(query));
        form.update_field(FormField::FullName, "Asha Rao");
        form.update_field(FormField::MobileNumber, "98765 43210");
        form.update_field(FormField::Language, "Hindi");
        form.update_field(FormField::ExperienceLevel, "Beginner");
        form.update_field(FormField::WantsDemoAccount, "Yes");
        form.update_field(FormField::PreferredMarket, "Forex");
        form
    }

    #[test]
    fn initialize_captures_utm_only() {
        let form = RegistrationForm::initialize(&QueryParams::parse("?utm_source=fb&utm_campaign=summer"));
        let state = form.state();
        assert_eq!(state.utm_source, "fb");
        assert_eq!(state.utm_campaign, "summer");
        assert_eq!(state.utm_medium, "");
        assert_eq!(state.utm_term, "");
        assert_eq!(state.utm_content, "");
        assert_eq!(state.full_name, "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn mobile_is_normalized_on_every_edit() {
        let mut form = blank_form();
        form.update_field(FormField::MobileNumber, "5");
        assert_eq!(form.value(FormField::MobileNumber), "");
        form.update_field(FormField::MobileNumber, "98-76-543-210");
        assert_eq!(form.value(FormField::MobileNumber), "9876543210");
        form.update_field(FormField::MobileNumber, "+91 98765 43210 999");
        assert_eq!(form.value(FormField::MobileNumber), "+919876543210");
    }

    #[test]
    fn leaving_demo_clears_market() {
        let mut form = blank_form();
        form.update_field(FormField::WantsDemoAccount, "Yes");
        form.update_field(FormField::PreferredMarket, "Forex");
        assert!(form.shows_market());

        form.update_field(FormField::WantsDemoAccount, "No");
        assert_eq!(form.value(FormField::PreferredMarket), "");
        assert!(!form.shows_market());
        assert!(!form.is_required(FormField::PreferredMarket));
    }

    #[test]
    fn other_fields_are_stored_verbatim() {
        let mut form = blank_form();
        form.update_field(FormField::FullName, "  Ravi  ");
        assert_eq!(form.value(FormField::FullName), "  Ravi  ");
    }

    #[test]
    fn mobile_validation() {
        let mut form = blank_form();
        form.update_field(FormField::MobileNumber, "12345");
        let err = form.validate_field(FormField::MobileNumber).unwrap_err();
        assert_eq!(err, FieldError::InvalidFormat);
        assert_eq!(err.to_string(), "Please enter a valid mobile number");
        assert_eq!(form.field_error(FormField::MobileNumber), Some(&FieldError::InvalidFormat));

        form.update_field(FormField::MobileNumber, "9876543210");
        assert!(form.validate_field(FormField::MobileNumber).is_ok());
        assert_eq!(form.field_error(FormField::MobileNumber), None);
    }

    #[test]
    fn name_length_validation() {
        let mut form = blank_form();
        form.update_field(FormField::FullName, "A");
        assert_eq!(
            form.validate_field(FormField::FullName),
            Err(FieldError::TooShort { min: 2 })
        );
        form.update_field(FormField::FullName, "Al");
        assert_eq!(form.validate_field(FormField::FullName), Ok(()));
    }

    #[test]
    fn name_length_counts_utf16_units() {
        let mut form = blank_form();
        form.update_field(FormField::FullName, "😀");
        assert_eq!(form.validate_field(FormField::FullName), Ok(()));
        form.update_field(FormField::FullName, "é");
        assert_eq!(
            form.validate_field(FormField::FullName),
            Err(FieldError::TooShort { min: 2 })
        );
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut form = blank_form();
        form.update_field(FormField::FullName, "   ");
        assert_eq!(
            form.validate_field(FormField::FullName).unwrap_err().to_string(),
            "Full Name is required"
        );
    }

    #[test]
    fn editing_clears_a_shown_error() {
        let mut form = blank_form();
        assert!(form.validate_field(FormField::Language).is_err());
        assert!(form.field_error(FormField::Language).is_some());
        form.update_field(FormField::Language, "Tamil");
        assert!(form.field_error(FormField::Language).is_none());
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let mut form = blank_form();
        let failures = form.validate_form().unwrap_err();
        let fields: Vec<FormField> = failures.iter().map(|(field, _)| *field).collect();
        assert_eq!(
            fields,
            [
                FormField::FullName,
                FormField::MobileNumber,
                FormField::Language,
                FormField::ExperienceLevel,
                FormField::WantsDemoAccount,
            ]
        );
        assert!(failures
            .iter()
            .all(|(_, e)| matches!(e, FieldError::RequiredFieldMissing { .. })));
        assert!(form.field_error(FormField::WantsDemoAccount).is_some());
        assert!(form.field_error(FormField::PreferredMarket).is_none());
    }

    #[test]
    fn market_required_only_with_demo() {
        let mut form = filled_form("");
        form.update_field(FormField::PreferredMarket, "");
        let failures = form.validate_form().unwrap_err();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, FormField::PreferredMarket);
        assert_eq!(failures[0].1.to_string(), "Market is required");

        form.update_field(FormField::WantsDemoAccount, "No");
        assert!(form.validate_form().is_ok());
    }

    #[test]
    fn invalid_form_never_reaches_the_webhook() {
        let mut form = blank_form();
        let webhook = FakeWebhook::replying(Ok(200));
        let err = block_on(form.submit(&webhook)).unwrap_err();

        assert!(matches!(err, SubmissionError::ValidationFailed(ref f) if f.len() == 5));
        assert!(webhook.sent.borrow().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(form.banner().map(|b| b.text), Some("Please fix the errors above"));
    }

    #[test]
    fn successful_submit_posts_everything_once() {
        let calls = Rc::new(Cell::new(0));
        let mut form = filled_form("?utm_source=fb&utm_campaign=summer").with_tracker(Box::new(
            CountingTracker {
                calls: calls.clone(),
                fail: false,
            },
        ));
        let webhook = FakeWebhook::replying(Ok(201));

        let success = block_on(form.submit(&webhook)).unwrap();
        assert_eq!(success.status, 201);
        assert!(!form.is_submitting());
        assert_eq!(calls.get(), 1);
        assert!(form.banner().is_none());

        let sent = webhook.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            json!({
                "fullname": "Asha Rao",
                "Mobile": "9876543210",
                "Language": "Hindi",
                "Experience": "Beginner",
                "demoAccount": "Yes",
                "market": "Forex",
                "utm_source": "fb",
                "utm_medium": "",
                "utm_campaign": "summer",
                "utm_term": "",
                "utm_content": ""
            })
        );
    }

    #[test]
    fn tracker_failure_does_not_change_the_outcome() {
        let calls = Rc::new(Cell::new(0));
        let mut form = filled_form("").with_tracker(Box::new(CountingTracker {
            calls: calls.clone(),
            fail: true,
        }));
        let webhook = FakeWebhook::replying(Ok(200));

        assert!(block_on(form.submit(&webhook)).is_ok());
        assert_eq!(calls.get(), 1);
        assert!(form.banner().is_none());
    }

    #[test]
    fn rejected_submit_keeps_values_and_unlocks() {
        let calls = Rc::new(Cell::new(0));
        let mut form = filled_form("").with_tracker(Box::new(CountingTracker {
            calls: calls.clone(),
            fail: false,
        }));
        let before = form.state().clone();
        let webhook = FakeWebhook::replying(Ok(500));

        let err = block_on(form.submit(&webhook)).unwrap_err();
        assert_eq!(err, SubmissionError::Rejected { status: 500 });
        assert!(!form.is_submitting());
        assert_eq!(form.state(), &before);
        assert_eq!(calls.get(), 0);
        assert_eq!(
            form.banner().map(|b| b.text),
            Some("Submission failed. Please try again.")
        );
    }

    #[test]
    fn failure_banner_clears_on_next_attempt() {
        let mut form = filled_form("");
        let webhook = FakeWebhook::replying(Ok(500));
        assert!(block_on(form.submit(&webhook)).is_err());
        assert!(form.banner().is_some());

        let pending = form.begin_submit().unwrap();
        assert!(form.banner().is_none());
        assert!(form.is_submitting());

        let outcome = block_on(deliver(&FakeWebhook::replying(Ok(200)), &pending));
        assert!(form.finish_submit(outcome).is_ok());
        assert!(form.banner().is_none());
    }

    #[test]
    fn network_failure_is_reported_and_retry_works() {
        let mut form = filled_form("");
        let offline = FakeWebhook::replying(Err(TransportError::Network("offline".to_string())));

        let err = block_on(form.submit(&offline)).unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
        assert!(!form.is_submitting());
        assert_eq!(form.value(FormField::FullName), "Asha Rao");

        let online = FakeWebhook::replying(Ok(200));
        assert!(block_on(form.submit(&online)).is_ok());
        assert_eq!(online.sent.borrow().len(), 1);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled_form("");
        let pending = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmissionError::AlreadySubmitting));

        // Edits made mid-flight don't leak into the payload already sent.
        form.update_field(FormField::FullName, "Someone Else");
        assert_eq!(pending.payload().full_name, "Asha Rao");

        let webhook = FakeWebhook::replying(Ok(204));
        let outcome = block_on(deliver(&webhook, &pending));
        assert!(form.finish_submit(outcome).is_ok());
        assert!(!form.is_submitting());
    }

    #[test]
    fn stale_banner_timer_does_not_hide_a_newer_banner() {
        let mut form = blank_form();
        let webhook = FakeWebhook::replying(Ok(200));
        let _ = block_on(form.submit(&webhook));
        let first = form.banner().unwrap().generation;
        let _ = block_on(form.submit(&webhook));
        let second = form.banner().unwrap().generation;

        assert_ne!(first, second);
        assert!(!form.dismiss_banner(first));
        assert!(form.banner().is_some());
        assert!(form.dismiss_banner(second));
        assert!(form.banner().is_none());
    }
}
