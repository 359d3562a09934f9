//! Headless controllers for the two waitlist dialogs.
//!
//! A controller owns everything a dialog needs besides pixels: whether it is
//! open, the typed values, per-field messages, and whether a submission is in
//! flight. A UI layer renders from these accessors and forwards user events.
//!
//! Submission runs in two halves so a UI can disable the submit button while
//! the request is pending:
//!
//! 1. [`WaitlistForm::begin_submit`] validates against the shared schema and
//!    hands back the payload, or explains why nothing was sent.
//! 2. [`WaitlistForm::finish_submit`] takes the server's answer and produces
//!    the toast to show.
//!
//! `submit` on each concrete form chains both halves around the HTTP call.

use serde::Serialize;
use serde_json::Value;

use a2s_core::schema::{FieldSpec, Schema, USER_WAITLIST, VENDOR_WAITLIST};
use a2s_core::{FieldIssue, ValidationError, VendorRole};

use crate::client::A2sClient;
use crate::error::ClientError;
use crate::types::{UserWaitlistInput, VendorWaitlistInput};

/// Shown when a failure carries nothing the visitor can act on.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to join waitlist. Please try again.";

const PLACEHOLDERS: &[(&str, &str)] = &[
    ("name", "Enter your name"),
    ("contact", "Enter your email"),
    ("preferredPlan", "Select a plan"),
    ("role", "Select your role"),
    ("portfolioLink", "https://your-portfolio.com"),
    ("location", "Enter your city/state"),
    (
        "reason",
        "Tell us what attracted you to our platform and how you plan to use it...",
    ),
    (
        "experience",
        "Describe your background, experience, skills, and what makes you a great fit for this role...",
    ),
];

/// Placeholder text for a field input.
#[must_use]
pub fn placeholder(field: &str) -> Option<&'static str> {
    PLACEHOLDERS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, text)| *text)
}

// ============================================================================
// Notifications
// ============================================================================

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Neutral or positive outcome.
    Default,
    /// Something went wrong.
    Destructive,
}

/// A toast shown after a submission completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Visual style.
    pub variant: Variant,
}

impl Notification {
    fn success(description: &str) -> Self {
        Self {
            title: "Success!".into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    fn failure(err: &ClientError) -> Self {
        let description = match err {
            ClientError::Validation { message, .. } => message.clone(),
            ClientError::Api { status, message } if (400..500).contains(status) => {
                message.clone()
            }
            _ => GENERIC_FAILURE_MESSAGE.into(),
        };

        Self {
            title: "Error".into(),
            description,
            variant: Variant::Destructive,
        }
    }
}

// ============================================================================
// Form Controller
// ============================================================================

/// Why `begin_submit` sent nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not finished.
    InFlight,
    /// The values fail the schema; messages are on the fields.
    Invalid(ValidationError),
}

/// Controller for one waitlist dialog.
#[derive(Debug, Clone)]
pub struct WaitlistForm<I> {
    title: &'static str,
    schema: Schema,
    success_message: &'static str,
    open: bool,
    values: I,
    field_errors: Vec<FieldIssue>,
    submitting: bool,
}

/// The "Join User Waitlist" dialog.
pub type UserWaitlistForm = WaitlistForm<UserWaitlistInput>;

/// The "Join Vendor Waitlist" dialog.
pub type VendorWaitlistForm = WaitlistForm<VendorWaitlistInput>;

impl<I: Clone + Default + Serialize> WaitlistForm<I> {
    fn with_schema(title: &'static str, schema: Schema, success_message: &'static str) -> Self {
        Self {
            title,
            schema,
            success_message,
            open: false,
            values: I::default(),
            field_errors: Vec::new(),
            submitting: false,
        }
    }

    /// Dialog title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Fields to render, in order, with their labels.
    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.schema.fields
    }

    /// Whether the dialog is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the dialog.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the dialog. Typed values are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Current values.
    #[must_use]
    pub fn values(&self) -> &I {
        &self.values
    }

    /// Mutable access for input bindings.
    pub fn values_mut(&mut self) -> &mut I {
        &mut self.values
    }

    /// Message to show under `field`, if any.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|issue| issue.field_name() == Some(field))
            .map(|issue| issue.message.as_str())
    }

    /// Every current field message.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldIssue] {
        &self.field_errors
    }

    /// Whether a submission is in flight; the submit button is disabled.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Text of the submit button.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Submitting..."
        } else {
            "Submit"
        }
    }

    /// Check the current values against the schema.
    ///
    /// Field messages are replaced with the outcome.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` whose issues are now on the fields.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let candidate = serde_json::to_value(&self.values).unwrap_or(Value::Null);

        match self.schema.check(&candidate) {
            Ok(_) => {
                self.field_errors.clear();
                Ok(())
            }
            Err(err) => {
                self.field_errors = err.issues().to_vec();
                Err(err)
            }
        }
    }

    /// Start a submission.
    ///
    /// On success the form is marked as submitting and the payload to send
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns `SubmitBlocked::InFlight` while a previous submission is
    /// pending, or `SubmitBlocked::Invalid` if local validation fails. Nothing
    /// should be sent in either case.
    pub fn begin_submit(&mut self) -> Result<I, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        self.validate().map_err(SubmitBlocked::Invalid)?;
        self.submitting = true;

        Ok(self.values.clone())
    }

    /// Complete a submission with the server's answer.
    ///
    /// On success the form resets and the dialog closes. On failure the
    /// values stay, and any per-field issues from the server are shown on
    /// their fields.
    pub fn finish_submit<E>(&mut self, result: Result<E, ClientError>) -> Notification {
        self.submitting = false;

        match result {
            Ok(_) => {
                tracing::info!(form = self.schema.kind, "Waitlist submission accepted");
                self.reset();
                self.close();
                Notification::success(self.success_message)
            }
            Err(err) => {
                tracing::warn!(form = self.schema.kind, error = %err, "Waitlist submission failed");
                if let ClientError::Validation { issues, .. } = &err {
                    self.field_errors.clone_from(issues);
                }
                Notification::failure(&err)
            }
        }
    }

    /// Clear values, messages and any pending submission.
    pub fn reset(&mut self) {
        self.values = I::default();
        self.field_errors.clear();
        self.submitting = false;
    }
}

/// Holds a form between `begin_submit` and `finish_submit`.
///
/// Dropping it unfinished, as happens when the `submit` future is abandoned,
/// releases the form so it can be submitted again.
struct PendingSubmit<'a, I> {
    form: &'a mut WaitlistForm<I>,
}

impl<I: Clone + Default + Serialize> PendingSubmit<'_, I> {
    fn finish<E>(self, result: Result<E, ClientError>) -> Notification {
        self.form.finish_submit(result)
    }
}

impl<I> Drop for PendingSubmit<'_, I> {
    fn drop(&mut self) {
        if self.form.submitting {
            tracing::debug!(form = self.form.schema.kind, "Waitlist submission abandoned");
            self.form.submitting = false;
        }
    }
}

impl WaitlistForm<UserWaitlistInput> {
    /// A closed, empty user waitlist dialog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_schema(
            "Join User Waitlist",
            USER_WAITLIST,
            "You've been added to our waitlist. We'll be in touch soon!",
        )
    }

    /// Validate and send the form.
    ///
    /// Returns `None` when nothing was sent (see [`WaitlistForm::begin_submit`]).
    pub async fn submit(&mut self, client: &A2sClient) -> Option<Notification> {
        let input = self.begin_submit().ok()?;
        let pending = PendingSubmit { form: self };
        let result = client.join_user_waitlist(&input).await;
        Some(pending.finish(result))
    }
}

impl Default for WaitlistForm<UserWaitlistInput> {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistForm<VendorWaitlistInput> {
    /// A closed, empty vendor waitlist dialog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_schema(
            "Join Vendor Waitlist",
            VENDOR_WAITLIST,
            "You've been added to our vendor waitlist. We'll contact you soon!",
        )
    }

    /// Show the dialog with a role chosen elsewhere on the page.
    ///
    /// `None` leaves the role field as it was.
    pub fn open_with_role(&mut self, role: Option<VendorRole>) {
        if let Some(role) = role {
            self.values.role = role.as_str().to_string();
        }
        self.open();
    }

    /// Validate and send the form.
    ///
    /// Returns `None` when nothing was sent (see [`WaitlistForm::begin_submit`]).
    pub async fn submit(&mut self, client: &A2sClient) -> Option<Notification> {
        let input = self.begin_submit().ok()?;
        let pending = PendingSubmit { form: self };
        let result = client.join_vendor_waitlist(&input).await;
        Some(pending.finish(result))
    }
}

impl Default for WaitlistForm<VendorWaitlistInput> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_user_form() -> UserWaitlistForm {
        let mut form = UserWaitlistForm::new();
        form.open();
        let values = form.values_mut();
        values.name = "Asha".into();
        values.contact = "asha@example.com".into();
        values.preferred_plan = "premium".into();
        values.location = "Pune".into();
        values.reason = "Looking for a smarter way to manage my apartment.".into();
        form
    }

    #[test]
    fn new_forms_are_closed_and_empty() {
        let user = UserWaitlistForm::new();
        assert!(!user.is_open());
        assert_eq!(user.values(), &UserWaitlistInput::default());
        assert_eq!(user.submit_label(), "Submit");

        let vendor = VendorWaitlistForm::default();
        assert_eq!(vendor.title(), "Join Vendor Waitlist");
    }

    #[test]
    fn fields_follow_the_schema() {
        let labels: Vec<_> = UserWaitlistForm::new().fields().iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            [
                "Name",
                "Contact",
                "Preferred Plan",
                "Location",
                "Why do you want to use this platform?"
            ]
        );
        for field in VendorWaitlistForm::new().fields() {
            assert!(placeholder(field.name).is_some(), "{}", field.name);
        }
    }

    #[test]
    fn empty_form_is_blocked_with_field_messages() {
        let mut form = UserWaitlistForm::new();

        let blocked = form.begin_submit().unwrap_err();
        assert!(matches!(blocked, SubmitBlocked::Invalid(_)));
        assert!(!form.is_submitting());
        assert_eq!(form.field_error("name"), Some("Name is required"));
        assert_eq!(
            form.field_error("contact"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn fixing_a_field_clears_its_message() {
        let mut form = filled_user_form();
        form.values_mut().contact = "asha".into();
        assert!(form.validate().is_err());
        assert!(form.field_error("contact").is_some());

        form.values_mut().contact = "asha@example.com".into();
        assert!(form.validate().is_ok());
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn second_submit_is_blocked_while_in_flight() {
        let mut form = filled_user_form();

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.name, "Asha");
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Submitting...");

        assert_eq!(form.begin_submit().unwrap_err(), SubmitBlocked::InFlight);
    }

    #[test]
    fn dropped_pending_submit_releases_the_form() {
        let mut form = filled_user_form();
        form.begin_submit().unwrap();

        drop(PendingSubmit { form: &mut form });

        assert!(!form.is_submitting());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn reset_clears_a_pending_submission() {
        let mut form = filled_user_form();
        form.begin_submit().unwrap();

        form.reset();

        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), "Submit");
    }

    #[test]
    fn success_resets_and_closes() {
        let mut form = filled_user_form();
        form.begin_submit().unwrap();

        let notification = form.finish_submit(Ok::<(), ClientError>(()));

        assert_eq!(notification.title, "Success!");
        assert_eq!(
            notification.description,
            "You've been added to our waitlist. We'll be in touch soon!"
        );
        assert_eq!(notification.variant, Variant::Default);
        assert!(!form.is_open());
        assert!(!form.is_submitting());
        assert_eq!(form.values(), &UserWaitlistInput::default());
    }

    #[test]
    fn server_failure_keeps_values_and_shows_generic_message() {
        let mut form = filled_user_form();
        form.begin_submit().unwrap();

        let notification = form.finish_submit::<()>(Err(ClientError::Api {
            status: 500,
            message: "Internal server error".into(),
        }));

        assert_eq!(notification.title, "Error");
        assert_eq!(notification.description, GENERIC_FAILURE_MESSAGE);
        assert_eq!(notification.variant, Variant::Destructive);
        assert!(form.is_open());
        assert!(!form.is_submitting());
        assert_eq!(form.values().name, "Asha");
    }

    #[test]
    fn server_validation_issues_land_on_fields() {
        let mut form = filled_user_form();
        form.begin_submit().unwrap();

        let notification = form.finish_submit::<()>(Err(ClientError::Validation {
            message: "Invalid data".into(),
            issues: vec![FieldIssue::field("contact", "Please enter a valid email address")],
        }));

        assert_eq!(notification.description, "Invalid data");
        assert_eq!(
            form.field_error("contact"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn open_with_role_prepopulates() {
        let mut form = VendorWaitlistForm::new();
        form.open_with_role(Some(VendorRole::Carpenter));

        assert!(form.is_open());
        assert_eq!(form.values().role, "carpenter");
    }

    #[test]
    fn open_without_role_keeps_previous_choice() {
        let mut form = VendorWaitlistForm::new();
        form.values_mut().role = "vastu".into();
        form.open_with_role(None);

        assert_eq!(form.values().role, "vastu");
    }

    #[test]
    fn empty_portfolio_link_passes_local_validation() {
        let mut form = VendorWaitlistForm::new();
        let values = form.values_mut();
        values.name = "Ravi".into();
        values.contact = "ravi@example.com".into();
        values.role = "business".into();
        values.experience = "Ten years advising small property firms.".into();
        values.location = "Delhi".into();

        assert!(form.validate().is_ok());

        form.values_mut().portfolio_link = "portfolio".into();
        assert!(form.validate().is_err());
        assert_eq!(
            form.field_error("portfolioLink"),
            Some("Please enter a valid URL")
        );
    }
}
