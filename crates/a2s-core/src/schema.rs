//! Validation schema for waitlist candidates.
//!
//! The field tables in this module are the only definition of what a valid
//! candidate looks like. The form controllers run them before submitting so
//! the visitor gets immediate feedback; the HTTP handlers run them again and
//! their verdict is final.
//!
//! # Example
//!
//! ```
//! use a2s_core::schema::validate_user_waitlist;
//! use serde_json::json;
//!
//! let candidate = validate_user_waitlist(&json!({
//!     "name": "Asha",
//!     "contact": "asha@example.com",
//!     "preferredPlan": "premium",
//!     "location": "Pune",
//!     "reason": "Looking for a smarter way to manage my apartment."
//! }))
//! .unwrap();
//! assert_eq!(candidate.name, "Asha");
//! ```

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{FieldIssue, ValidationError};
use crate::waitlist::{NewUserWaitlistEntry, NewVendorWaitlistEntry, PreferredPlan, VendorRole};

/// Message for a required field that is missing.
pub const REQUIRED_MESSAGE: &str = "Required";

/// Minimum length of the user waitlist `reason`.
pub const MIN_REASON_LEN: usize = 10;

/// Minimum length of the vendor waitlist `experience`.
pub const MIN_EXPERIENCE_LEN: usize = 20;

// ============================================================================
// Constraints
// ============================================================================

/// What a present string value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// At least this many characters.
    MinLength(usize),
    /// Email address syntax.
    Email,
    /// One of a fixed set of values.
    OneOf(&'static [&'static str]),
    /// Absolute URL syntax.
    Url,
}

impl Constraint {
    /// Whether `value` satisfies the constraint.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::Email => is_email(value),
            Self::OneOf(allowed) => allowed.contains(&value),
            Self::Url => url::Url::parse(value).is_ok(),
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

/// Check email address syntax.
///
/// The local part may not start with a dot and no part of the address may
/// contain two consecutive dots.
#[must_use]
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

// ============================================================================
// Field Tables
// ============================================================================

/// One field of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    /// Constraint on a present value.
    pub constraint: Constraint,
    /// Whether absence (or an empty string) means "not provided".
    pub optional: bool,
    /// Message reported when the constraint fails.
    pub message: &'static str,
}

impl FieldSpec {
    const fn required(
        name: &'static str,
        label: &'static str,
        constraint: Constraint,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            constraint,
            optional: false,
            message,
        }
    }

    /// Check a raw JSON value for this field.
    ///
    /// Returns `Ok(None)` for an optional field that was not provided.
    ///
    /// # Errors
    ///
    /// Returns the issue describing why the value is unacceptable.
    pub fn check(&self, value: Option<&Value>) -> Result<Option<String>, FieldIssue> {
        let text = match value {
            None if self.optional => return Ok(None),
            None => return Err(FieldIssue::field(self.name, REQUIRED_MESSAGE)),
            Some(Value::String(text)) => text,
            Some(other) => {
                return Err(FieldIssue::field(
                    self.name,
                    format!("Expected string, received {}", json_type(other)),
                ));
            }
        };

        if self.optional && text.is_empty() {
            return Ok(None);
        }

        if self.constraint.accepts(text) {
            Ok(Some(text.clone()))
        } else {
            Err(FieldIssue::field(self.name, self.message))
        }
    }
}

/// An ordered set of fields describing one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Record kind, used in log output.
    pub kind: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldSpec],
}

/// Fields of a user waitlist candidate.
pub const USER_WAITLIST: Schema = Schema {
    kind: "user_waitlist",
    fields: &[
        FieldSpec::required("name", "Name", Constraint::MinLength(1), "Name is required"),
        FieldSpec::required(
            "contact",
            "Contact",
            Constraint::Email,
            "Please enter a valid email address",
        ),
        FieldSpec::required(
            "preferredPlan",
            "Preferred Plan",
            Constraint::OneOf(PreferredPlan::VALUES),
            "Please select a preferred plan",
        ),
        FieldSpec::required(
            "location",
            "Location",
            Constraint::MinLength(1),
            "Location is required",
        ),
        FieldSpec::required(
            "reason",
            "Why do you want to use this platform?",
            Constraint::MinLength(MIN_REASON_LEN),
            "Please provide at least 10 characters explaining why you want to use this platform",
        ),
    ],
};

/// Fields of a vendor waitlist candidate.
pub const VENDOR_WAITLIST: Schema = Schema {
    kind: "vendor_waitlist",
    fields: &[
        FieldSpec::required("name", "Name", Constraint::MinLength(1), "Name is required"),
        FieldSpec::required(
            "contact",
            "Contact",
            Constraint::Email,
            "Please enter a valid email address",
        ),
        FieldSpec::required(
            "role",
            "Role/Category",
            Constraint::OneOf(VendorRole::VALUES),
            "Please select a role",
        ),
        FieldSpec {
            name: "portfolioLink",
            label: "Portfolio Link (optional)",
            constraint: Constraint::Url,
            optional: true,
            message: "Please enter a valid URL",
        },
        FieldSpec::required(
            "experience",
            "Tell us about yourself and your experience",
            Constraint::MinLength(MIN_EXPERIENCE_LEN),
            "Please provide at least 20 characters about yourself and your experience",
        ),
        FieldSpec::required(
            "location",
            "Location",
            Constraint::MinLength(1),
            "Location is required",
        ),
    ],
};

impl Schema {
    /// Look up a field by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check every field of an untyped candidate.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` with one issue per violated field, or a
    /// single root issue when `input` is not a JSON object.
    pub fn check(&self, input: &Value) -> Result<CheckedFields, ValidationError> {
        let Value::Object(object) = input else {
            return Err(ValidationError::single(FieldIssue::root(format!(
                "Expected object, received {}",
                json_type(input)
            ))));
        };

        let mut values = HashMap::with_capacity(self.fields.len());
        let mut issues = Vec::new();

        for field in self.fields {
            match field.check(object.get(field.name)) {
                Ok(Some(text)) => {
                    values.insert(field.name, text);
                }
                Ok(None) => {}
                Err(issue) => issues.push(issue),
            }
        }

        match ValidationError::from_issues(issues) {
            Some(err) => Err(err),
            None => Ok(CheckedFields {
                schema: *self,
                values,
            }),
        }
    }
}

/// Field values that passed a schema check.
#[derive(Debug)]
pub struct CheckedFields {
    schema: Schema,
    values: HashMap<&'static str, String>,
}

impl CheckedFields {
    /// Take a required text value.
    fn text(&mut self, name: &str) -> String {
        self.values.remove(name).unwrap_or_default()
    }

    /// Take an optional value; `None` when not provided.
    fn optional(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Take an enumerated value.
    fn choice<T: FromStr>(&mut self, name: &str) -> Result<T, ValidationError> {
        let raw = self.text(name);
        raw.parse().map_err(|_| {
            let message = self.schema.field(name).map_or(REQUIRED_MESSAGE, |f| f.message);
            ValidationError::single(FieldIssue::field(name, message))
        })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Validators
// ============================================================================

/// Validate an untyped user waitlist candidate.
///
/// # Errors
///
/// Returns a `ValidationError` listing every violated field.
pub fn validate_user_waitlist(input: &Value) -> Result<NewUserWaitlistEntry, ValidationError> {
    let mut fields = USER_WAITLIST.check(input)?;

    Ok(NewUserWaitlistEntry {
        name: fields.text("name"),
        contact: fields.text("contact"),
        preferred_plan: fields.choice("preferredPlan")?,
        location: fields.text("location"),
        reason: fields.text("reason"),
    })
}

/// Validate an untyped vendor waitlist candidate.
///
/// An absent or empty `portfolioLink` is accepted as "no link".
///
/// # Errors
///
/// Returns a `ValidationError` listing every violated field.
pub fn validate_vendor_waitlist(input: &Value) -> Result<NewVendorWaitlistEntry, ValidationError> {
    let mut fields = VENDOR_WAITLIST.check(input)?;

    Ok(NewVendorWaitlistEntry {
        name: fields.text("name"),
        contact: fields.text("contact"),
        role: fields.choice("role")?,
        portfolio_link: fields.optional("portfolioLink"),
        experience: fields.text("experience"),
        location: fields.text("location"),
    })
}
