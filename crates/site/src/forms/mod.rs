//! Form controllers.
//!
//! A [`FormController`] holds field values and per-field validity for one
//! form and drives the submission lifecycle:
//!
//! ```text
//! Idle → Validating → Invalid ─────────────────────→ Idle (on next input)
//!                   → Submitting → Persisted ──────→ Idle (banner expires)
//!                        └─ transport fails/dropped → Idle (nothing stored)
//! ```
//!
//! Concrete forms ([`ContactForm`], [`RegistrationForm`],
//! [`FavoritesDashboard`]) supply the field list, the validator, and what
//! "persist" means.

pub mod contact;
pub mod favorites;
pub mod register;
pub mod transport;

pub use contact::ContactForm;
pub use favorites::{EditorMode, FavoritesDashboard, SavedFavorite};
pub use register::{Registration, RegistrationForm};
pub use transport::{FormKind, SimulatedTransport, Submission, SubmissionTransport};

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::SubmitError;
use crate::validation::ValidationResult;

/// Default simulated submission latency.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);
/// Default lifetime of a success banner.
pub const DEFAULT_BANNER_TTL: Duration = Duration::from_millis(5000);

/// Banner shown when a submit is rejected by validation.
const INVALID_BANNER: &str = "Please fix the highlighted fields and try again.";

/// Value stored for a ticked checkbox.
const CHECKED: &str = "on";

/// Every input the site's forms use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Username,
    Password,
    ConfirmPassword,
    Terms,
    DrinkName,
    DrinkSize,
    Customization,
    Notes,
}

/// Visual state of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    /// Not yet validated, or cleared by typing.
    #[default]
    Pristine,
    Valid,
    Invalid,
}

/// Value and validity of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
    /// Error message while `status` is `Invalid`.
    pub message: Option<String>,
}

/// Where a form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Persisted,
}

/// Tone of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// A form-level message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    /// When the banner disappears; `None` keeps it until replaced.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Banner {
    /// A success banner that disappears `ttl` after `now`.
    #[must_use]
    pub fn success(message: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            expires_at: TimeDelta::from_std(ttl)
                .ok()
                .and_then(|ttl| now.checked_add_signed(ttl)),
        }
    }

    /// An error banner that stays until replaced.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            expires_at: None,
        }
    }

    /// Whether the banner is still showing at `now`.
    #[must_use]
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// Where the visitor should be sent next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
}

/// Timing knobs shared by every form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    /// Delay of the simulated submission transport.
    pub submit_latency: Duration,
    /// How long success banners stay up.
    pub banner_ttl: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submit_latency: DEFAULT_SUBMIT_LATENCY,
            banner_ttl: DEFAULT_BANNER_TTL,
        }
    }
}

/// Validates one field of a form, reading sibling values as needed.
pub type FieldValidator = fn(&FormController, Field) -> ValidationResult;

/// Field values, validity and lifecycle of one form.
#[derive(Debug, Clone)]
pub struct FormController {
    fields: BTreeMap<Field, FieldState>,
    validated: &'static [Field],
    validator: FieldValidator,
    phase: FormPhase,
    banner: Option<Banner>,
    banner_ttl: Duration,
}

impl FormController {
    /// Create a form with `fields`, of which `validated` are checked on submit.
    #[must_use]
    pub fn new(
        fields: &[Field],
        validated: &'static [Field],
        validator: FieldValidator,
        banner_ttl: Duration,
    ) -> Self {
        Self {
            fields: fields.iter().map(|f| (*f, FieldState::default())).collect(),
            validated,
            validator,
            phase: FormPhase::Idle,
            banner: None,
            banner_ttl,
        }
    }

    /// Current value of `field`; empty for unknown fields.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.fields.get(&field).map_or("", |s| s.value.as_str())
    }

    /// Whether a checkbox field is ticked.
    #[must_use]
    pub fn is_checked(&self, field: Field) -> bool {
        self.value(field) == CHECKED
    }

    /// State of `field`, if the form has it.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    /// Record typing in `field`.
    ///
    /// If the field is marked invalid, the marker and message are cleared
    /// without re-validating. An `Invalid` form returns to `Idle`.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        let Some(state) = self.fields.get_mut(&field) else {
            tracing::debug!(?field, "input ignored for unknown field");
            return;
        };
        state.value = value.into();
        if state.status == FieldStatus::Invalid {
            state.status = FieldStatus::Pristine;
            state.message = None;
        }
        if self.phase == FormPhase::Invalid {
            self.phase = FormPhase::Idle;
        }
    }

    /// Tick or untick a checkbox field.
    pub fn set_checked(&mut self, field: Field, checked: bool) {
        self.input(field, if checked { CHECKED } else { "" });
    }

    /// Validate only `field`, as when it loses focus.
    pub fn blur(&mut self, field: Field) -> ValidationResult {
        if !self.validated.contains(&field) {
            return ValidationResult::ok();
        }
        let result = (self.validator)(self, field);
        self.mark(field, &result);
        result
    }

    /// Whether every validated field currently passes. Changes nothing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validated
            .iter()
            .all(|field| (self.validator)(self, *field).valid)
    }

    /// Validate every field, mark each, and return the ones that failed.
    pub fn validate_all(&mut self) -> Vec<Field> {
        let mut invalid = Vec::new();
        for field in self.validated {
            let result = (self.validator)(self, *field);
            if !result.valid {
                invalid.push(*field);
            }
            self.mark(*field, &result);
        }
        invalid
    }

    /// Current lifecycle phase as stored.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Lifecycle phase at `now`. A persisted form reads as idle once its
    /// success banner has expired.
    #[must_use]
    pub fn phase_at(&self, now: DateTime<Utc>) -> FormPhase {
        if self.phase == FormPhase::Persisted && self.banner_at(now).is_none() {
            FormPhase::Idle
        } else {
            self.phase
        }
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.phase != FormPhase::Submitting
    }

    /// The banner showing at `now`, if any.
    #[must_use]
    pub fn banner_at(&self, now: DateTime<Utc>) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.is_visible_at(now))
    }

    /// The banner showing right now, if any.
    #[must_use]
    pub fn banner(&self) -> Option<&Banner> {
        self.banner_at(Utc::now())
    }

    /// Replace the banner.
    pub fn show_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    /// A success banner using this form's lifetime.
    #[must_use]
    pub fn success_banner(&self, message: &str, now: DateTime<Utc>) -> Banner {
        Banner::success(message, now, self.banner_ttl)
    }

    /// Clear every value and marker.
    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            *state = FieldState::default();
        }
    }

    /// Fill fields with values, all pristine, as when editing a record.
    pub fn load(&mut self, values: &[(Field, &str)]) {
        self.reset();
        for (field, value) in values {
            if let Some(state) = self.fields.get_mut(field) {
                state.value = (*value).to_string();
            }
        }
    }

    /// Validate the whole form and, if it passes, enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Invalid` with the failing fields. The form is
    /// then `Invalid` and shows an error banner.
    pub fn begin_submit(&mut self) -> Result<InFlight<'_>, SubmitError> {
        self.phase = FormPhase::Validating;
        let invalid = self.validate_all();
        if !invalid.is_empty() {
            tracing::debug!(?invalid, "submit rejected by validation");
            self.phase = FormPhase::Invalid;
            self.banner = Some(Banner::error(INVALID_BANNER));
            return Err(SubmitError::Invalid(invalid));
        }
        self.phase = FormPhase::Submitting;
        self.banner = None;
        Ok(InFlight {
            form: self,
            settled: false,
        })
    }

    fn mark(&mut self, field: Field, result: &ValidationResult) {
        if let Some(state) = self.fields.get_mut(&field) {
            if result.valid {
                state.status = FieldStatus::Valid;
                state.message = None;
            } else {
                state.status = FieldStatus::Invalid;
                state.message = Some(result.message.clone());
            }
        }
    }
}

/// A submission between validation and persistence.
///
/// Holding it keeps the form in `Submitting`. Settle it with
/// [`InFlight::succeed`] or [`InFlight::fail`]; dropping it unsettled (the
/// submitting future was cancelled) returns the form to `Idle` with nothing
/// stored.
#[derive(Debug)]
pub struct InFlight<'a> {
    form: &'a mut FormController,
    settled: bool,
}

impl InFlight<'_> {
    /// The form being submitted.
    #[must_use]
    pub fn form(&self) -> &FormController {
        self.form
    }

    /// The record was persisted: reset fields and show a success banner.
    pub fn succeed(mut self, message: &str, now: DateTime<Utc>) {
        self.settled = true;
        self.form.reset();
        self.form.phase = FormPhase::Persisted;
        self.form.banner = Some(self.form.success_banner(message, now));
    }

    /// Delivery failed: keep the values, show an error banner.
    pub fn fail(mut self, message: &str) {
        self.settled = true;
        self.form.phase = FormPhase::Idle;
        self.form.banner = Some(Banner::error(message));
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("submission abandoned before it settled, nothing stored");
            self.form.phase = FormPhase::Idle;
        }
    }
}
