//! Registration form.
//!
//! Registering signs the visitor in: the username and email are written to
//! the ephemeral session slot and the visitor is sent to the dashboard. The
//! password is checked and then forgotten. It is never delivered or stored.

use std::sync::Arc;

use chrono::Utc;
use tracing::instrument;

use code_brew_core::Email;

use super::transport::{FormKind, Submission, SubmissionTransport};
use super::{Field, FormController, FormSettings, Redirect};
use crate::db::SessionStore;
use crate::error::SubmitError;
use crate::models::UserSession;
use crate::models::session::pages;
use crate::storage::Stores;
use crate::validation::{
    PasswordCheck, ValidationResult, validate_confirm_password, validate_email, validate_password,
    validate_terms, validate_username,
};

const FIELDS: &[Field] = &[
    Field::Username,
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
    Field::Terms,
];

const SUCCESS_MESSAGE: &str = "Account created! Taking you to your dashboard.";
const FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

fn validate(form: &FormController, field: Field) -> ValidationResult {
    match field {
        Field::Username => validate_username(form.value(Field::Username)),
        Field::Email => validate_email(form.value(Field::Email)),
        Field::Password => validate_password(form.value(Field::Password)).result,
        Field::ConfirmPassword => validate_confirm_password(
            form.value(Field::ConfirmPassword),
            form.value(Field::Password),
        ),
        Field::Terms => validate_terms(form.is_checked(Field::Terms)),
        _ => ValidationResult::ok(),
    }
}

/// A completed registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// The signed-in identity.
    pub session: UserSession,
    /// `false` if the session write was dropped; the dashboard will then
    /// send the visitor back to registration.
    pub session_stored: bool,
    /// Where to send the visitor.
    pub redirect: Redirect,
}

/// The registration form.
pub struct RegistrationForm {
    form: FormController,
    stores: Stores,
    transport: Arc<dyn SubmissionTransport>,
}

impl RegistrationForm {
    #[must_use]
    pub fn new(
        stores: Stores,
        transport: Arc<dyn SubmissionTransport>,
        settings: &FormSettings,
    ) -> Self {
        Self {
            form: FormController::new(FIELDS, FIELDS, validate, settings.banner_ttl),
            stores,
            transport,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &FormController {
        &self.form
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.input(field, value);
    }

    /// Tick or untick the terms checkbox.
    pub fn accept_terms(&mut self, accepted: bool) {
        self.form.set_checked(Field::Terms, accepted);
    }

    pub fn blur(&mut self, field: Field) -> ValidationResult {
        self.form.blur(field)
    }

    /// Live requirement checklist and strength meter for the current
    /// password.
    #[must_use]
    pub fn password_feedback(&self) -> PasswordCheck {
        validate_password(self.form.value(Field::Password))
    }

    #[must_use]
    pub fn validate_form(&self) -> bool {
        self.form.is_valid()
    }

    /// Validate, deliver the identity, and start a session.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Invalid` if any field fails validation, or
    /// `SubmitError::Transport` if delivery fails. Neither starts a session.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Registration, SubmitError> {
        let flight = self.form.begin_submit()?;
        let username = flight.form().value(Field::Username).trim().to_string();
        let parsed = Email::parse(flight.form().value(Field::Email).trim());
        let email = match parsed {
            Ok(email) => email,
            Err(e) => {
                tracing::debug!(error = %e, "validated email failed to parse");
                flight.fail(FAILURE_MESSAGE);
                return Err(SubmitError::Invalid(vec![Field::Email]));
            }
        };
        let session = UserSession { username, email };

        let delivered = match Submission::new(FormKind::Registration, &session) {
            Ok(submission) => self.transport.deliver(&submission).await,
            Err(e) => Err(e),
        };
        if let Err(e) = delivered {
            tracing::error!(error = %e, "registration failed");
            flight.fail(FAILURE_MESSAGE);
            return Err(e.into());
        }

        let session_stored = SessionStore::new(self.stores.ephemeral()).sign_in(&session);
        if !session_stored {
            tracing::warn!(username = %session.username, "session not stored after registration");
        }
        flight.succeed(SUCCESS_MESSAGE, Utc::now());
        Ok(Registration {
            session,
            session_stored,
            redirect: Redirect {
                to: pages::DASHBOARD,
            },
        })
    }
}
