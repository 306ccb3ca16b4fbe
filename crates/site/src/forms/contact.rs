//! Contact form.

use std::sync::Arc;

use chrono::Utc;
use tracing::instrument;

use super::transport::{FormKind, Submission, SubmissionTransport};
use super::{Field, FormController, FormSettings};
use crate::db::InquiryRepository;
use crate::error::SubmitError;
use crate::models::Inquiry;
use crate::storage::Stores;
use crate::validation::{ValidationResult, validate_email, validate_message, validate_name};

const FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Subject, Field::Message];
const VALIDATED: &[Field] = &[Field::Name, Field::Email, Field::Message];

const SUCCESS_MESSAGE: &str = "Thanks for reaching out! We'll get back to you soon.";
const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

fn validate(form: &FormController, field: Field) -> ValidationResult {
    match field {
        Field::Name => validate_name(form.value(Field::Name)),
        Field::Email => validate_email(form.value(Field::Email)),
        Field::Message => validate_message(form.value(Field::Message)),
        _ => ValidationResult::ok(),
    }
}

/// The contact form. A valid submission is delivered, then appended to the
/// inquiries collection.
pub struct ContactForm {
    form: FormController,
    stores: Stores,
    transport: Arc<dyn SubmissionTransport>,
}

impl ContactForm {
    /// An empty contact form.
    #[must_use]
    pub fn new(
        stores: Stores,
        transport: Arc<dyn SubmissionTransport>,
        settings: &FormSettings,
    ) -> Self {
        Self {
            form: FormController::new(FIELDS, VALIDATED, validate, settings.banner_ttl),
            stores,
            transport,
        }
    }

    /// Field values, validity and lifecycle.
    #[must_use]
    pub const fn form(&self) -> &FormController {
        &self.form
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.input(field, value);
    }

    pub fn blur(&mut self, field: Field) -> ValidationResult {
        self.form.blur(field)
    }

    /// Whether the whole form is currently valid, without marking fields.
    #[must_use]
    pub fn validate_form(&self) -> bool {
        self.form.is_valid()
    }

    /// Validate, deliver and store the inquiry.
    ///
    /// Dropping the returned future before it completes stores nothing and
    /// leaves the form idle with its values intact.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Invalid` if any field fails validation, or
    /// `SubmitError::Transport` if delivery fails. Neither stores anything.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Inquiry, SubmitError> {
        let flight = self.form.begin_submit()?;
        let inquiry = {
            let form = flight.form();
            Inquiry::new(
                form.value(Field::Name),
                form.value(Field::Email),
                form.value(Field::Subject),
                form.value(Field::Message),
                Utc::now(),
            )
        };

        let delivered = match Submission::new(FormKind::Contact, &inquiry) {
            Ok(submission) => self.transport.deliver(&submission).await,
            Err(e) => Err(e),
        };
        if let Err(e) = delivered {
            tracing::error!(error = %e, "contact submission failed");
            flight.fail(FAILURE_MESSAGE);
            return Err(e.into());
        }

        InquiryRepository::new(self.stores.durable()).submit(inquiry.clone());
        flight.succeed(SUCCESS_MESSAGE, Utc::now());
        Ok(inquiry)
    }
}
