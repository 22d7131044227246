//! Live and submit-time feedback for the contact form.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use crate::functional::validation_rules::ValidationResult;
use crate::models::contact_form::validators::{evaluate_submission, validate_field};
use crate::models::contact_form::{ContactForm, Field, SubmissionOutcome};

pub const SUCCESS_INDICATOR: &str = "✓ Looks good!";
pub const FEEDBACK_ERROR_HEADER: &str = "Please fix these errors:";
pub const FEEDBACK_SUCCESS_HEADER: &str = "Success!";
pub const FEEDBACK_SUCCESS_BODY: &str =
    "Form submitted successfully! In a real application, this data would be sent to a server.";

/// Per-field indicator: at most one of the error and success elements is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum FieldIndicator {
    #[default]
    Hidden,
    Success,
    Error(String),
}

impl FieldIndicator {
    pub fn from_result(result: &ValidationResult<()>) -> Self {
        match result {
            Ok(()) => FieldIndicator::Success,
            Err(error) => FieldIndicator::Error(error.message.clone()),
        }
    }

    /// Visible text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldIndicator::Hidden => None,
            FieldIndicator::Success => Some(SUCCESS_INDICATOR),
            FieldIndicator::Error(message) => Some(message.as_str()),
        }
    }
}

/// The feedback box under the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "errors", rename_all = "lowercase")]
pub enum FormFeedback {
    #[default]
    Hidden,
    /// `"<FieldLabel>: <message>"` entries in declaration order.
    Errors(Vec<String>),
    Success,
}

impl FormFeedback {
    pub fn from_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted => FormFeedback::Success,
            SubmissionOutcome::Rejected(_) => FormFeedback::Errors(outcome.messages()),
        }
    }

    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            FormFeedback::Hidden => None,
            FormFeedback::Errors(_) => Some("form-feedback error"),
            FormFeedback::Success => Some("form-feedback success"),
        }
    }

    /// Markup placed inside the feedback box.
    pub fn to_html(&self) -> Option<String> {
        match self {
            FormFeedback::Hidden => None,
            FormFeedback::Errors(errors) => Some(format!(
                "<strong>{}</strong><br>{}",
                FEEDBACK_ERROR_HEADER,
                errors.iter().join("<br>")
            )),
            FormFeedback::Success => Some(format!(
                "<strong>{}</strong> {}",
                FEEDBACK_SUCCESS_HEADER, FEEDBACK_SUCCESS_BODY
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: ContactForm,
    indicators: BTreeMap<Field, FieldIndicator>,
    feedback: FormFeedback,
}

impl FormState {
    pub fn values(&self) -> &ContactForm {
        &self.values
    }

    pub fn indicator(&self, field: Field) -> FieldIndicator {
        self.indicators.get(&field).cloned().unwrap_or_default()
    }

    pub fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    /// Record a keystroke and refresh the field's indicator from its raw value.
    ///
    /// The message field has no live feedback.
    pub fn key_up(&mut self, field: Field, value: String) -> FieldIndicator {
        if field != Field::Message {
            let indicator = FieldIndicator::from_result(&validate_field(field, &value));
            self.indicators.insert(field, indicator);
        }
        self.values.set(field, value);
        self.indicator(field)
    }

    /// Judge the current values and show the outcome in the feedback box.
    pub fn submit(&mut self) -> SubmissionOutcome {
        let outcome = evaluate_submission(&self.values);
        self.feedback = FormFeedback::from_outcome(&outcome);
        outcome
    }

    /// Clear every value, indicator and the feedback box.
    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}
