pub mod validators;

use derive_more::Display;
use serde_derive::{Deserialize, Serialize};

use crate::functional::js_text::js_trim;
use crate::functional::validation_rules::ValidationError;

/// One input of the contact form. `Display` gives the label used in feedback.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "Name")]
    Name,
    #[display(fmt = "Email")]
    Email,
    #[display(fmt = "Phone")]
    Phone,
    #[display(fmt = "Password")]
    Password,
    #[display(fmt = "Message")]
    Message,
}

impl Field {
    /// Fields checked on submit, in the order their errors are reported.
    pub const VALIDATED: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Password];

    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::Message,
    ];

    /// Whether submission trims this field before validating it.
    pub fn is_trimmed(self) -> bool {
        !matches!(self, Field::Password)
    }
}

/// Raw values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Copy of the form as read at submit time: every field trimmed except the password.
    pub fn trimmed(&self) -> ContactForm {
        let mut out = ContactForm::default();
        for field in Field::ALL {
            let value = self.value(field);
            let value = if field.is_trimmed() {
                js_trim(value)
            } else {
                value
            };
            out.set(field, value);
        }
        out
    }
}

/// Aggregate decision over the validated fields at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "errors", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(Vec<ValidationError>),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            SubmissionOutcome::Accepted => &[],
            SubmissionOutcome::Rejected(errors) => errors,
        }
    }

    /// Errors formatted as `"<FieldLabel>: <message>"`.
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }
}
