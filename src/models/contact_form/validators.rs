use once_cell::sync::{Lazy, OnceCell};
use regex::{Regex, RegexSet};

use crate::{
    functional::{
        js_text::WHITESPACE_CLASS,
        validation_engine::{FieldValidator, ValidationEngine},
        validation_rules::{
            when, ContainsEachOnOneLine, Matches, MinLength, Stripped, ValidationResult,
        },
    },
    models::contact_form::{ContactForm, Field, SubmissionOutcome},
};

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const NAME_INVALID_CHARACTERS: &str = "Name can only contain letters and spaces";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const PASSWORD_MISSING_CLASSES: &str = "Password must contain uppercase, lowercase, and number";

/// Cached regex patterns for validation
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^[a-zA-Z{}]+$", WHITESPACE_CLASS)).unwrap());
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!(r"[^{}@]+", WHITESPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});
static PHONE_FORMATTING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"[{}\-()]", WHITESPACE_CLASS)).unwrap());
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());
static PASSWORD_CLASSES: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new([r"[a-z]", r"[A-Z]", r"[0-9]"]).unwrap());

/// Name: at least two characters, then ASCII letters and whitespace only.
pub fn name_validator() -> FieldValidator {
    FieldValidator::new(Field::Name)
        .rule(MinLength {
            min: 2,
            message: NAME_TOO_SHORT,
        })
        .rule(Matches {
            pattern: NAME_REGEX.clone(),
            code: "INVALID_CHARACTERS",
            message: NAME_INVALID_CHARACTERS,
        })
}

pub fn email_validator() -> FieldValidator {
    FieldValidator::new(Field::Email).rule(Matches {
        pattern: EMAIL_REGEX.clone(),
        code: "INVALID_EMAIL",
        message: EMAIL_INVALID,
    })
}

/// Phone is optional; a provided number is checked with its formatting removed.
pub fn phone_validator() -> FieldValidator {
    FieldValidator::new(Field::Phone).rule(when(
        |value: &str| !value.is_empty(),
        Stripped {
            strip: PHONE_FORMATTING_REGEX.clone(),
            rule: Matches {
                pattern: PHONE_REGEX.clone(),
                code: "INVALID_PHONE",
                message: PHONE_INVALID,
            },
        },
    ))
}

pub fn password_validator() -> FieldValidator {
    FieldValidator::new(Field::Password)
        .rule(MinLength {
            min: 8,
            message: PASSWORD_TOO_SHORT,
        })
        .rule(ContainsEachOnOneLine {
            classes: PASSWORD_CLASSES.clone(),
            code: "MISSING_CHARACTER_CLASSES",
            message: PASSWORD_MISSING_CLASSES,
        })
}

/// Validators for every checked field, in reporting order.
pub fn contact_form_engine() -> ValidationEngine {
    ValidationEngine::new()
        .with(name_validator())
        .with(email_validator())
        .with(phone_validator())
        .with(password_validator())
}

fn engine() -> &'static ValidationEngine {
    static CONTACT_FORM_ENGINE: OnceCell<ValidationEngine> = OnceCell::new();
    CONTACT_FORM_ENGINE.get_or_init(contact_form_engine)
}

/// Validate one field's current value as typed, without trimming.
///
/// `Field::Message` is never validated.
pub fn validate_field(field: Field, value: &str) -> ValidationResult<()> {
    match engine().validator(field) {
        Some(validator) => validator.validate(value),
        None => Ok(()),
    }
}

pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_field(Field::Name, name)
}

pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_field(Field::Email, email)
}

pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_field(Field::Phone, phone)
}

pub fn validate_password(password: &str) -> ValidationResult<()> {
    validate_field(Field::Password, password)
}

/// Decide whether `form` may be submitted.
///
/// Name, email, phone and message are trimmed first; the password is
/// validated exactly as entered. Every field is checked and all failures are
/// returned in declaration order.
pub fn evaluate_submission(form: &ContactForm) -> SubmissionOutcome {
    let form = form.trimmed();
    let errors = engine().collect_errors(|field| form.value(field));

    if errors.is_empty() {
        tracing::debug!("contact form accepted");
        SubmissionOutcome::Accepted
    } else {
        tracing::debug!(error_count = errors.len(), "contact form rejected");
        SubmissionOutcome::Rejected(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(result: ValidationResult<()>) -> String {
        result.expect_err("expected invalid").message
    }

    #[test]
    fn name_length_is_checked_before_characters() {
        assert_eq!(message_of(validate_name("")), NAME_TOO_SHORT);
        assert_eq!(message_of(validate_name("1")), NAME_TOO_SHORT);
        assert_eq!(message_of(validate_name("J1")), NAME_INVALID_CHARACTERS);
        assert!(validate_name("Jo").is_ok());
        assert!(validate_name("Mary Ann\tSmith").is_ok());
    }

    #[test]
    fn name_rejects_non_ascii_letters() {
        assert_eq!(message_of(validate_name("José")), NAME_INVALID_CHARACTERS);
        assert_eq!(message_of(validate_name("O'Brien")), NAME_INVALID_CHARACTERS);
        // browser whitespace is allowed, NEL is not whitespace there
        assert!(validate_name("Ann\u{00A0}Lee").is_ok());
        assert!(validate_name("Ann\u{0085}Lee").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("a@b.c.d").is_ok());
        assert!(validate_email("first.last@sub.example.co").is_ok());
        assert_eq!(message_of(validate_email("user@@example.com")), EMAIL_INVALID);
        assert!(validate_email("userexample.com").is_err());
        assert!(validate_email("user@example").is_err());
        assert!(validate_email("user@example.").is_err());
        assert!(validate_email("us er@example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn phone_is_optional_and_cleaned() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("5").is_ok());
        assert!(validate_phone("1234567890123456").is_ok());
        assert_eq!(message_of(validate_phone("12345678901234567")), PHONE_INVALID);
        assert!(validate_phone("0123").is_err());
        assert!(validate_phone("+0123").is_err());
        assert!(validate_phone("++123").is_err());
        assert!(validate_phone("555.123.4567").is_err());
        // only formatting characters: cleans to empty, which is not a number
        assert!(validate_phone(" ").is_err());
        assert!(validate_phone("()-").is_err());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("Abc12345").is_ok());
        assert!(validate_password("12345abC").is_ok());
        assert_eq!(message_of(validate_password("Ab1")), PASSWORD_TOO_SHORT);
        assert_eq!(
            message_of(validate_password("abc12345")),
            PASSWORD_MISSING_CLASSES
        );
        assert!(validate_password("Abcdefgh").is_err());
        assert!(validate_password("ABC12345").is_err());
    }

    #[test]
    fn password_classes_must_share_a_line() {
        assert!(validate_password("Abcdefgh\n1").is_err());
        assert!(validate_password("xxxxxxxx\nAb1").is_ok());
    }

    #[test]
    fn password_length_counts_utf16_units() {
        // 6 code units from ASCII plus 2 from one emoji
        assert!(validate_password("Ab1cde\u{1F600}").is_ok());
    }

    #[test]
    fn message_is_never_validated() {
        assert!(validate_field(Field::Message, "").is_ok());
        assert!(validate_field(Field::Message, "@@@ 123 !!!").is_ok());
    }

    #[test]
    fn submission_trims_all_but_password() {
        let form = ContactForm {
            name: "  Jane Doe  ".into(),
            email: " jane@doe.com ".into(),
            phone: "   ".into(),
            password: "Secret123".into(),
            message: String::new(),
        };
        assert_eq!(evaluate_submission(&form), SubmissionOutcome::Accepted);

        let padded_password = ContactForm {
            password: " Secret1".into(),
            ..form
        };
        // " Secret1" is 8 units only because the space is kept
        assert_eq!(
            evaluate_submission(&padded_password),
            SubmissionOutcome::Accepted
        );
    }

    #[test]
    fn submission_collects_every_failure_in_order() {
        let form = ContactForm {
            name: "J".into(),
            email: "nope".into(),
            phone: "0123".into(),
            password: "short".into(),
            message: "hello".into(),
        };
        let outcome = evaluate_submission(&form);
        assert_eq!(
            outcome.messages(),
            vec![
                format!("Name: {}", NAME_TOO_SHORT),
                format!("Email: {}", EMAIL_INVALID),
                format!("Phone: {}", PHONE_INVALID),
                format!("Password: {}", PASSWORD_TOO_SHORT),
            ]
        );
    }
}
