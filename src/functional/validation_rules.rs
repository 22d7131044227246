//! Composable Validation Rules
//!
//! Small, pure rules over string input. Each rule inspects one value and
//! either accepts it or returns a [`ValidationError`] carrying a fixed,
//! user-facing message. Rules are combined per field by
//! [`FieldValidator`](crate::functional::validation_engine::FieldValidator).

use std::fmt;

use regex::{Regex, RegexSet};
use serde_derive::{Deserialize, Serialize};

use crate::functional::js_text::{js_lines, utf16_len};
use crate::models::contact_form::Field;

/// Validation result type for composable validation chains
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A failed check on one field.
///
/// Displays as `"<FieldLabel>: <message>"`, the form used in submission feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    /// Creates a ValidationError with the provided field, error code, and message.
    ///
    /// # Examples
    ///
    /// ```
    /// let err = ValidationError::new(Field::Email, "INVALID_EMAIL", "Please enter a valid email address");
    /// assert_eq!(err.to_string(), "Email: Please enter a valid email address");
    /// ```
    pub fn new(field: Field, code: &str, message: &str) -> Self {
        Self {
            field,
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Core validation rule trait for composable validation
pub trait ValidationRule {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()>;
}

impl<R: ValidationRule + ?Sized> ValidationRule for Box<R> {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        (**self).validate(value, field)
    }
}

/// Minimum length, measured in UTF-16 code units like a browser input.
pub struct MinLength {
    pub min: usize,
    pub message: &'static str,
}

impl ValidationRule for MinLength {
    /// Fails with code `TOO_SHORT` when `value` is shorter than `min`.
    ///
    /// # Examples
    ///
    /// ```
    /// let rule = MinLength { min: 2, message: "too short" };
    /// assert!(rule.validate("ab", Field::Name).is_ok());
    /// assert_eq!(rule.validate("a", Field::Name).unwrap_err().code, "TOO_SHORT");
    /// ```
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        if utf16_len(value) < self.min {
            return Err(ValidationError::new(field, "TOO_SHORT", self.message));
        }
        Ok(())
    }
}

/// Whole-value pattern check.
pub struct Matches {
    pub pattern: Regex,
    pub code: &'static str,
    pub message: &'static str,
}

impl ValidationRule for Matches {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        if !self.pattern.is_match(value) {
            return Err(ValidationError::new(field, self.code, self.message));
        }
        Ok(())
    }
}

/// Requires every pattern of `classes` to match somewhere inside a single line.
///
/// This is the behavior of a chain of `(?=.*x)` lookaheads: they share one
/// starting position and `.` never crosses a line terminator, so all classes
/// must be found on the same line, in any order.
pub struct ContainsEachOnOneLine {
    pub classes: RegexSet,
    pub code: &'static str,
    pub message: &'static str,
}

impl ValidationRule for ContainsEachOnOneLine {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        let satisfied = js_lines(value).any(|line| self.classes.matches(line).matched_all());
        if !satisfied {
            return Err(ValidationError::new(field, self.code, self.message));
        }
        Ok(())
    }
}

/// Removes every match of `strip` before handing the value to the inner rule.
pub struct Stripped<R> {
    pub strip: Regex,
    pub rule: R,
}

impl<R: ValidationRule> ValidationRule for Stripped<R> {
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        let cleaned = self.strip.replace_all(value, "");
        self.rule.validate(&cleaned, field)
    }
}

/// Applies `rule` only when `condition` holds for the value.
pub struct WhenValidator<C, R> {
    condition: C,
    rule: R,
}

impl<C, R> ValidationRule for WhenValidator<C, R>
where
    C: Fn(&str) -> bool,
    R: ValidationRule,
{
    fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
        if (self.condition)(value) {
            self.rule.validate(value, field)
        } else {
            Ok(()) // Skip validation if condition not met
        }
    }
}

pub fn when<C, R>(condition: C, rule: R) -> WhenValidator<C, R>
where
    C: Fn(&str) -> bool,
    R: ValidationRule,
{
    WhenValidator { condition, rule }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FailingRule;

    impl ValidationRule for FailingRule {
        fn validate(&self, _value: &str, field: Field) -> ValidationResult<()> {
            Err(ValidationError::new(field, "INNER_RULE_FAILED", "failed"))
        }
    }

    struct SpyRule {
        called: Rc<Cell<bool>>,
    }

    impl ValidationRule for SpyRule {
        fn validate(&self, value: &str, field: Field) -> ValidationResult<()> {
            self.called.set(true);
            FailingRule.validate(value, field)
        }
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        let rule = MinLength {
            min: 2,
            message: "too short",
        };
        assert!(rule.validate("ab", Field::Name).is_ok());
        // a single astral character is two code units
        assert!(rule.validate("\u{1F600}", Field::Name).is_ok());
        let err = rule.validate("é", Field::Name).unwrap_err();
        assert_eq!(err.code, "TOO_SHORT");
        assert_eq!(err.message, "too short");
        assert_eq!(err.field, Field::Name);
    }

    #[test]
    fn test_matches_reports_configured_code() {
        let rule = Matches {
            pattern: Regex::new(r"^[0-9]+$").unwrap(),
            code: "DIGITS",
            message: "digits only",
        };
        assert!(rule.validate("123", Field::Phone).is_ok());
        let err = rule.validate("12a", Field::Phone).unwrap_err();
        assert_eq!(err.code, "DIGITS");
        assert_eq!(err.to_string(), "Phone: digits only");
    }

    #[test]
    fn test_contains_each_requires_single_line() {
        let rule = ContainsEachOnOneLine {
            classes: RegexSet::new([r"[a-z]", r"[0-9]"]).unwrap(),
            code: "MISSING",
            message: "need both",
        };
        assert!(rule.validate("9a", Field::Password).is_ok());
        assert!(rule.validate("x\n1a", Field::Password).is_ok());
        assert!(rule.validate("a\n1", Field::Password).is_err());
        assert!(rule.validate("", Field::Password).is_err());
    }

    #[test]
    fn test_stripped_cleans_before_inner_rule() {
        let rule = Stripped {
            strip: Regex::new(r"-").unwrap(),
            rule: Matches {
                pattern: Regex::new(r"^[0-9]{3}$").unwrap(),
                code: "X",
                message: "x",
            },
        };
        assert!(rule.validate("1-2-3", Field::Phone).is_ok());
        assert!(rule.validate("1-2-3-4", Field::Phone).is_err());
    }

    #[test]
    fn when_validator_skips_rule_when_condition_false() {
        let called = Rc::new(Cell::new(false));
        let validator = when(
            |v: &str| !v.is_empty(),
            SpyRule {
                called: Rc::clone(&called),
            },
        );

        assert!(validator.validate("", Field::Phone).is_ok());
        assert!(!called.get());

        let error = validator
            .validate("x", Field::Phone)
            .expect_err("expected inner rule failure");
        assert!(called.get());
        assert_eq!(error.code, "INNER_RULE_FAILED");
    }
}
