//! Iterator-Based Validation Engine
//!
//! A [`FieldValidator`] runs its rules in order and stops at the first
//! failure, so rule order decides which message a field reports. A
//! [`ValidationEngine`] runs one validator per field and keeps every
//! field's failure, so one bad field never hides another.

use std::fmt;

use crate::functional::validation_rules::{ValidationError, ValidationResult, ValidationRule};
use crate::models::contact_form::Field;

type BoxedRule = Box<dyn ValidationRule + Send + Sync>;

/// Ordered rules for a single field.
pub struct FieldValidator {
    field: Field,
    rules: Vec<BoxedRule>,
}

impl FieldValidator {
    /// Create a validator for `field` with no rules; it accepts everything.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Add a validation rule, evaluated after all previously added ones.
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Validate `value`, reporting the first rule that fails.
    pub fn validate(&self, value: &str) -> ValidationResult<()> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.validate(value, self.field))
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("field", &self.field)
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Runs a set of field validators and aggregates their errors.
#[derive(Debug, Default)]
pub struct ValidationEngine {
    validators: Vec<FieldValidator>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the validator for one field. Fields are reported in registration order.
    pub fn with(mut self, validator: FieldValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Look up the validator registered for `field`.
    pub fn validator(&self, field: Field) -> Option<&FieldValidator> {
        self.validators.iter().find(|v| v.field() == field)
    }

    /// Validate every registered field and collect the failures.
    ///
    /// `value_of` supplies the current value for a field. The returned errors
    /// follow registration order, at most one per field.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// let engine = ValidationEngine::new().with(FieldValidator::new(Field::Name));
    /// let errors = engine.collect_errors(|_| "Jane");
    /// assert!(errors.is_empty());
    /// ```
    pub fn collect_errors<'a, F>(&self, value_of: F) -> Vec<ValidationError>
    where
        F: Fn(Field) -> &'a str,
    {
        self.validators
            .iter()
            .filter_map(|validator| validator.validate(value_of(validator.field())).err())
            .collect()
    }
}
