//! Headless page behavior for a static contact page.
//!
//! The [`models::contact_form`] validators decide whether each field of the
//! contact form is acceptable and whether the form may be submitted. The
//! [`page`] module models the surrounding widgets (theme, counter, FAQ,
//! tabs, form feedback) as owned state driven by discrete events.

pub mod config;
pub mod error;
pub mod functional;
pub mod models;
pub mod page;
pub mod utils;

pub use config::PageConfig;
pub use error::{ConfigError, PageError};
pub use models::contact_form::validators::{
    evaluate_submission, validate_email, validate_field, validate_name, validate_password,
    validate_phone,
};
pub use models::contact_form::{ContactForm, Field, SubmissionOutcome};
