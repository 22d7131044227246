//! Headless page controller
//!
//! Every user interaction is a [`PageEvent`] value. The [`PageController`]
//! owns all widget state, applies events one at a time and returns any
//! [`Effect`]s that must happen later. The [`runtime`] drives a controller
//! on a tokio task and publishes a [`PageSnapshot`] after every event.

pub mod broadcaster;
pub mod controller;
pub mod counter;
pub mod faq;
pub mod form;
pub mod runtime;
pub mod tabs;
pub mod theme;

use std::time::Duration;

use serde_derive::{Deserialize, Serialize};

use crate::models::contact_form::Field;

pub use broadcaster::RenderBroadcaster;
pub use controller::{PageController, PageSnapshot};
pub use runtime::{spawn_page, PageHandle};

/// A fully described user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    ToggleTheme,
    Increment,
    Decrement,
    ResetCounter,
    ToggleFaq { id: String },
    SelectTab { id: String },
    /// A keystroke in a form field, carrying the field's full current value.
    KeyUp { field: Field, value: String },
    Submit,
    /// Clear the form after an accepted submission.
    ResetForm,
}

/// Work the controller asks its driver to perform later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver [`PageEvent::ResetForm`] after the given delay.
    ScheduleReset(Duration),
}
