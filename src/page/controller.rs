use std::collections::BTreeMap;
use std::time::Duration;

use serde_derive::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::models::contact_form::Field;
use crate::page::counter::Counter;
use crate::page::faq::FaqPanels;
use crate::page::form::{FieldIndicator, FormFeedback, FormState};
use crate::page::tabs::Tabs;
use crate::page::theme::Theme;
use crate::page::{Effect, PageEvent};

/// Owns the state of every widget on the page.
#[derive(Debug, Clone)]
pub struct PageController {
    theme: Theme,
    counter: Counter,
    faq: FaqPanels,
    tabs: Tabs,
    form: FormState,
    reset_delay: Duration,
}

/// Everything a renderer needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub theme: Theme,
    pub theme_button: String,
    pub counter: i64,
    pub counter_message: String,
    pub open_faqs: Vec<String>,
    pub active_tab: Option<String>,
    pub indicators: BTreeMap<Field, FieldIndicator>,
    pub feedback: FormFeedback,
}

impl PageController {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            theme: Theme::default(),
            counter: Counter::default(),
            faq: FaqPanels::new(config.faq_ids.iter().cloned()),
            tabs: Tabs::new(config.tabs.iter().cloned()),
            form: FormState::default(),
            reset_delay: config.reset_delay,
        }
    }

    /// Apply one event. On error the state is left unchanged.
    pub fn dispatch(&mut self, event: PageEvent) -> Result<Vec<Effect>, PageError> {
        tracing::trace!(?event, "dispatching page event");

        match event {
            PageEvent::ToggleTheme => self.theme = self.theme.toggled(),
            PageEvent::Increment => self.counter.increment(),
            PageEvent::Decrement => self.counter.decrement(),
            PageEvent::ResetCounter => self.counter.reset(),
            PageEvent::ToggleFaq { id } => {
                self.faq.toggle(&id)?;
            }
            PageEvent::SelectTab { id } => self.tabs.select(&id)?,
            PageEvent::KeyUp { field, value } => {
                self.form.key_up(field, value);
            }
            PageEvent::Submit => {
                if self.form.submit().is_accepted() {
                    tracing::info!(delay = ?self.reset_delay, "form accepted, reset scheduled");
                    return Ok(vec![Effect::ScheduleReset(self.reset_delay)]);
                }
            }
            PageEvent::ResetForm => self.form.reset(),
        }

        Ok(Vec::new())
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn faq(&self) -> &FaqPanels {
        &self.faq
    }

    pub fn tabs(&self) -> &Tabs {
        &self.tabs
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            theme: self.theme,
            theme_button: self.theme.button_label().to_string(),
            counter: self.counter.value(),
            counter_message: self.counter.message().to_string(),
            open_faqs: self.faq.open_ids(),
            active_tab: self.tabs.active().map(str::to_string),
            indicators: Field::ALL
                .into_iter()
                .map(|field| (field, self.form.indicator(field)))
                .filter(|(_, indicator)| *indicator != FieldIndicator::Hidden)
                .collect(),
            feedback: self.form.feedback().clone(),
        }
    }
}

impl PageSnapshot {
    /// Serialize for a renderer living outside the process, such as a browser page.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}
