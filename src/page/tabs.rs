use serde_derive::{Deserialize, Serialize};

use crate::error::PageError;

/// Mutually exclusive tabs: exactly one is active whenever any exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tabs {
    ids: Vec<String>,
    active: usize,
}

impl Tabs {
    /// The first tab starts active.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    pub fn select(&mut self, id: &str) -> Result<(), PageError> {
        let index = self
            .ids
            .iter()
            .position(|candidate| candidate == id)
            .ok_or_else(|| PageError::UnknownTab(id.to_string()))?;
        self.active = index;
        Ok(())
    }

    pub fn active(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
