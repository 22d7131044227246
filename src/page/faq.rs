use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};

use crate::error::PageError;

/// State of one collapsible panel. The answer and the icon always move together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPanel {
    pub answer_visible: bool,
    pub icon_rotated: bool,
}

/// Independent collapsible FAQ panels keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPanels {
    panels: BTreeMap<String, FaqPanel>,
}

impl FaqPanels {
    /// All panels start collapsed.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            panels: ids
                .into_iter()
                .map(|id| (id.into(), FaqPanel::default()))
                .collect(),
        }
    }

    pub fn toggle(&mut self, id: &str) -> Result<FaqPanel, PageError> {
        let panel = self
            .panels
            .get_mut(id)
            .ok_or_else(|| PageError::UnknownFaq(id.to_string()))?;
        panel.answer_visible = !panel.answer_visible;
        panel.icon_rotated = !panel.icon_rotated;
        Ok(*panel)
    }

    pub fn get(&self, id: &str) -> Option<FaqPanel> {
        self.panels.get(id).copied()
    }

    /// Ids of expanded panels, sorted.
    pub fn open_ids(&self) -> Vec<String> {
        self.panels
            .iter()
            .filter(|(_, panel)| panel.answer_visible)
            .map(|(id, _)| id.clone())
            .collect()
    }
}
