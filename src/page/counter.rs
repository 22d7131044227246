use serde_derive::{Deserialize, Serialize};

/// The counter widget; its message depends only on the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn message(&self) -> &'static str {
        match self.value {
            0 => "Starting point!",
            1..=5 => "Keep going up!",
            v if v > 5 => "You're on fire! 🔥",
            -5..=-1 => "Going down...",
            _ => "That's quite negative! 📉",
        }
    }
}
