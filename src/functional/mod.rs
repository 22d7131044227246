//! Text primitives and composable validation building blocks.

pub mod js_text;
pub mod validation_engine;
pub mod validation_rules;
