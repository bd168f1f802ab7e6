//! Strategy update builder.

use lifeops_core::enums::StrategyCategory;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StrategyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<StrategyCategory>,
}

pub struct StrategyUpdateBuilder(StrategyUpdate);

impl StrategyUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(StrategyUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.0.content = Some(content.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: StrategyCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn build(self) -> StrategyUpdate {
        self.0
    }
}

impl Default for StrategyUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
