//! Tag update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TagUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

pub struct TagUpdateBuilder(TagUpdate);

impl TagUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TagUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.0.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn build(self) -> TagUpdate {
        self.0
    }
}

impl Default for TagUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
