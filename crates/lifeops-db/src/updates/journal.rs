//! Journal update builder.

use lifeops_core::enums::Mood;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct JournalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Replaces the entry's tags when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

pub struct JournalUpdateBuilder(JournalUpdate);

impl JournalUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(JournalUpdate::default())
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
    pub const fn mood(mut self, mood: Mood) -> Self {
        self.0.mood = Some(mood);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.0.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn build(self) -> JournalUpdate {
        self.0
    }
}

impl Default for JournalUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
