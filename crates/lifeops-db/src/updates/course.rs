//! Course update builder.

use chrono::NaiveDate;
use lifeops_core::enums::CourseStatus;
use lifeops_core::inputs::NewModule;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Option<NaiveDate>>,
    /// Replaces every module of the course when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<NewModule>>,
}

pub struct CourseUpdateBuilder(CourseUpdate);

impl CourseUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CourseUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: CourseStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn price(mut self, price: i64) -> Self {
        self.0.price = Some(price);
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.0.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub const fn release_date(mut self, release_date: Option<NaiveDate>) -> Self {
        self.0.release_date = Some(release_date);
        self
    }

    #[must_use]
    pub fn modules(mut self, modules: Vec<NewModule>) -> Self {
        self.0.modules = Some(modules);
        self
    }

    #[must_use]
    pub fn build(self) -> CourseUpdate {
        self.0
    }
}

impl Default for CourseUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
