//! Milestone update builder.

use chrono::NaiveDate;
use lifeops_core::enums::{MilestoneStatus, Priority};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MilestoneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MilestoneStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

pub struct MilestoneUpdateBuilder(MilestoneUpdate);

impl MilestoneUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MilestoneUpdate::default())
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
    pub const fn target_date(mut self, target_date: NaiveDate) -> Self {
        self.0.target_date = Some(target_date);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: MilestoneStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub const fn progress(mut self, progress: u8) -> Self {
        self.0.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn build(self) -> MilestoneUpdate {
        self.0
    }
}

impl Default for MilestoneUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
