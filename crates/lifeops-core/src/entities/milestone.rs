use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{MilestoneStatus, Priority};

/// A dated goal with a manually tracked progress percentage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_date: NaiveDate,
    pub status: MilestoneStatus,
    pub priority: Priority,
    /// 0-100.
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
