use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MetaKey;

/// Raw `meta_info` row. `value` holds JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MetaInfo {
    pub key: MetaKey,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Key goal indicator targets.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct KgiInfo {
    /// Ten-thousand yen per month.
    pub target_income: f64,
    /// Hours per day.
    pub target_work_hours: f64,
    pub target_course_sales: i64,
    pub target_subscription: i64,
}

impl Default for KgiInfo {
    fn default() -> Self {
        Self {
            target_income: 200.0,
            target_work_hours: 4.0,
            target_course_sales: 0,
            target_subscription: 0,
        }
    }
}

/// Value proposition statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct VpsInfo {
    pub statement: String,
}
