use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::KpiPeriod;

/// `min(round(current / target * 100), 100)`, floored at 0.
///
/// A non-positive target always yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(current: f64, target: f64) -> u8 {
    if target <= 0.0 || !current.is_finite() || !target.is_finite() {
        return 0;
    }
    (current / target * 100.0).round().clamp(0.0, 100.0) as u8
}

/// A free-form key performance indicator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Kpi {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub period: KpiPeriod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Kpi {
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.current_value, self.target_value)
    }
}

/// Actual figures for one calendar month. Unique per `(year, month)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KpiRecord {
    pub id: String,
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// Income in ten-thousand yen.
    pub income: f64,
    pub work_hours: f64,
    pub course_sales: i64,
    pub subscription: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Targets for one quarter. Unique per `(year, quarter)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KpiMilestone {
    pub id: String,
    pub year: i32,
    /// 1-4.
    pub quarter: u32,
    pub target_income: f64,
    pub target_work_hours: f64,
    pub target_course_sales: i64,
    pub target_subscription: i64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_and_caps() {
        assert_eq!(progress_percent(50.0, 200.0), 25);
        assert_eq!(progress_percent(1.0, 3.0), 33);
        assert_eq!(progress_percent(2.0, 3.0), 67);
        assert_eq!(progress_percent(300.0, 200.0), 100);
    }

    #[test]
    fn percent_is_zero_for_non_positive_target() {
        assert_eq!(progress_percent(10.0, 0.0), 0);
        assert_eq!(progress_percent(10.0, -5.0), 0);
    }

    #[test]
    fn percent_floors_negative_current_at_zero() {
        assert_eq!(progress_percent(-10.0, 100.0), 0);
    }

    #[test]
    fn kpi_progress_uses_current_over_target() {
        let now = Utc::now();
        let kpi = Kpi {
            id: "kpi-1".into(),
            title: "Monthly income".into(),
            description: String::new(),
            target_value: 200.0,
            current_value: 150.0,
            unit: "万円".into(),
            period: KpiPeriod::Monthly,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(kpi.progress_percent(), 75);
    }
}
