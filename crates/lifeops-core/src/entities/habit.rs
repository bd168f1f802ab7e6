use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Habit;

/// Which habits were done on a given day. Unique per `date`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HabitCheck {
    pub id: String,
    pub date: NaiveDate,
    pub english_study: bool,
    pub exercise: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HabitCheck {
    #[must_use]
    pub const fn is_checked(&self, habit: Habit) -> bool {
        match habit {
            Habit::EnglishStudy => self.english_study,
            Habit::Exercise => self.exercise,
        }
    }

    pub const fn set(&mut self, habit: Habit, value: bool) {
        match habit {
            Habit::EnglishStudy => self.english_study = value,
            Habit::Exercise => self.exercise = value,
        }
    }
}

/// Planned activities for one weekday. Unique per `day_of_week`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HabitPlan {
    pub id: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    pub activities: String,
    pub hours: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
