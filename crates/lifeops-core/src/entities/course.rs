use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CourseStatus;

/// An online course in production.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CourseStatus,
    /// Price in yen.
    pub price: i64,
    pub genre: String,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A chapter of a course. `position` is zero-based and dense per course.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Module {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub position: u32,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A course together with its modules in position order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseWithModules {
    #[serde(flatten)]
    pub course: Course,
    pub modules: Vec<Module>,
}

impl CourseWithModules {
    /// Share of completed modules, 0-100. A course without modules is at 0.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.modules.len();
        if total == 0 {
            return 0;
        }
        let done = self.modules.iter().filter(|m| m.is_completed).count();
        let pct = (done * 200 + total) / (total * 2);
        u8::try_from(pct).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(position: u32, is_completed: bool) -> Module {
        let now = Utc::now();
        Module {
            id: format!("mod-{position:08}"),
            course_id: "crs-1".into(),
            title: format!("Chapter {position}"),
            description: String::new(),
            position,
            is_completed,
            created_at: now,
            updated_at: now,
        }
    }

    fn course(modules: Vec<Module>) -> CourseWithModules {
        let now = Utc::now();
        CourseWithModules {
            course: Course {
                id: "crs-1".into(),
                title: "Rust basics".into(),
                description: String::new(),
                status: CourseStatus::Planning,
                price: 9800,
                genre: "programming".into(),
                release_date: None,
                created_at: now,
                updated_at: now,
            },
            modules,
        }
    }

    #[test]
    fn progress_without_modules_is_zero() {
        assert_eq!(course(vec![]).progress_percent(), 0);
    }

    #[test]
    fn progress_rounds_to_nearest() {
        let c = course(vec![module(0, true), module(1, false), module(2, false)]);
        assert_eq!(c.progress_percent(), 33);
        let c = course(vec![module(0, true), module(1, true), module(2, false)]);
        assert_eq!(c.progress_percent(), 67);
    }

    #[test]
    fn progress_all_done_is_hundred() {
        let c = course(vec![module(0, true), module(1, true)]);
        assert_eq!(c.progress_percent(), 100);
    }

    #[test]
    fn flattened_json_keeps_course_fields_at_top_level() {
        let value = serde_json::to_value(course(vec![module(0, false)])).unwrap();
        assert_eq!(value["title"], "Rust basics");
        assert_eq!(value["modules"][0]["position"], 0);
    }
}
