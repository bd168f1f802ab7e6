//! Entity structs for all LifeOps records.
//!
//! Each entity maps to a table in the libSQL database (see
//! `lifeops-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod course;
mod habit;
mod journal;
mod kpi;
mod meta;
mod milestone;
mod settings;
mod strategy;
mod tag;
mod task;
mod todo;

pub use course::{Course, CourseWithModules, Module};
pub use habit::{HabitCheck, HabitPlan};
pub use journal::Journal;
pub use kpi::{Kpi, KpiMilestone, KpiRecord, progress_percent};
pub use meta::{KgiInfo, MetaInfo, VpsInfo};
pub use milestone::Milestone;
pub use settings::{
    AppSettings, DEFAULT_BACKGROUND_COLOR, NotificationSettings, ProfileSettings, UserSettings,
};
pub use strategy::{Strategy, StrategyReview};
pub use tag::{DEFAULT_TAG_COLOR, Tag, is_hex_color};
pub use task::Task;
pub use todo::Todo;
