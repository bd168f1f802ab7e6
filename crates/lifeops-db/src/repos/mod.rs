//! Repository methods on [`crate::service::LifeService`], one module per
//! table group.

pub mod course;
pub mod dashboard;
pub mod habit;
pub mod journal;
pub mod kpi;
pub mod kpi_tracking;
pub mod meta;
pub mod milestone;
pub mod settings;
pub mod strategy;
pub mod tag;
pub mod task;
pub mod todo;
