pub mod course;
pub mod dashboard;
pub mod dispatch;
pub mod habit;
pub mod init;
pub mod journal;
pub mod kpi;
pub mod meta;
pub mod milestone;
pub mod schema;
pub mod settings;
pub mod shared;
pub mod strategy;
pub mod tag;
pub mod task;
pub mod todo;
