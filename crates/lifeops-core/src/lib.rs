//! # lifeops-core
//!
//! Core types, ID prefixes, and error types for LifeOps.
//!
//! This crate provides the foundational types shared across all LifeOps crates:
//! - Entity structs for every stored record (courses, tasks, journals, tags, etc.)
//! - Status and category enums with their `snake_case` storage names
//! - ID prefix constants
//! - Cross-cutting error types
//! - In-memory list filters and sort orders used by the list screens
//! - Calendar helpers (week bounds, quarters)
//! - Input structs for creating records
//! - Aggregate response types (dashboard, tag stats, KPI progress)
//! - Input validation shared by storage and CLI

pub mod calendar;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
pub mod ids;
pub mod inputs;
pub mod responses;
pub mod validate;
