//! Row models, column tables, and resource services, one module per logbook.
//!
//! Each logbook follows the same triplet: a serde row struct, its static
//! `ColumnDef` table, and a service composing controller path + query params
//! over [`crate::api::ApiClient`]. The logbooks carry no business logic
//! beyond display formatting.

pub mod auth;
pub mod cfr;
pub mod format;
pub mod glossary;
pub mod imports;
pub mod jsr;
pub mod msp;
pub mod projects;
pub mod reports;
pub mod samples;
pub mod timesheet;
pub mod tip;
pub mod waf;
