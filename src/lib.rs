//! yardlog - Terminal client for shipyard repair-contract logbooks.
//!
//! This library provides the building blocks of the `yardlog` binary:
//! - `grid` - the generic data-grid view model (pagination, sorting, filtering)
//! - `api` - HTTP client and response normalization for the logbook API
//! - `logbook` - row models and resource services, one per logbook
//! - `session` - file-backed session profile
//! - `tui` - interactive terminal application

pub mod api;
pub mod grid;
pub mod logbook;
pub mod session;
pub mod tui;
pub mod util;
