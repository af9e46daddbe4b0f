//! Interactive terminal application.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::{App, DataSource};
pub use state::AppState;
