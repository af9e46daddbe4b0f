//! TUI widgets for yardlog.

mod grid_table;
mod header;
mod help;
mod popups;

pub use grid_table::render_page;
pub use header::render_header;
pub use help::render_help;
pub use popups::{centered_rect, render_confirm_delete, render_detail, render_quit_confirm};
