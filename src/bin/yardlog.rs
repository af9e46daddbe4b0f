//! yardlog - Interactive TUI for a shipyard repair-contract logbook.
//!
//! Connects to the logbook HTTP API and presents each logbook as a paged,
//! sortable, searchable table.
//!
//! Usage:
//!   yardlog                                # default API endpoint
//!   yardlog --api-url https://host/api/    # explicit endpoint
//!   yardlog --demo                         # offline with sample data

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yardlog::api::ApiClient;
use yardlog::session::{SessionContext, SessionStore};
use yardlog::tui::{App, DataSource};

/// Shipyard repair-contract logbook viewer.
#[derive(Parser)]
#[command(name = "yardlog", about = "Repair-contract logbook viewer")]
struct Args {
    /// Base URL of the logbook API.
    #[arg(
        long,
        env = "YARDLOG_API_URL",
        default_value = "http://localhost:8080/api/"
    )]
    api_url: String,

    /// Rows per page at startup.
    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Quiet period before a typed search hits the API, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    debounce_ms: u64,

    /// Run offline against built-in sample data.
    #[arg(long)]
    demo: bool,

    /// Override the session file location.
    #[arg(long, value_name = "PATH")]
    session_path: Option<PathBuf>,

    /// Tick interval for the UI loop in milliseconds.
    #[arg(long, default_value_t = 250)]
    tick_ms: u64,
}

/// File logging only; stdout belongs to the TUI. The guard must outlive the
/// application so buffered lines are flushed on exit.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::state_dir()
        .or_else(dirs::cache_dir)?
        .join("yardlog");
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::daily(dir, "yardlog.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("YARDLOG_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

fn main() {
    let args = Args::parse();
    let _log_guard = init_logging();

    let store = match args.session_path {
        Some(path) => SessionStore::at(path),
        None => match SessionStore::default_location() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error resolving session location: {}", e);
                std::process::exit(1);
            }
        },
    };
    let session = SessionContext::hydrate(store);

    let source = if args.demo {
        DataSource::Demo
    } else {
        match ApiClient::new(&args.api_url) {
            Ok(api) => DataSource::Api(api),
            Err(e) => {
                eprintln!("Error creating API client for '{}': {}", args.api_url, e);
                std::process::exit(1);
            }
        }
    };

    let app = App::new(
        source,
        session,
        args.page_size,
        Duration::from_millis(args.debounce_ms),
    );

    if let Err(e) = app.run(Duration::from_millis(args.tick_ms)) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
