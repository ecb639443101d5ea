//! rosterview - interactive TUI client for an activity signup service.
//!
//! Usage:
//!   rosterview                               # default server, manual refresh
//!   rosterview --server http://host:8000     # custom server
//!   rosterview --auto-refresh 30             # refetch every 30 seconds
//!   rosterview --log-file ./rosterview.log   # diagnostics (RUST_LOG honored)

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use rosterview::client::HttpClient;
use rosterview::store::SnapshotStore;
use rosterview::tui::App;

/// How often the event loop wakes up without input.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Interactive TUI client for an activity signup service.
#[derive(Parser)]
#[command(name = "rosterview", about = "Activity roster viewer", version)]
struct Args {
    /// Base URL of the signup service.
    #[arg(long, default_value = "http://localhost:8000")]
    server: String,

    /// Refetch the roster every N seconds. Off by default: the roster
    /// refreshes on startup, after each mutation, and on `R`.
    #[arg(long, value_name = "SECONDS")]
    auto_refresh: Option<u64>,

    /// Request timeout in seconds.
    #[arg(long, default_value = "10", value_name = "SECONDS")]
    timeout: u64,

    /// Append diagnostics to this file. Without it nothing is logged, so
    /// log output never draws over the TUI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("rosterview=info")),
                    )
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                eprintln!("Error opening log file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let base = match Url::parse(&args.server) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Error: invalid server url '{}': {}", args.server, e);
            std::process::exit(1);
        }
    };

    let client = HttpClient::new(base, Duration::from_secs(args.timeout));
    let store = SnapshotStore::new(Box::new(client));
    let auto_refresh = args.auto_refresh.map(Duration::from_secs);

    let app = App::new(store, auto_refresh);
    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
