//! Swiss tournament server.
//!
//! Holds players and tournaments in memory and serves the JSON API plus the
//! static web UI.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Error;
use log::info;
use pico_args::Arguments;
use st_server::{
    api,
    config::ServerConfig,
    logging, metrics,
};
use swiss_tournament::{
    PlayerManager, TournamentManager,
    store::{MemoryPlayerDirectory, MemoryTournamentStore},
};

const HELP: &str = "\
Run a Swiss tournament server

USAGE:
  st_server [OPTIONS]

OPTIONS:
  --bind        IP:PORT    Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:3000]
  --static-dir  PATH       Directory with the web UI   [default: env STATIC_DIR or public]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  STATIC_DIR               Directory served for non-API paths. The bundled UI
                           lives in st_server/public; from the workspace root
                           pass --static-dir st_server/public
  SEEDING                  random | registration  [default: random]
  SEEDING_SEED             Fixed u64 seed for random seeding
  METRICS_BIND             Prometheus exporter address (disabled when unset)
  RUST_LOG                 Log filter [default: info]
";

struct Args {
    bind: Option<SocketAddr>,
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        static_dir: pargs.opt_value_from_str("--static-dir")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.static_dir)?;
    config.validate()?;

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        info!("Prometheus metrics exposed at http://{}/metrics", metrics_bind);
    }

    info!(
        "Seeding tie-break: {}{}",
        config.seeding.mode,
        config
            .seeding
            .seed
            .map(|seed| format!(" (seed {seed})"))
            .unwrap_or_default()
    );

    // Create managers over a shared player directory
    let directory = Arc::new(MemoryPlayerDirectory::new());
    let players = Arc::new(PlayerManager::new(directory.clone()));
    let tournaments = Arc::new(TournamentManager::new(
        Arc::new(MemoryTournamentStore::new()),
        directory,
        config.seeding.tie_break()?,
    ));

    let app = api::create_router(api::AppState { players, tournaments }, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{} serving {}. Press Ctrl+C to stop.",
        config.bind,
        config.static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
