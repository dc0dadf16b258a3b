use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use shift_board::api::{AppState, create_router};
use shift_board::config::{AppConfig, ConfigLoader};
use shift_board::error::SchedulingError;
use shift_board::seed::seed_employees;
use shift_board::store::{EmployeeStore, InMemoryEmployeeStore, InMemoryShiftStore, ShiftStore};
use shift_board::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "shift-board",
    about = "Serve the shift assignment API",
    version
)]
struct Cli {
    /// Path to a YAML configuration file; built-in defaults are used when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Skip creating the seed employees at startup
    #[arg(long)]
    no_seed: bool,
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Scheduling(#[from] SchedulingError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn load_config(cli: &Cli) -> Result<AppConfig, SchedulingError> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => AppConfig::default(),
    };

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    let config = load_config(&cli)?;
    telemetry::init(&config.logging)?;

    let employee_store: Arc<dyn EmployeeStore> = Arc::new(InMemoryEmployeeStore::new());
    let shift_store: Arc<dyn ShiftStore> =
        Arc::new(InMemoryShiftStore::for_storage(&config.storage));

    if !cli.no_seed {
        let created = seed_employees(employee_store.as_ref(), &config.seed.employees)?;
        info!(created, "Seed employees processed");
    }

    let app = create_router(AppState::new(employee_store, shift_store));

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        %addr,
        enforce_daily_uniqueness = config.storage.enforce_daily_uniqueness,
        "Shift board ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
