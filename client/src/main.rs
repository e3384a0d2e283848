//! AgroNexo - headless dashboard client
//!
//! Usage:
//!   agronexo [--yes]               refresh and print the summary
//!   agronexo [--yes] export <path> download the consolidated report
//!   agronexo [--yes] reset         restore the backend's seed data

use std::path::PathBuf;
use std::sync::Arc;

use agronexo_client::{Config, Dashboard, LogNotifier};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agronexo", author, version, about = "AgroNexo farm dashboard client", long_about = None)]
struct Cli {
    /// Answer yes to every confirmation
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Refresh every collection and print the summary
    Summary,
    /// Download the consolidated spreadsheet
    Export {
        /// Where to write the .xlsx file
        path: PathBuf,
    },
    /// Restore the backend's seed data
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agronexo_client=debug,agronexo=debug,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgroNexo client");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Backend: {}", config.api.base_url);

    let notifier = Arc::new(LogNotifier::new(cli.yes));
    let mut dashboard = Dashboard::from_config(&config, notifier)?;

    match cli.command.unwrap_or(Command::Summary) {
        Command::Summary => {
            let report = dashboard.refresh_all().await;
            if !report.is_complete() {
                tracing::warn!(failed = ?report.failed, "some collections could not be loaded");
            }
            dashboard.settle_weather().await;
            let store = dashboard.store();
            println!("Lotes:    {}", store.lots().len());
            println!("Animales: {}", store.animals().len());
            println!("Silos:    {}", store.silos().len());
            if let Some(summary) = store.summary() {
                println!("Caja:     {}", summary.finance.cash);
                println!("Egresos:  {}", summary.finance.expenses);
                println!("Alertas:  {}", summary.operations.low_stock_alerts);
            }
            let panel = dashboard.weather_panel();
            if let Some(weather) = panel.snapshot() {
                println!(
                    "Clima ({}): {} °C, viento {} km/h",
                    panel.label(),
                    weather.temperature_celsius,
                    weather.wind_speed_kmh
                );
            }
        }
        Command::Export { path } => {
            let bytes = dashboard.export_report(&path).await?;
            println!("Reporte guardado en {} ({} bytes)", path.display(), bytes);
        }
        Command::Reset => {
            if dashboard.factory_reset().await? {
                println!("Datos restaurados");
            } else {
                println!("Cancelado");
            }
        }
    }

    Ok(())
}
