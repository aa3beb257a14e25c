use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payslip_engine::api::{AppState, create_router};
use payslip_engine::config::ConfigLoader;

/// Payslip computation service.
///
/// Loads a payroll policy directory and serves the payslip, rate and
/// attendance summary endpoints over HTTP.
#[derive(Debug, Parser)]
struct Cli {
    /// Directory holding `policy.yaml` and an optional `labels.yaml`.
    #[arg(long, default_value = "./config/default")]
    config: String,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,
}

/// Honours `RUST_LOG` when set and falls back to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading payroll policy from {}", cli.config))?;
    let metadata = config.policy().metadata();
    info!(
        policy = %metadata.code,
        version = %metadata.version,
        working_days_per_month = config.rate_policy().working_days_per_month,
        hours_per_day = config.rate_policy().hours_per_day,
        "Payroll policy loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    info!(address = %cli.bind, "Payslip engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
