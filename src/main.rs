// Main entry point - Wire instances together and run the requested boards
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use board_deployer::application::deploy_service::DeployService;
use board_deployer::application::looker_api::LookerApi;
use board_deployer::infrastructure::config::load_instance_settings;
use board_deployer::infrastructure::looker_client::LookerClient;
use board_deployer::presentation::cli::Cli;
use board_deployer::presentation::report::{print_audit, print_deploy};

async fn connect(ini: &Path, env: &str) -> anyhow::Result<Arc<dyn LookerApi>> {
    let settings = load_instance_settings(ini, env)?;
    let client = LookerClient::login(&settings)
        .await
        .with_context(|| format!("Failed to log in to '{}'", env))?;
    tracing::info!("Connected to '{}' at {}", env, settings.base_url);
    Ok(Arc::new(client))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = connect(&cli.ini, &cli.source).await?;
    let mut targets = Vec::with_capacity(cli.target.len());
    for env in &cli.target {
        targets.push((env.as_str(), connect(&cli.ini, env).await?));
    }

    let service = DeployService::new(source, cli.allow_partial);

    for title in &cli.board {
        for (env, target) in &targets {
            if cli.audit {
                let report = service
                    .audit(title, target.as_ref())
                    .await
                    .with_context(|| format!("Audit of '{}' against '{}' failed", title, env))?;
                print_audit(&report, env, cli.json)?;
            } else {
                let summary = service
                    .deploy(title, target.as_ref())
                    .await
                    .with_context(|| format!("Deploy of '{}' to '{}' failed", title, env))?;
                print_deploy(&summary, env);
            }
        }
    }

    Ok(())
}
