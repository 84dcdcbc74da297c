use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lingo_types::{AppEvent, OwnerId};
use tokio::signal;
use tokio::task::JoinSet;

mod cli;
mod controller;
mod events;
mod io;
mod logging;
mod profile;
mod state;
mod ui;


use self::cli::{Cli, Command};
use self::controller::AppController;
use self::logging::init_logging;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let request = match cli.command {
        Command::Init { path } => {
            let path = profile::write_default_profile(path)?;
            println!("Wrote default profile to {}", path.display());
            return Ok(());
        }
        Command::Shell => None,
        Command::Request(request) => Some(request),
    };

    let config = profile::load_config(cli.config.as_deref())?;
    config.validate().context("invalid configuration")?;
    init_logging(&config.logging)?;

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env file: {e}"),
    }

    let owner = OwnerId::new(cli.owner.unwrap_or_else(|| config.default_owner.clone()));
    tracing::info!(%owner, data = %config.storage.data_path.display(), "Starting lingo");

    let state = Arc::new(AppState::new(config, owner).await?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    match request {
        Some(request) => {
            controller.submit(request.into_event()).await?;
            controller.submit(AppEvent::Shutdown).await?;
        }
        None => controller.spawn_shell(&mut tasks)?,
    }

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(&controller, &mut tasks, shutdown).await;
    Ok(())
}

/// Wait for every task to finish, or for `shutdown` to fire first
async fn run(
    controller: &AppController,
    tasks: &mut JoinSet<anyhow::Result<()>>,
    shutdown: impl Future<Output = ()>,
) {
    let drain = async {
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::error!("task exited with error: {e:#}");
                    controller.shutdown();
                }
                Err(e) => {
                    tracing::error!("task panicked: {e}");
                    controller.shutdown();
                }
            }
        }
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        _ = drain => {
            tracing::debug!("All tasks finished");
        }
    }
}
