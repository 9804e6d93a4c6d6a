mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use wormhole_core::{Repository, Shortener};
use wormhole_gateway::{App, AppState, Credentials};
use wormhole_generator::RandomGenerator;
use wormhole_shortener::{RetryPolicy, ShortenerService};
use wormhole_storage::{InMemoryRepository, SqliteRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    wormhole_telemetry::init(config.env.into())?;

    info!(
        listen_addr = %config.listen_addr,
        env = %config.env,
        storage_backend = %config.storage,
        alias_length = config.alias_length,
        max_attempts = config.max_attempts,
        "starting gateway server"
    );

    let shortener = match config.storage {
        StorageBackendArg::InMemory => build_shortener(InMemoryRepository::new(), &config),
        StorageBackendArg::Sqlite => {
            let path = config
                .sqlite_path
                .as_deref()
                .context("sqlite path is required when storage backend is sqlite")?;
            let repository = SqliteRepository::connect(path)
                .await
                .with_context(|| format!("failed to init storage at {path}"))?;
            build_shortener(repository, &config)
        }
    };

    let shutdown = CancellationToken::new();
    let mut state = AppState::new(shortener)
        .with_shutdown(shutdown.clone())
        .with_request_timeout(Duration::from_secs(config.request_timeout_secs));
    if let (Some(user), Some(password)) = (config.auth_user, config.auth_password) {
        state = state.with_credentials(Credentials::new(user, password));
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "server started");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .inspect_err(|e| error!(error = %e, "server failed"))?;

    info!("server stopped");
    Ok(())
}

fn build_shortener<R: Repository>(repository: R, config: &CLI) -> Arc<dyn Shortener> {
    let generator = RandomGenerator::builder()
        .length(usize::from(config.alias_length))
        .build();
    let policy = RetryPolicy::builder()
        .max_attempts(config.max_attempts)
        .build();

    Arc::new(ShortenerService::with_policy(repository, generator, policy))
}

async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
    shutdown.cancel();
}
