use anyhow::Context;
use crud_services::config::Config;
use crud_services::lifecycle::{setup_tracing, ServiceSystem};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    setup_tracing(&config.log_level);

    let system = ServiceSystem::start(&config)
        .await
        .context("failed to open resource stores")?;

    let (stop_tx, stop_rx) = watch::channel(false);
    let mut servers = JoinSet::new();
    for service in system.services(&config) {
        let listener = TcpListener::bind(service.addr)
            .await
            .with_context(|| format!("failed to bind {} on {}", service.name, service.addr))?;
        info!(service = service.name, addr = %service.addr, "Listening");

        let mut stop = stop_rx.clone();
        servers.spawn(async move {
            axum::serve(listener, service.router)
                .with_graceful_shutdown(async move {
                    let _ = stop.changed().await;
                })
                .await
        });
    }

    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = stop_tx.send(true);
    });

    while let Some(result) = servers.join_next().await {
        result??;
    }

    system.shutdown().await?;
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Cannot listen for Ctrl+C");
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
                error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, stopping services");
}
