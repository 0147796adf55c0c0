use anyhow::Result;
use server_time::application::{ports::time::Clock, services::ApplicationServices};
use server_time::config::AppConfig;
use server_time::infrastructure::{
    app_context::{self, AppOptions},
    time::SystemClock,
};
use server_time::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // Loaded before tracing so a `.env` RUST_LOG takes effect.
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    // The host context must exist before any function is registered.
    app_context::initialize_app(AppOptions {
        project_id: config.project_id().map(str::to_string),
    })?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let services = Arc::new(ApplicationServices::new(app_context::app()?, Arc::clone(&clock))?);
    for name in services.functions().names() {
        tracing::info!(function = name, "callable function ready");
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let router = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
