// src/main.rs
use anyhow::Result;
use photo_admin::application::{
    ports::time::Clock,
    services::{ApplicationServices, Repositories},
};
use photo_admin::config::{AppConfig, DEFAULT_LOG_FILTER};
use photo_admin::infrastructure::{
    database,
    repositories::{
        PostgresCategoryRepository, PostgresFormatRepository, PostgresFrameRepository,
        PostgresOrderRepository, PostgresPhotoRepository, PostgresPriceRepository,
        PostgresSizeRepository,
    },
    time::SystemClock,
};
use photo_admin::presentation::http::{
    middleware::{AdminGate, CorsPolicy},
    routes::build_router,
    state::HttpState,
};
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
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        photos: Arc::new(PostgresPhotoRepository::new(pool.clone())),
        sizes: Arc::new(PostgresSizeRepository::new(pool.clone())),
        frames: Arc::new(PostgresFrameRepository::new(pool.clone())),
        formats: Arc::new(PostgresFormatRepository::new(pool.clone())),
        prices: Arc::new(PostgresPriceRepository::new(pool.clone())),
        orders: Arc::new(PostgresOrderRepository::new(pool)),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let state = HttpState {
        services: Arc::new(ApplicationServices::new(repos, clock)),
        gate: AdminGate::new(config.admin_api_key()),
        cors: Arc::new(CorsPolicy::new(config.allowed_origins().to_vec())),
    };
    tracing::info!(
        origins = ?config.allowed_origins(),
        "CORS allow-list loaded"
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
