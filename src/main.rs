//! Finance Tracker API
//!
//! Personal finance bookkeeping backend: create accounts, record incomes and
//! expenses, and read running balances. All state is in memory and lives for
//! the duration of the process.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use rust_decimal::Decimal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finance_tracker::api;
use finance_tracker::domain::{Account, Money};
use finance_tracker::{AccountRepository, Config};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finance_tracker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the application router
fn build_router(state: api::AppState) -> Router {
    api::create_router()
        .layer(middleware::from_fn(api::middleware::logging_middleware))
        .layer(CatchPanicLayer::custom(api::middleware::handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Development convenience: one empty USD account and one holding 200 USD.
fn seed_demo_accounts(repository: &AccountRepository) -> anyhow::Result<()> {
    let empty = Account::new("USD")?;
    let funded = Account::with_balance(Money::new(Decimal::from(200), "USD")?);

    tracing::info!(empty = %empty.id(), funded = %funded.id(), "Seeding demo accounts");

    repository.insert(empty)?;
    repository.insert(funded)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("Starting Finance Tracker API");

    let repository = Arc::new(AccountRepository::new());
    if config.seed_demo_accounts && !config.is_production() {
        seed_demo_accounts(&repository)?;
    }

    tracing::info!("Listening on http://{}", addr);

    // Build router and start server
    let app = build_router(repository);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down. Goodbye!");

    Ok(())
}

/// Shutdown signal handler for graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
