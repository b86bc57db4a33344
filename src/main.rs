//! Shop Ledger server entry point.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Create the bootstrap staff user if configured and none exists
//! 5. Build HTTP router with routes and middleware
//! 6. Start server on configured port

use rust_decimal::Decimal;
use shop_ledger::{AppState, build_router, config, db, services::user_service};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(
        target_amount = %config.target_amount,
        currency = %config.currency_symbol,
        "Configuration loaded"
    );
    if config.target_amount <= Decimal::ZERO {
        tracing::warn!("TARGET_AMOUNT is not positive; no shop will be flagged below target");
    }

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    if let Some(username) = &config.bootstrap_staff_username {
        match user_service::ensure_bootstrap_staff(&pool, username).await? {
            Some(user) => tracing::warn!(
                user = %user.username,
                api_key = user.api_key.as_deref().unwrap_or_default(),
                "Bootstrap staff user created; store this API key now, it is not shown again"
            ),
            None => tracing::info!("Staff user already exists; skipping bootstrap"),
        }
    }

    let app = build_router(AppState::new(pool, config.report_settings()));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
