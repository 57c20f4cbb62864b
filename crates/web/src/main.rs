use anyhow::Context;
use storage::Database;
use storage::services::team_identity;

use web::app;
use web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting Tournament Tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;

    std::fs::create_dir_all("data").context("Failed to create data directory")?;

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed");

    team_identity::backfill_team_identities(db.pool())
        .await
        .context("Failed to backfill team identities")?;

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app(db)).await?;

    Ok(())
}
