mod app;
mod auth;
mod config;
mod db;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::auth::AuthKeys;
use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize logging FIRST
    logging::init_logging(logging::LoggingConfig::from_env())?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    services::auth_service::seed_admin(&pool).await?;

    let state = AppState {
        pool,
        auth: Arc::new(AuthKeys::new(
            config.jwt_secret.as_bytes(),
            config.token_ttl,
        )),
    };
    let app = app::create_app(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Foliotrack backend running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
