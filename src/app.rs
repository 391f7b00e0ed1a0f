use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{auth, health, investments, portfolio, transactions};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/auth", auth::router())
        .nest("/api/investments", investments::router())
        .nest("/api/transactions", transactions::router())
        .nest("/api/portfolio", portfolio::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
