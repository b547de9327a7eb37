pub mod products;

use axum::{routing::get, Router};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(products::routes())
        .route("/health", get(health_check))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
