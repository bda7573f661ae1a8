use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::handlers;

/// Shared by all handlers. Holds where the store lives, not a connection:
/// every request opens and releases its own store.
#[derive(Clone)]
pub struct AppState {
    pub db_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
        }
    }
}

/// All API routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 SALES
        // ========================================
        .route(
            "/api/sales",
            get(handlers::a001_sale::list_all).post(handlers::a001_sale::create),
        )
        .route(
            "/api/sales/form_options",
            get(handlers::a001_sale::form_options),
        )
        // ========================================
        // D001 SALES OVERVIEW DASHBOARD
        // ========================================
        .route(
            "/api/d001/sales_overview",
            get(handlers::d001_sales_overview::get_sales_overview),
        )
        .with_state(state)
}
