use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D100 SALES DASHBOARD
        // ========================================
        .route(
            "/api/d100/sales_dashboard",
            post(handlers::d100_sales::get_sales_dashboard),
        )
        .fallback_service(ServeDir::new(static_dir))
}
