//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for transactions and reports
//! - Request extractors with JSON rejections
//! - Error responses

pub mod error;
pub mod extractors;
pub mod routes;

use axum::Router;
use parcel_core::reports::{ReportGenerator, ReportSettings};
use parcel_db::TransactionRepository;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Report tunables.
    pub reports: ReportSettings,
}

impl AppState {
    /// Creates a transaction repository on the shared pool.
    #[must_use]
    pub fn transactions(&self) -> TransactionRepository {
        TransactionRepository::new((*self.db).clone())
    }

    /// Creates a report generator on the shared pool.
    #[must_use]
    pub fn report_generator(&self) -> ReportGenerator<TransactionRepository> {
        ReportGenerator::new(self.transactions(), self.reports)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
