//! Report routes.

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use parcel_core::reports::{CityPerformanceReport, HighestMarginReport, WeeklyAverageMarginReport};

use crate::{AppState, error::ApiError};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/highest-margin", get(get_highest_margin))
        .route(
            "/reports/weekly-average-margin",
            get(get_weekly_average_margin),
        )
        .route("/reports/city-performance", get(get_city_performance))
}

/// GET `/reports/highest-margin` - Top five sales by margin.
async fn get_highest_margin(
    State(state): State<AppState>,
) -> Result<Json<HighestMarginReport>, ApiError> {
    let report = state.report_generator().highest_margin().await?;
    Ok(Json(report))
}

/// GET `/reports/weekly-average-margin` - This week against last week.
async fn get_weekly_average_margin(
    State(state): State<AppState>,
) -> Result<Json<WeeklyAverageMarginReport>, ApiError> {
    let report = state
        .report_generator()
        .weekly_average_margin(Utc::now())
        .await?;
    Ok(Json(report))
}

/// GET `/reports/city-performance` - Top five cities by average sale value.
async fn get_city_performance(
    State(state): State<AppState>,
) -> Result<Json<CityPerformanceReport>, ApiError> {
    let report = state.report_generator().city_performance().await?;
    Ok(Json(report))
}
