//! Transaction routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use chrono::{DateTime, Utc};
use parcel_core::transaction::{NewTransaction, PropertyType, Transaction, TransactionUpdate};
use parcel_db::entities::transactions;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, TransactionId},
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .patch(update_transaction)
                .delete(delete_transaction),
        )
}

/// A stored transaction with its derived margin.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: Uuid,
    /// City.
    pub city: String,
    /// Property type.
    pub property_type: PropertyType,
    /// Area in square meters.
    pub area: Decimal,
    /// Date of sale.
    pub transaction_date: DateTime<Utc>,
    /// Sale value.
    pub transaction_net_value: Decimal,
    /// Cost.
    pub transaction_cost: Decimal,
    /// Net value minus cost.
    pub margin: Decimal,
    /// Margin as a percentage of cost.
    pub margin_percentage: Decimal,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last changed.
    pub updated_at: DateTime<Utc>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(model: transactions::Model) -> Self {
        let created_at = model.created_at.to_utc();
        let updated_at = model.updated_at.to_utc();
        let tx = Transaction::from(model);

        Self {
            margin: tx.margin(),
            margin_percentage: tx.margin_percentage(),
            id: tx.id,
            city: tx.city,
            property_type: tx.property_type,
            area: tx.area,
            transaction_date: tx.transaction_date,
            transaction_net_value: tx.transaction_net_value,
            transaction_cost: tx.transaction_cost,
            created_at,
            updated_at,
        }
    }
}

/// POST `/transactions` - Record a new sale.
async fn create_transaction(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewTransaction>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    payload.validate()?;

    let model = state.transactions().create(payload).await?;
    info!(id = %model.id, city = %model.city, "Transaction created");

    Ok((StatusCode::CREATED, Json(model.into())))
}

/// GET `/transactions` - List every sale, most recent first.
async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let models = state.transactions().list().await?;
    Ok(Json(models.into_iter().map(TransactionResponse::from).collect()))
}

/// GET `/transactions/{id}` - Fetch one sale.
async fn get_transaction(
    State(state): State<AppState>,
    TransactionId(id): TransactionId,
) -> Result<Json<TransactionResponse>, ApiError> {
    let model = state.transactions().find_by_id(id).await?;
    Ok(Json(model.into()))
}

/// PATCH `/transactions/{id}` - Change some fields of a sale.
async fn update_transaction(
    State(state): State<AppState>,
    TransactionId(id): TransactionId,
    ApiJson(payload): ApiJson<TransactionUpdate>,
) -> Result<Json<TransactionResponse>, ApiError> {
    payload.validate()?;

    let model = state.transactions().update(id, payload).await?;
    info!(%id, "Transaction updated");

    Ok(Json(model.into()))
}

/// DELETE `/transactions/{id}` - Remove a sale.
async fn delete_transaction(
    State(state): State<AppState>,
    TransactionId(id): TransactionId,
) -> Result<StatusCode, ApiError> {
    state.transactions().delete(id).await?;
    info!(%id, "Transaction deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use parcel_db::entities::sea_orm_active_enums::PropertyType as DbPropertyType;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_response_carries_margin_and_timestamps() {
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2025, 1, 16, 8, 30, 0).unwrap();
        let model = transactions::Model {
            id: Uuid::nil(),
            city: "Paris".to_string(),
            property_type: DbPropertyType::Apartment,
            area: dec!(85.5),
            transaction_date: created.into(),
            transaction_net_value: dec!(1200000),
            transaction_cost: dec!(800000),
            created_at: created.into(),
            updated_at: updated.into(),
        };

        let value = serde_json::to_value(TransactionResponse::from(model)).unwrap();

        assert_eq!(value["propertyType"], "APARTMENT");
        assert_eq!(value["margin"], json!(400_000.0));
        assert_eq!(value["marginPercentage"], json!(50.0));
        assert_eq!(value["transactionDate"], "2025-01-15T10:00:00Z");
        assert_eq!(value["updatedAt"], "2025-01-16T08:30:00Z");
    }
}
