//! Report data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::transaction::{PropertyType, Transaction};

/// A transaction together with its computed margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighestMarginItem {
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
}

impl From<&Transaction> for HighestMarginItem {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            city: tx.city.clone(),
            property_type: tx.property_type,
            area: tx.area,
            transaction_date: tx.transaction_date,
            transaction_net_value: tx.transaction_net_value,
            transaction_cost: tx.transaction_cost,
            margin: tx.margin(),
            margin_percentage: tx.margin_percentage(),
        }
    }
}

/// Top transactions ranked by margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighestMarginReport {
    /// At most five transactions, highest margin first.
    pub top_transactions: Vec<HighestMarginItem>,
    /// Number of returned transactions.
    pub count: usize,
}

/// Margin statistics for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMarginSummary {
    /// Mean margin, zero for an empty week.
    pub average_margin: Decimal,
    /// Mean of per-transaction margin percentages, zero for an empty week.
    pub average_margin_percentage: Decimal,
    /// Number of transactions in the week.
    pub transaction_count: usize,
    /// Monday 00:00:00.000.
    pub start_date: DateTime<Utc>,
    /// Sunday 23:59:59.999.
    pub end_date: DateTime<Utc>,
}

/// Week-over-week movement of the average margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginChange {
    /// Current minus previous average margin.
    pub margin_difference: Decimal,
    /// Relative change in percent, zero when the previous average is not positive.
    pub percentage_change: Decimal,
}

/// Current week against previous week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAverageMarginReport {
    /// Week containing the reference instant.
    pub current_week: WeeklyMarginSummary,
    /// The seven days before it.
    pub previous_week: WeeklyMarginSummary,
    /// Difference between the two.
    pub change: MarginChange,
}

/// Aggregated figures for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPerformance {
    /// City name, exactly as recorded.
    pub city: String,
    /// Total value divided by transaction count.
    pub average_transaction_value: Decimal,
    /// Number of transactions.
    pub transaction_count: usize,
    /// Sum of net values.
    pub total_value: Decimal,
    /// Mean margin.
    pub average_margin: Decimal,
    /// Mean of per-transaction margin percentages.
    pub average_margin_percentage: Decimal,
}

/// Top cities ranked by average transaction value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPerformanceReport {
    /// At most five cities, highest average value first.
    pub top_cities: Vec<CityPerformance>,
    /// Number of returned cities.
    pub count: usize,
}
