//! Transaction data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::margin;

/// Kind of property sold in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    /// Apartment.
    Apartment,
    /// House.
    House,
    /// Land plot.
    Land,
}

impl PropertyType {
    /// All property types, in declaration order.
    pub const ALL: [Self; 3] = [Self::Apartment, Self::House, Self::Land];

    /// Returns the wire name of this property type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "APARTMENT",
            Self::House => "HOUSE",
            Self::Land => "LAND",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown property type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("propertyType must be one of: APARTMENT, HOUSE, LAND (got {0:?})")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APARTMENT" => Ok(Self::Apartment),
            "HOUSE" => Ok(Self::House),
            "LAND" => Ok(Self::Land),
            other => Err(UnknownPropertyType(other.to_string())),
        }
    }
}

/// A recorded property sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID.
    pub id: Uuid,
    /// City where the property is located.
    pub city: String,
    /// Property type.
    pub property_type: PropertyType,
    /// Area in square meters.
    pub area: Decimal,
    /// Date of sale.
    pub transaction_date: DateTime<Utc>,
    /// Sale value.
    pub transaction_net_value: Decimal,
    /// Acquisition and total cost.
    pub transaction_cost: Decimal,
}

impl Transaction {
    /// Net value minus cost.
    #[must_use]
    pub fn margin(&self) -> Decimal {
        margin::margin(self.transaction_net_value, self.transaction_cost)
    }

    /// Margin as a percentage of cost, zero when cost is not positive.
    #[must_use]
    pub fn margin_percentage(&self) -> Decimal {
        margin::margin_percentage(self.transaction_net_value, self.transaction_cost)
    }
}

/// Input for recording a new transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTransaction {
    /// City where the property is located.
    pub city: String,
    /// Property type.
    pub property_type: PropertyType,
    /// Area in square meters.
    pub area: Decimal,
    /// Date of sale.
    pub transaction_date: DateTime<Utc>,
    /// Sale value.
    pub transaction_net_value: Decimal,
    /// Acquisition and total cost.
    pub transaction_cost: Decimal,
}

/// Partial update of an existing transaction. Absent fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransactionUpdate {
    /// New city.
    pub city: Option<String>,
    /// New property type.
    pub property_type: Option<PropertyType>,
    /// New area.
    pub area: Option<Decimal>,
    /// New date of sale.
    pub transaction_date: Option<DateTime<Utc>>,
    /// New sale value.
    pub transaction_net_value: Option<Decimal>,
    /// New cost.
    pub transaction_cost: Option<Decimal>,
}

impl TransactionUpdate {
    /// Returns true if the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.property_type.is_none()
            && self.area.is_none()
            && self.transaction_date.is_none()
            && self.transaction_net_value.is_none()
            && self.transaction_cost.is_none()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample() -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            city: "Paris".to_string(),
            property_type: PropertyType::Apartment,
            area: dec!(85),
            transaction_date: Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
            transaction_net_value: dec!(500000),
            transaction_cost: dec!(400000),
        }
    }

    #[test]
    fn test_transaction_margin() {
        let tx = sample();
        assert_eq!(tx.margin(), dec!(100000));
        assert_eq!(tx.margin_percentage(), dec!(25));
    }

    #[test]
    fn test_transaction_zero_cost_percentage() {
        let tx = Transaction {
            transaction_cost: Decimal::ZERO,
            ..sample()
        };
        assert_eq!(tx.margin(), dec!(500000));
        assert_eq!(tx.margin_percentage(), Decimal::ZERO);
    }

    #[test]
    fn test_property_type_round_trip_names() {
        for property_type in PropertyType::ALL {
            assert_eq!(
                property_type.as_str().parse::<PropertyType>(),
                Ok(property_type)
            );
            assert_eq!(
                serde_json::to_value(property_type).unwrap(),
                serde_json::json!(property_type.as_str())
            );
        }
    }

    #[test]
    fn test_property_type_rejects_unknown() {
        assert!("apartment".parse::<PropertyType>().is_err());
        assert!("CASTLE".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_transaction_serializes_camel_case_numbers() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["city"], "Paris");
        assert_eq!(value["propertyType"], "APARTMENT");
        assert_eq!(value["transactionNetValue"], serde_json::json!(500_000.0));
        assert_eq!(value["transactionDate"], "2025-01-15T10:00:00Z");
    }

    #[test]
    fn test_new_transaction_rejects_unknown_fields() {
        let body = serde_json::json!({
            "city": "Lyon",
            "propertyType": "HOUSE",
            "area": 120,
            "transactionDate": "2025-01-15T10:00:00Z",
            "transactionNetValue": 600000,
            "transactionCost": 450000,
            "discount": 10
        });
        assert!(serde_json::from_value::<NewTransaction>(body).is_err());
    }

    #[test]
    fn test_update_is_empty() {
        assert!(TransactionUpdate::default().is_empty());
        let update = TransactionUpdate {
            city: Some("Nice".to_string()),
            ..TransactionUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
