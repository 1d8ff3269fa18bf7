//! `SeaORM` active enums mapped to PostgreSQL enum types.

use parcel_core::transaction::PropertyType as DomainPropertyType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `property_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "property_type")]
pub enum PropertyType {
    /// Apartment.
    #[sea_orm(string_value = "APARTMENT")]
    Apartment,
    /// House.
    #[sea_orm(string_value = "HOUSE")]
    House,
    /// Land plot.
    #[sea_orm(string_value = "LAND")]
    Land,
}

impl From<PropertyType> for DomainPropertyType {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::Apartment => Self::Apartment,
            PropertyType::House => Self::House,
            PropertyType::Land => Self::Land,
        }
    }
}

impl From<DomainPropertyType> for PropertyType {
    fn from(value: DomainPropertyType) -> Self {
        match value {
            DomainPropertyType::Apartment => Self::Apartment,
            DomainPropertyType::House => Self::House,
            DomainPropertyType::Land => Self::Land,
        }
    }
}
