//! `SeaORM` Entity for transactions table.

use parcel_core::transaction::Transaction;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PropertyType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub city: String,
    pub property_type: PropertyType,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub area: Decimal,
    pub transaction_date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub transaction_net_value: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub transaction_cost: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Transaction {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            city: model.city,
            property_type: model.property_type.into(),
            area: model.area,
            transaction_date: model.transaction_date.to_utc(),
            transaction_net_value: model.transaction_net_value,
            transaction_cost: model.transaction_cost,
        }
    }
}
