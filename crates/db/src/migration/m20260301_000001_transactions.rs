//! Transactions migration.
//!
//! Creates the property type enum and the transactions table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(TRANSACTIONS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS transactions CASCADE;
             DROP TYPE IF EXISTS property_type;",
        )
        .await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE property_type AS ENUM ('APARTMENT', 'HOUSE', 'LAND');
";

const TRANSACTIONS_SQL: &str = r"
-- Property sales; margin figures are derived on read, never stored
CREATE TABLE transactions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    city VARCHAR(255) NOT NULL,
    property_type property_type NOT NULL,
    area NUMERIC(14, 2) NOT NULL,
    transaction_date TIMESTAMPTZ NOT NULL,
    transaction_net_value NUMERIC(19, 4) NOT NULL,
    transaction_cost NUMERIC(19, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_area_positive CHECK (area > 0),
    CONSTRAINT chk_net_value_positive CHECK (transaction_net_value > 0),
    CONSTRAINT chk_cost_non_negative CHECK (transaction_cost >= 0)
);

-- Listing and weekly report ranges
CREATE INDEX idx_transactions_date ON transactions(transaction_date DESC);

-- Highest-margin candidate pool
CREATE INDEX idx_transactions_net_value ON transactions(transaction_net_value DESC);

-- City performance grouping
CREATE INDEX idx_transactions_city ON transactions(city);
";
