//! Transaction repository for property sale records.

use chrono::{DateTime, Utc};
use parcel_core::reports::TransactionStore;
use parcel_core::transaction::{NewTransaction, Transaction, TransactionUpdate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;
use uuid::Uuid;

use crate::entities::transactions;

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Transaction repository for CRUD operations and report queries.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new transaction under a fresh ID.
    ///
    /// The input is expected to be validated already.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(
        &self,
        input: NewTransaction,
    ) -> Result<transactions::Model, TransactionError> {
        let now = Utc::now().into();
        let model = transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            city: Set(input.city),
            property_type: Set(input.property_type.into()),
            area: Set(input.area),
            transaction_date: Set(input.transaction_date.into()),
            transaction_net_value: Set(input.transaction_net_value),
            transaction_cost: Set(input.transaction_cost),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        debug!(id = %model.id, "Transaction created");
        Ok(model)
    }

    /// Lists every transaction, most recent sale first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list(&self) -> Result<Vec<transactions::Model>, TransactionError> {
        let models = transactions::Entity::find()
            .order_by_desc(transactions::Column::TransactionDate)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models)
    }

    /// Finds a transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has this ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<transactions::Model, TransactionError> {
        transactions::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(TransactionError::NotFound(id))
    }

    /// Applies the supplied fields of `update` and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has this ID.
    pub async fn update(
        &self,
        id: Uuid,
        update: TransactionUpdate,
    ) -> Result<transactions::Model, TransactionError> {
        let existing = self.find_by_id(id).await?;
        let mut active: transactions::ActiveModel = existing.into();

        if let Some(city) = update.city {
            active.city = Set(city);
        }
        if let Some(property_type) = update.property_type {
            active.property_type = Set(property_type.into());
        }
        if let Some(area) = update.area {
            active.area = Set(area);
        }
        if let Some(date) = update.transaction_date {
            active.transaction_date = Set(date.into());
        }
        if let Some(net_value) = update.transaction_net_value {
            active.transaction_net_value = Set(net_value);
        }
        if let Some(cost) = update.transaction_cost {
            active.transaction_cost = Set(cost);
        }
        active.updated_at = Set(Utc::now().into());

        let model = active.update(&self.db).await?;
        debug!(id = %model.id, "Transaction updated");
        Ok(model)
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has this ID.
    pub async fn delete(&self, id: Uuid) -> Result<(), TransactionError> {
        let result = transactions::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(TransactionError::NotFound(id));
        }

        debug!(%id, "Transaction deleted");
        Ok(())
    }

    /// Deletes every transaction and returns how many rows went.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_all(&self) -> Result<u64, TransactionError> {
        let result = transactions::Entity::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl TransactionStore for TransactionRepository {
    type Error = TransactionError;

    async fn all(&self) -> Result<Vec<Transaction>, TransactionError> {
        let models = transactions::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Transaction::from).collect())
    }

    async fn top_by_net_value(&self, limit: u64) -> Result<Vec<Transaction>, TransactionError> {
        let models = transactions::Entity::find()
            .order_by_desc(transactions::Column::TransactionNetValue)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Transaction::from).collect())
    }

    async fn in_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, TransactionError> {
        let models = transactions::Entity::find()
            .filter(transactions::Column::TransactionDate.gte(start))
            .filter(transactions::Column::TransactionDate.lte(end))
            .order_by_asc(transactions::Column::TransactionDate)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Transaction::from).collect())
    }
}
