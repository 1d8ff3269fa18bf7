//! Report generation on top of a transaction store.

use std::future::Future;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use parcel_shared::ReportsConfig;
use tracing::info;

use super::error::ReportError;
use super::service::ReportService;
use super::types::{CityPerformanceReport, HighestMarginReport, WeeklyAverageMarginReport};
use super::week::WeekBounds;
use crate::transaction::Transaction;

/// Read access to stored transactions.
///
/// This trait is implemented by the db crate to provide actual database queries.
pub trait TransactionStore: Send + Sync {
    /// Error returned by the underlying storage.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every stored transaction.
    fn all(&self) -> impl Future<Output = Result<Vec<Transaction>, Self::Error>> + Send;

    /// At most `limit` transactions, highest net value first.
    fn top_by_net_value(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Transaction>, Self::Error>> + Send;

    /// Transactions dated between `start` and `end`, both included.
    fn in_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Transaction>, Self::Error>> + Send;
}

/// Tunables for report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    /// How many transactions, by net value, the highest-margin report ranks.
    pub candidate_pool_size: u64,
    /// Zone whose wall clock defines week boundaries.
    pub timezone: Tz,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            candidate_pool_size: 100,
            timezone: Tz::UTC,
        }
    }
}

impl TryFrom<&ReportsConfig> for ReportSettings {
    type Error = ReportError;

    fn try_from(config: &ReportsConfig) -> Result<Self, Self::Error> {
        if config.candidate_pool_size == 0 {
            return Err(ReportError::EmptyCandidatePool);
        }
        let timezone = config
            .timezone
            .parse::<Tz>()
            .map_err(|_| ReportError::UnknownTimezone(config.timezone.clone()))?;

        Ok(Self {
            candidate_pool_size: config.candidate_pool_size,
            timezone,
        })
    }
}

/// Fetches candidate pools from a store and hands them to `ReportService`.
#[derive(Debug, Clone)]
pub struct ReportGenerator<S> {
    store: S,
    settings: ReportSettings,
}

impl<S: TransactionStore> ReportGenerator<S> {
    /// Creates a new report generator.
    #[must_use]
    pub const fn new(store: S, settings: ReportSettings) -> Self {
        Self { store, settings }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The settings in use.
    pub const fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Top five transactions by margin among the highest net values.
    ///
    /// # Errors
    ///
    /// Returns the store error if fetching candidates fails.
    pub async fn highest_margin(&self) -> Result<HighestMarginReport, S::Error> {
        info!("Fetching highest margin transactions");

        let candidates = self
            .store
            .top_by_net_value(self.settings.candidate_pool_size)
            .await?;
        let report = ReportService::highest_margin(&candidates);

        info!(
            candidates = candidates.len(),
            count = report.count,
            "Found highest margin transactions"
        );
        Ok(report)
    }

    /// Average margin of the week containing `now` against the week before.
    ///
    /// # Errors
    ///
    /// Returns the store error if fetching either week fails.
    pub async fn weekly_average_margin(
        &self,
        now: DateTime<Utc>,
    ) -> Result<WeeklyAverageMarginReport, S::Error> {
        info!("Calculating weekly average margin");

        let reference_now = now.with_timezone(&self.settings.timezone);
        let bounds = WeekBounds::at(&reference_now);

        let current = self
            .store
            .in_date_range(bounds.current.start, bounds.current.end)
            .await?;
        let previous = self
            .store
            .in_date_range(bounds.previous.start, bounds.previous.end)
            .await?;

        let report = ReportService::weekly_average_margin(&current, &previous, &reference_now);

        info!(
            transactions = report.current_week.transaction_count,
            average_margin = %report.current_week.average_margin.round_dp(2),
            "Current week"
        );
        info!(
            transactions = report.previous_week.transaction_count,
            average_margin = %report.previous_week.average_margin.round_dp(2),
            "Previous week"
        );
        Ok(report)
    }

    /// Five best cities by average transaction value.
    ///
    /// # Errors
    ///
    /// Returns the store error if fetching transactions fails.
    pub async fn city_performance(&self) -> Result<CityPerformanceReport, S::Error> {
        info!("Calculating city performance");

        let transactions = self.store.all().await?;
        let report = ReportService::city_performance(&transactions);

        info!(count = report.count, "Found top performing cities");
        Ok(report)
    }
}
