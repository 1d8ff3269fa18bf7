//! Report computation service.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;

use super::types::{
    CityPerformance, CityPerformanceReport, HighestMarginItem, HighestMarginReport, MarginChange,
    WeeklyAverageMarginReport, WeeklyMarginSummary,
};
use super::week::{WeekBounds, WeekRange};
use crate::transaction::Transaction;
use crate::transaction::margin::{mean, percentage_change};

/// Maximum number of entries in a ranked report.
pub const TOP_LIMIT: usize = 5;

/// Service for computing reports from already fetched transactions.
///
/// Every function is pure: same input, same output, no shared state.
pub struct ReportService;

impl ReportService {
    /// Ranks candidates by margin and keeps the top five.
    ///
    /// Equal margins keep their input order.
    #[must_use]
    pub fn highest_margin(candidates: &[Transaction]) -> HighestMarginReport {
        let mut items: Vec<HighestMarginItem> =
            candidates.iter().map(HighestMarginItem::from).collect();

        items.sort_by(|a, b| b.margin.cmp(&a.margin));
        items.truncate(TOP_LIMIT);

        HighestMarginReport {
            count: items.len(),
            top_transactions: items,
        }
    }

    /// Compares average margins of the week containing `reference_now`
    /// with the week before.
    ///
    /// The two lists are taken as already split by week; they are not
    /// filtered again.
    #[must_use]
    pub fn weekly_average_margin<Tz: TimeZone>(
        current_week: &[Transaction],
        previous_week: &[Transaction],
        reference_now: &DateTime<Tz>,
    ) -> WeeklyAverageMarginReport {
        let bounds = WeekBounds::at(reference_now);
        let current = Self::summarize_week(current_week, bounds.current);
        let previous = Self::summarize_week(previous_week, bounds.previous);

        let change = MarginChange {
            margin_difference: current.average_margin.saturating_sub(previous.average_margin),
            percentage_change: percentage_change(previous.average_margin, current.average_margin),
        };

        WeeklyAverageMarginReport {
            current_week: current,
            previous_week: previous,
            change,
        }
    }

    /// Groups transactions by city and keeps the five cities with the
    /// highest average transaction value.
    ///
    /// Cities are compared as raw strings. Equal averages keep the order in
    /// which the cities were first seen.
    #[must_use]
    pub fn city_performance(transactions: &[Transaction]) -> CityPerformanceReport {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut cities: Vec<CityAccumulator<'_>> = Vec::new();

        for tx in transactions {
            let slot = *slots.entry(tx.city.as_str()).or_insert_with(|| {
                cities.push(CityAccumulator::new(&tx.city));
                cities.len() - 1
            });
            cities[slot].add(tx);
        }

        let mut ranked: Vec<CityPerformance> =
            cities.into_iter().map(CityAccumulator::finish).collect();

        ranked.sort_by(|a, b| b.average_transaction_value.cmp(&a.average_transaction_value));
        ranked.truncate(TOP_LIMIT);

        CityPerformanceReport {
            count: ranked.len(),
            top_cities: ranked,
        }
    }

    fn summarize_week(transactions: &[Transaction], range: WeekRange) -> WeeklyMarginSummary {
        let margin_sum = saturating_sum(transactions.iter().map(Transaction::margin));
        let percentage_sum =
            saturating_sum(transactions.iter().map(Transaction::margin_percentage));
        let count = transactions.len();

        WeeklyMarginSummary {
            average_margin: mean(margin_sum, count),
            average_margin_percentage: mean(percentage_sum, count),
            transaction_count: count,
            start_date: range.start,
            end_date: range.end,
        }
    }
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Running sums for one city.
struct CityAccumulator<'a> {
    city: &'a str,
    count: usize,
    total_value: Decimal,
    margin_sum: Decimal,
    percentage_sum: Decimal,
}

impl<'a> CityAccumulator<'a> {
    fn new(city: &'a str) -> Self {
        Self {
            city,
            count: 0,
            total_value: Decimal::ZERO,
            margin_sum: Decimal::ZERO,
            percentage_sum: Decimal::ZERO,
        }
    }

    fn add(&mut self, tx: &Transaction) {
        self.count += 1;
        self.total_value = self.total_value.saturating_add(tx.transaction_net_value);
        self.margin_sum = self.margin_sum.saturating_add(tx.margin());
        self.percentage_sum = self.percentage_sum.saturating_add(tx.margin_percentage());
    }

    fn finish(self) -> CityPerformance {
        CityPerformance {
            city: self.city.to_string(),
            average_transaction_value: mean(self.total_value, self.count),
            transaction_count: self.count,
            total_value: self.total_value,
            average_margin: mean(self.margin_sum, self.count),
            average_margin_percentage: mean(self.percentage_sum, self.count),
        }
    }
}
