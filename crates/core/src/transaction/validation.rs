//! Business rule validation for transaction input.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{NewTransaction, TransactionUpdate};

/// A single rule broken by transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldViolation {
    /// City is empty or whitespace.
    #[error("city must not be blank")]
    BlankCity,

    /// A numeric field is zero or negative.
    #[error("{0} must be a positive number")]
    NotPositive(&'static str),

    /// A numeric field has more decimal places than can be stored.
    #[error("{0} must have at most {1} decimal places")]
    TooManyDecimals(&'static str, u32),

    /// A numeric field is too large to be stored.
    #[error("{0} must be less than 10^{1}")]
    TooLarge(&'static str, u32),
}

/// Storable range of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Digits allowed before the decimal point.
    pub integer_digits: u32,
    /// Digits allowed after the decimal point.
    pub scale: u32,
}

impl Precision {
    fn upper_bound(self) -> Decimal {
        Decimal::from(10_i64.pow(self.integer_digits))
    }
}

/// Area in square meters: `NUMERIC(14, 2)`.
pub const AREA_PRECISION: Precision = Precision {
    integer_digits: 12,
    scale: 2,
};

/// Net value and cost: `NUMERIC(19, 4)`.
pub const AMOUNT_PRECISION: Precision = Precision {
    integer_digits: 15,
    scale: 4,
};

/// Validation errors for transaction input, all rules at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.violations))]
pub struct TransactionValidationError {
    /// Every violated rule, in field order.
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Default)]
struct Checker {
    violations: Vec<FieldViolation>,
}

impl Checker {
    fn city(&mut self, city: &str) {
        if city.trim().is_empty() {
            self.violations.push(FieldViolation::BlankCity);
        }
    }

    /// One violation at most per field: sign first, then scale, then size.
    fn positive(&mut self, field: &'static str, value: Decimal, precision: Precision) {
        let violation = if value <= Decimal::ZERO {
            FieldViolation::NotPositive(field)
        } else if value.normalize().scale() > precision.scale {
            FieldViolation::TooManyDecimals(field, precision.scale)
        } else if value >= precision.upper_bound() {
            FieldViolation::TooLarge(field, precision.integer_digits)
        } else {
            return;
        };
        self.violations.push(violation);
    }

    fn finish(self) -> Result<(), TransactionValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(TransactionValidationError {
                violations: self.violations,
            })
        }
    }
}

impl NewTransaction {
    /// Validates the input before it is stored.
    ///
    /// # Errors
    ///
    /// Returns every violated rule if the city is blank or any of area,
    /// net value and cost is not positive or does not fit its column.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        let mut checker = Checker::default();
        checker.city(&self.city);
        checker.positive("area", self.area, AREA_PRECISION);
        checker.positive(
            "transactionNetValue",
            self.transaction_net_value,
            AMOUNT_PRECISION,
        );
        checker.positive("transactionCost", self.transaction_cost, AMOUNT_PRECISION);
        checker.finish()
    }
}

impl TransactionUpdate {
    /// Validates only the fields present in the update.
    ///
    /// # Errors
    ///
    /// Returns every violated rule among the supplied fields.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        let mut checker = Checker::default();
        if let Some(city) = &self.city {
            checker.city(city);
        }
        if let Some(area) = self.area {
            checker.positive("area", area, AREA_PRECISION);
        }
        if let Some(net_value) = self.transaction_net_value {
            checker.positive("transactionNetValue", net_value, AMOUNT_PRECISION);
        }
        if let Some(cost) = self.transaction_cost {
            checker.positive("transactionCost", cost, AMOUNT_PRECISION);
        }
        checker.finish()
    }
}
