//! Property transactions.
//!
//! This module provides:
//! - The `Transaction` record and its `PropertyType`
//! - Margin and margin-percentage helpers shared by every report
//! - Input types for creating and updating transactions, with validation

pub mod margin;
pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{
    AMOUNT_PRECISION, AREA_PRECISION, FieldViolation, Precision, TransactionValidationError,
};
