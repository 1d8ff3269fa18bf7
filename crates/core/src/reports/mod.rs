//! Margin and performance reports over property transactions.
//!
//! This module provides:
//! - Pure report computations (`ReportService`)
//! - Monday-to-Sunday week boundaries (`WeekBounds`)
//! - A generator that pulls candidate pools from a `TransactionStore`

pub mod error;
pub mod generator;
pub mod service;
pub mod types;
pub mod week;


pub use error::ReportError;
pub use generator::{ReportGenerator, ReportSettings, TransactionStore};
pub use service::{ReportService, TOP_LIMIT};
pub use types::*;
pub use week::{WeekBounds, WeekRange};
