//! Core business logic for Parcel.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `transaction` - Property transactions, margin math and input validation
//! - `reports` - Highest-margin, weekly margin and city performance reports

pub mod reports;
pub mod transaction;
