//! Entity re-exports.

pub use super::transactions::Entity as Transactions;
