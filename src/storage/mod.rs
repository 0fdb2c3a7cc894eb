//! SeaORM-backed persistence for employee records.
//!
//! This module provides database operations using SeaORM:
//! - [`Storage`] bootstraps the connection and schema
//! - [`EmployeeStore`] implements the repository contract with an explicit
//!   staged unit of work

pub mod db;
pub mod employees;

pub use db::Storage;
pub use employees::EmployeeStore;

/// Typed failures raised by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A `single` lookup's predicate matched more than one record.
    #[error("predicate matched more than one employee")]
    MultipleMatches,
}
