//! Repository layer contract for employee persistence.
//!
//! This module defines the repository interface (trait) that abstracts data
//! access operations following the Repository pattern. The trait keeps
//! entities as pure data models while the storage layer provides the
//! concrete SeaORM-backed implementation, and any conforming implementation
//! can be substituted without changing the service layer.

pub mod employee;

pub use employee::{EmployeeFilter, EmployeeRepository};

#[cfg(test)]
pub use employee::MockEmployeeRepository;
