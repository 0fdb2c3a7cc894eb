//! Roster - an employee directory data-access layer
//!
//! This library provides a conventional data-access stack for an employee
//! directory: SeaORM entities, a repository abstraction with an explicit
//! unit of work, a mapping layer between persistence entities and boundary
//! view models, and a thin service layer exposing CRUD and predicate-based
//! queries. Whatever presentation layer (API, CLI, TUI) sits on top is
//! wired in externally and only ever talks to the service.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models for database tables
//! * [`models`] - Boundary view models and entity/model mapping
//! * [`repositories`] - Repository contract consumed by the service layer
//! * [`storage`] - SeaORM-backed persistence and unit of work
//! * [`services`] - Service layer orchestrating repository and mapping

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup backed by the `log` facade and `fern`
pub mod logger;

/// View models exchanged at the service boundary
pub mod models;

/// Repository trait and predicate filters
pub mod repositories;

/// Service layer for employee CRUD and queries
pub mod services;

/// SeaORM-backed storage layer implementing the repository contract
pub mod storage;

// Re-export the main types for convenient access
pub use models::EmployeeModel;
pub use repositories::{EmployeeFilter, EmployeeRepository};
pub use services::EmployeeService;
pub use storage::{EmployeeStore, Storage};
