//! Service layer module.
//!
//! The service is the only surface the outside world calls: it converts
//! boundary view models to persistence entities, delegates to the
//! repository contract, commits staged writes, and converts results back.

pub mod employee;

pub use employee::EmployeeService;
