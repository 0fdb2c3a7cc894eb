//! Employee repository contract and predicate filters.

use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sea_orm::{ColumnTrait, Condition};

use crate::entities::employee;

/// Predicate over employee records.
///
/// Filters are plain values rather than closures so the storage layer can
/// lower them into the database's own query form, and so tests can match
/// them structurally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmployeeFilter {
    /// Matches the record with the given id.
    Id(i32),
    /// Matches records whose name equals the given value.
    Name(String),
    /// Matches records whose email equals the given value.
    EmailId(String),
    /// Matches records whose name contains the given substring.
    NameContains(String),
    /// Matches records satisfying any of the nested filters.
    Any(Vec<EmployeeFilter>),
}

impl EmployeeFilter {
    /// Lower the filter into a SeaORM condition.
    pub fn into_condition(self) -> Condition {
        match self {
            EmployeeFilter::Id(id) => Condition::all().add(employee::Column::Id.eq(id)),
            EmployeeFilter::Name(name) => Condition::all().add(employee::Column::Name.eq(name)),
            EmployeeFilter::EmailId(email) => Condition::all().add(employee::Column::EmailId.eq(email)),
            EmployeeFilter::NameContains(part) => {
                Condition::all().add(employee::Column::Name.contains(part))
            }
            EmployeeFilter::Any(filters) => {
                let mut cond = Condition::any();
                for filter in filters {
                    cond = cond.add(filter.into_condition());
                }
                cond
            }
        }
    }
}

/// Persistence operations over employee records.
///
/// Write operations only stage changes; nothing becomes visible to reads
/// until [`save_changes`](EmployeeRepository::save_changes) commits the
/// whole batch as one unit of work.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employee records, no ordering guarantee.
    async fn get_all_employees(&self) -> Result<Vec<employee::Model>>;

    /// The employee with the given id, or `None`.
    async fn get_employee_by_id(&self, id: i32) -> Result<Option<employee::Model>>;

    /// All employees satisfying the filter.
    async fn get_employees(&self, filter: EmployeeFilter) -> Result<Vec<employee::Model>>;

    /// The unique employee satisfying the filter, or `None`.
    ///
    /// More than one match is a contract violation and surfaces as an error.
    async fn single_employee(&self, filter: EmployeeFilter) -> Result<Option<employee::Model>>;

    /// The first employee satisfying the filter in natural iteration order,
    /// or `None`.
    async fn first_employee(&self, filter: EmployeeFilter) -> Result<Option<employee::Model>>;

    /// Stage an insert. Returns the staged entity; its id is assigned by
    /// the database at commit time, not here.
    async fn add_employee(&self, entity: employee::Model) -> Result<employee::Model>;

    /// Stage a batch of inserts.
    async fn add_employees(&self, entities: Vec<employee::Model>) -> Result<()>;

    /// Stage an update, matched by id.
    async fn update_employee(&self, entity: employee::Model) -> Result<employee::Model>;

    /// Stage a batch of updates, matched by id.
    async fn update_employees(&self, entities: Vec<employee::Model>) -> Result<()>;

    /// Stage a delete.
    async fn remove_employee(&self, entity: employee::Model) -> Result<()>;

    /// Stage a delete by id.
    async fn remove_employee_by_id(&self, id: i32) -> Result<()>;

    /// Stage a batch of deletes.
    async fn remove_employees(&self, entities: Vec<employee::Model>) -> Result<()>;

    /// Commit every staged change in one transaction and return the total
    /// number of rows affected.
    async fn save_changes(&self) -> Result<u64>;
}
