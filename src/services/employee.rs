//! Employee service orchestrating repository calls and model mapping.

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::models::{self, EmployeeModel};
use crate::repositories::{EmployeeFilter, EmployeeRepository};

/// Service for employee CRUD and predicate queries.
///
/// Every method maps its [`EmployeeModel`] inputs to entities, invokes the
/// matching repository operation, and maps entity results back. Write
/// methods additionally commit the staged unit of work exactly once and
/// return the commit's affected-row count; batching several changes inside
/// one call still produces a single commit. The service holds no state of
/// its own between calls, performs no retry, and propagates repository
/// failures unchanged.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// All employees, mapped to view models. No ordering guarantee.
    pub async fn get_all_employees(&self) -> Result<Vec<EmployeeModel>> {
        let entities = self.repository.get_all_employees().await?;
        Ok(models::to_models(entities))
    }

    /// The employee with the given id, or `None`.
    pub async fn get_employee_by_id(&self, id: i32) -> Result<Option<EmployeeModel>> {
        let entity = self.repository.get_employee_by_id(id).await?;
        Ok(entity.map(EmployeeModel::from))
    }

    /// All employees satisfying the filter.
    pub async fn get_employees(&self, filter: EmployeeFilter) -> Result<Vec<EmployeeModel>> {
        let entities = self.repository.get_employees(filter).await?;
        Ok(models::to_models(entities))
    }

    /// The unique employee satisfying the filter, or `None`. Errors if the
    /// filter matches more than one record.
    pub async fn single_employee(&self, filter: EmployeeFilter) -> Result<Option<EmployeeModel>> {
        let entity = self.repository.single_employee(filter).await?;
        Ok(entity.map(EmployeeModel::from))
    }

    /// The first employee satisfying the filter, or `None`.
    pub async fn first_employee(&self, filter: EmployeeFilter) -> Result<Option<EmployeeModel>> {
        let entity = self.repository.first_employee(filter).await?;
        Ok(entity.map(EmployeeModel::from))
    }

    /// Add one employee and commit. Returns the affected-row count.
    pub async fn add_employee(&self, model: EmployeeModel) -> Result<u64> {
        self.repository.add_employee(model.into()).await?;
        let affected = self.repository.save_changes().await?;
        info!("added employee, {} row(s) affected", affected);
        Ok(affected)
    }

    /// Add a batch of employees in one commit. Returns the affected-row
    /// count for the whole batch.
    pub async fn add_employees(&self, models: Vec<EmployeeModel>) -> Result<u64> {
        self.repository.add_employees(models::to_entities(models)).await?;
        let affected = self.repository.save_changes().await?;
        info!("added employee batch, {} row(s) affected", affected);
        Ok(affected)
    }

    /// Update one employee, matched by id, and commit.
    pub async fn update_employee(&self, model: EmployeeModel) -> Result<u64> {
        self.repository.update_employee(model.into()).await?;
        let affected = self.repository.save_changes().await?;
        info!("updated employee, {} row(s) affected", affected);
        Ok(affected)
    }

    /// Update a batch of employees in one commit.
    pub async fn update_employees(&self, models: Vec<EmployeeModel>) -> Result<u64> {
        self.repository.update_employees(models::to_entities(models)).await?;
        let affected = self.repository.save_changes().await?;
        info!("updated employee batch, {} row(s) affected", affected);
        Ok(affected)
    }

    /// Remove one employee and commit.
    pub async fn remove_employee(&self, model: EmployeeModel) -> Result<u64> {
        self.repository.remove_employee(model.into()).await?;
        let affected = self.repository.save_changes().await?;
        info!("removed employee, {} row(s) affected", affected);
        Ok(affected)
    }

    /// Remove the employee with the given id and commit.
    pub async fn remove_employee_by_id(&self, id: i32) -> Result<u64> {
        self.repository.remove_employee_by_id(id).await?;
        let affected = self.repository.save_changes().await?;
        info!("removed employee {}, {} row(s) affected", id, affected);
        Ok(affected)
    }

    /// Remove a batch of employees in one commit.
    pub async fn remove_employees(&self, models: Vec<EmployeeModel>) -> Result<u64> {
        self.repository.remove_employees(models::to_entities(models)).await?;
        let affected = self.repository.save_changes().await?;
        info!("removed employee batch, {} row(s) affected", affected);
        Ok(affected)
    }
}
