//! Concrete employee repository over SeaORM with a staged unit of work.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use tokio::sync::Mutex;

use crate::entities::employee;
use crate::repositories::{EmployeeFilter, EmployeeRepository};
use crate::storage::StoreError;

/// A change staged against the store, applied at commit time.
#[derive(Clone, Debug)]
enum Pending {
    Insert(employee::Model),
    Update(employee::Model),
    Delete(i32),
}

/// SeaORM-backed [`EmployeeRepository`].
///
/// Reads query the database directly. Writes stage [`Pending`] changes
/// behind a mutex; [`save_changes`](EmployeeRepository::save_changes)
/// drains the stage and applies the whole batch inside one transaction, so
/// no staged change is visible to reads before the commit returns.
pub struct EmployeeStore {
    conn: DatabaseConnection,
    pending: Mutex<Vec<Pending>>,
}

impl EmployeeStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            pending: Mutex::new(Vec::new()),
        }
    }

    async fn stage(&self, change: Pending) {
        debug!("staging {:?}", change);
        self.pending.lock().await.push(change);
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn get_all_employees(&self) -> Result<Vec<employee::Model>> {
        Ok(employee::Entity::find().all(&self.conn).await?)
    }

    async fn get_employee_by_id(&self, id: i32) -> Result<Option<employee::Model>> {
        Ok(employee::Entity::find_by_id(id).one(&self.conn).await?)
    }

    async fn get_employees(&self, filter: EmployeeFilter) -> Result<Vec<employee::Model>> {
        Ok(employee::Entity::find()
            .filter(filter.into_condition())
            .all(&self.conn)
            .await?)
    }

    async fn single_employee(&self, filter: EmployeeFilter) -> Result<Option<employee::Model>> {
        // Fetch at most two rows: one more than needed is enough to detect
        // a violated uniqueness assumption.
        let mut matches = employee::Entity::find()
            .filter(filter.into_condition())
            .limit(2)
            .all(&self.conn)
            .await?;

        if matches.len() > 1 {
            return Err(StoreError::MultipleMatches.into());
        }

        Ok(matches.pop())
    }

    async fn first_employee(&self, filter: EmployeeFilter) -> Result<Option<employee::Model>> {
        Ok(employee::Entity::find()
            .filter(filter.into_condition())
            .one(&self.conn)
            .await?)
    }

    async fn add_employee(&self, entity: employee::Model) -> Result<employee::Model> {
        self.stage(Pending::Insert(entity.clone())).await;
        Ok(entity)
    }

    async fn add_employees(&self, entities: Vec<employee::Model>) -> Result<()> {
        for entity in entities {
            self.stage(Pending::Insert(entity)).await;
        }
        Ok(())
    }

    async fn update_employee(&self, entity: employee::Model) -> Result<employee::Model> {
        self.stage(Pending::Update(entity.clone())).await;
        Ok(entity)
    }

    async fn update_employees(&self, entities: Vec<employee::Model>) -> Result<()> {
        for entity in entities {
            self.stage(Pending::Update(entity)).await;
        }
        Ok(())
    }

    async fn remove_employee(&self, entity: employee::Model) -> Result<()> {
        self.stage(Pending::Delete(entity.id)).await;
        Ok(())
    }

    async fn remove_employee_by_id(&self, id: i32) -> Result<()> {
        self.stage(Pending::Delete(id)).await;
        Ok(())
    }

    async fn remove_employees(&self, entities: Vec<employee::Model>) -> Result<()> {
        for entity in entities {
            self.stage(Pending::Delete(entity.id)).await;
        }
        Ok(())
    }

    async fn save_changes(&self) -> Result<u64> {
        let staged: Vec<Pending> = {
            let mut pending = self.pending.lock().await;
            pending.drain(..).collect()
        };

        if staged.is_empty() {
            return Ok(0);
        }

        let txn = self.conn.begin().await?;
        let mut affected: u64 = 0;

        for change in staged {
            match change {
                Pending::Insert(entity) => {
                    let active = employee::ActiveModel {
                        // Id 0 means "not assigned yet": let the database
                        // allocate one at commit.
                        id: if entity.id == 0 {
                            ActiveValue::NotSet
                        } else {
                            ActiveValue::Set(entity.id)
                        },
                        name: ActiveValue::Set(entity.name),
                        email_id: ActiveValue::Set(entity.email_id),
                    };
                    employee::Entity::insert(active).exec(&txn).await?;
                    affected += 1;
                }
                Pending::Update(entity) => {
                    let result = employee::Entity::update_many()
                        .set(employee::ActiveModel {
                            id: ActiveValue::NotSet,
                            name: ActiveValue::Set(entity.name),
                            email_id: ActiveValue::Set(entity.email_id),
                        })
                        .filter(employee::Column::Id.eq(entity.id))
                        .exec(&txn)
                        .await?;
                    affected += result.rows_affected;
                }
                Pending::Delete(id) => {
                    let result = employee::Entity::delete_many()
                        .filter(employee::Column::Id.eq(id))
                        .exec(&txn)
                        .await?;
                    affected += result.rows_affected;
                }
            }
        }

        txn.commit().await?;
        info!("unit of work committed, {} row(s) affected", affected);

        Ok(affected)
    }
}
