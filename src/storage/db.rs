use anyhow::{Context, Result};
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::config::DatabaseConfig;
use crate::storage::EmployeeStore;

/// Storage manager owning the database connection.
pub struct Storage {
    pub conn: DatabaseConnection,
}

impl Storage {
    /// Connect using the given configuration and initialize the schema.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options.max_connections(config.max_connections).sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", config.url))?;

        let storage = Storage { conn };
        storage.init_schema().await?;

        info!("storage ready at {}", config.url);
        Ok(storage)
    }

    /// Connect to a private in-memory `SQLite` database. Used by tests.
    pub async fn in_memory() -> Result<Self> {
        // A single pooled connection: every in-memory connection gets its
        // own database, so a larger pool would split the data.
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .context("Failed to open in-memory database")?;

        let storage = Storage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS employees (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    email_id TEXT NOT NULL
                )
                ",
            )
            .await?;

        Ok(())
    }

    /// Employee repository bound to this storage's connection.
    pub fn employees(&self) -> EmployeeStore {
        EmployeeStore::new(self.conn.clone())
    }
}
