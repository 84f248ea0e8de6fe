use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{DbConfig, Driver};
use crate::models::employee::{Employee, EmployeePayload};

#[cfg(test)]
pub mod memory;
pub mod mysql;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored id is not a valid UUID: {0}")]
    InvalidId(#[from] uuid::Error),
}

/// Persistence for the `employees` table. `None` and `false` mean no row
/// matched the id; every other failure is a `StoreError`.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Creates the table if it does not exist yet.
    async fn migrate(&self) -> Result<(), StoreError>;
    async fn create(&self, payload: EmployeePayload) -> Result<Employee, StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Employee>, StoreError>;
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;
    async fn update(
        &self,
        id: Uuid,
        payload: EmployeePayload,
    ) -> Result<Option<Employee>, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Opens a pool for the configured driver and auto-migrates the schema.
pub async fn connect(config: &DbConfig) -> Result<Arc<dyn EmployeeStore>, StoreError> {
    let store: Arc<dyn EmployeeStore> = match config.driver {
        Driver::Postgres => Arc::new(postgres::PgEmployeeStore::connect(config).await?),
        Driver::MySql => Arc::new(mysql::MySqlEmployeeStore::connect(config).await?),
    };
    info!(
        "Connected to {:?} database {} at {}:{}",
        config.driver, config.name, config.host, config.port
    );

    store.migrate().await?;
    info!("Schema for employees is up to date");

    Ok(store)
}
