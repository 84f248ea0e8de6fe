// In-memory EmployeeStore for handler tests. Rows keep insertion order.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{EmployeeStore, StoreError};
use crate::models::employee::{Employee, EmployeePayload};

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    rows: RwLock<Vec<Employee>>,
    is_offline: bool,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising the 500 path.
    pub fn offline() -> Self {
        InMemoryEmployeeStore {
            rows: RwLock::default(),
            is_offline: true,
        }
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn migrate(&self) -> Result<(), StoreError> {
        self.check_online()
    }

    async fn create(&self, payload: EmployeePayload) -> Result<Employee, StoreError> {
        self.check_online()?;
        let employee = Employee::from_payload(Uuid::new_v4(), payload);
        self.rows.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Employee>, StoreError> {
        self.check_online()?;
        Ok(self.rows.read().await.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        self.check_online()?;
        Ok(self.rows.read().await.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        payload: EmployeePayload,
    ) -> Result<Option<Employee>, StoreError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        Ok(rows.iter_mut().find(|e| e.id == id).map(|row| {
            *row = Employee::from_payload(id, payload);
            row.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }
}
