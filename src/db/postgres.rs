use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgSslMode};
use uuid::Uuid;

use super::{EmployeeStore, StoreError};
use crate::config::DbConfig;
use crate::models::employee::{Employee, EmployeePayload};

const SELECT_ALL: &str = "SELECT id, name, position, salary FROM employees";

/// Ids come from the column default, `gen_random_uuid()` (PostgreSQL 13+).
const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        position TEXT NOT NULL,
        salary DOUBLE PRECISION NOT NULL
    )
"#;

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeStore { pool }
    }

    pub async fn connect(config: &DbConfig) -> Result<Self, StoreError> {
        let ssl_mode = if config.tls { PgSslMode::Require } else { PgSslMode::Prefer };
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
            .ssl_mode(ssl_mode);

        let pool = PgPool::connect_with(options).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, payload: EmployeePayload) -> Result<Employee, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, position, salary) VALUES ($1, $2, $3) \
             RETURNING id, name, position, salary",
        )
        .bind(&payload.name)
        .bind(&payload.position)
        .bind(payload.salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Employee>, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, position, salary FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    async fn update(
        &self,
        id: Uuid,
        payload: EmployeePayload,
    ) -> Result<Option<Employee>, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            "UPDATE employees SET name = $1, position = $2, salary = $3 WHERE id = $4 \
             RETURNING id, name, position, salary",
        )
        .bind(&payload.name)
        .bind(&payload.position)
        .bind(payload.salary)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
