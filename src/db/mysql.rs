use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlSslMode};
use uuid::Uuid;

use super::{EmployeeStore, StoreError};
use crate::config::DbConfig;
use crate::models::employee::{Employee, EmployeePayload};

const SELECT_ALL: &str = "SELECT id, name, position, salary FROM employees";

/// Ids are stored as hyphenated text and generated here before insert.
const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id CHAR(36) NOT NULL PRIMARY KEY,
        name TEXT NOT NULL,
        position TEXT NOT NULL,
        salary DOUBLE NOT NULL
    )
"#;

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: String,
    name: String,
    position: String,
    salary: f64,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = StoreError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: Uuid::parse_str(&row.id)?,
            name: row.name,
            position: row.position,
            salary: row.salary,
        })
    }
}

pub struct MySqlEmployeeStore {
    pool: MySqlPool,
}

impl MySqlEmployeeStore {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlEmployeeStore { pool }
    }

    pub async fn connect(config: &DbConfig) -> Result<Self, StoreError> {
        let ssl_mode = if config.tls { MySqlSslMode::Required } else { MySqlSslMode::Preferred };
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
            .charset("utf8mb4")
            .ssl_mode(ssl_mode);

        let pool = MySqlPool::connect_with(options).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl EmployeeStore for MySqlEmployeeStore {
    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, payload: EmployeePayload) -> Result<Employee, StoreError> {
        let employee = Employee::from_payload(Uuid::new_v4(), payload);

        sqlx::query("INSERT INTO employees (id, name, position, salary) VALUES (?, ?, ?, ?)")
            .bind(employee.id.to_string())
            .bind(&employee.name)
            .bind(&employee.position)
            .bind(employee.salary)
            .execute(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Employee>, StoreError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, position, salary FROM employees WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Employee::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn update(
        &self,
        id: Uuid,
        payload: EmployeePayload,
    ) -> Result<Option<Employee>, StoreError> {
        // MySQL reports zero affected rows when the values are unchanged, so
        // existence is decided by re-reading the row instead.
        sqlx::query("UPDATE employees SET name = ?, position = ?, salary = ? WHERE id = ?")
            .bind(&payload.name)
            .bind(&payload.position)
            .bind(payload.salary)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        self.find(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
