use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

/// Request body for create and update. An `id` sent by the client is dropped
/// here, so the stored identifier is always the one the server assigned.
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct EmployeePayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "position must not be empty"))]
    pub position: String,
    pub salary: f64,
}

/// Request body for update. Fields left out keep their stored values, and an
/// `id` sent by the client is dropped.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "position must not be empty"))]
    pub position: Option<String>,
    pub salary: Option<f64>,
}

impl Employee {
    pub fn from_payload(id: Uuid, payload: EmployeePayload) -> Self {
        Employee {
            id,
            name: payload.name,
            position: payload.position,
            salary: payload.salary,
        }
    }

    /// Full replacement record for `self` with the submitted fields laid over it.
    pub fn merged_with(&self, update: EmployeeUpdate) -> EmployeePayload {
        EmployeePayload {
            name: update.name.unwrap_or_else(|| self.name.clone()),
            position: update.position.unwrap_or_else(|| self.position.clone()),
            salary: update.salary.unwrap_or(self.salary),
        }
    }
}
