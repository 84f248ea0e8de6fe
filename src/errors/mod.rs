use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use log::error;

use crate::db::StoreError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    DatabaseError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse { error: msg.clone() }),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse { error: msg.clone() }),
            AppError::DatabaseError(msg) => HttpResponse::InternalServerError().json(ErrorResponse { error: msg.clone() }),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        error!("Storage failure: {}", err);
        AppError::DatabaseError(err.to_string())
    }
}

impl AppError {
    pub fn employee_not_found() -> Self {
        AppError::NotFound("Employee not found".to_string())
    }
}
