use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use serde_json::json;
use uuid::Uuid;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{EmployeePayload, EmployeeUpdate};
use crate::utils::validation::validate_payload;

/// Registers the `/employees` routes. Body parse failures are answered with
/// the same `{"error": ...}` shape as every other error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/employees")
                .route(web::post().to(create_employee))
                .route(web::get().to(get_employees)),
        )
        .service(
            web::resource("/employees/{id}")
                .route(web::get().to(get_employee))
                .route(web::put().to(update_employee))
                .route(web::delete().to(delete_employee)),
        );
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

// A malformed id cannot match any row, so it is reported like a missing one.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::employee_not_found())
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    new_employee: web::Json<EmployeePayload>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*new_employee)?;

    let employee = store
        .create(new_employee.into_inner())
        .await
        .map_err(AppError::from)?;
    info!("Created employee {}", employee.id);

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = parse_id(&employee_id.into_inner())?;

    let employee = store
        .find(employee_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(AppError::employee_not_found)?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = store.list().await.map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(employees))
}

/// The row is looked up before the body is read, so a missing id is a 404
/// even when the body is also malformed.
pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    employee_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = parse_id(&employee_id.into_inner())?;

    let existing = store
        .find(employee_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(AppError::employee_not_found)?;

    let updates: EmployeeUpdate = serde_json::from_slice(&body)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    validate_payload(&updates)?;

    let employee = store
        .update(employee_id, existing.merged_with(updates))
        .await
        .map_err(AppError::from)?
        .ok_or_else(AppError::employee_not_found)?;
    info!("Updated employee {}", employee.id);

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = parse_id(&employee_id.into_inner())?;

    if !store.delete(employee_id).await.map_err(AppError::from)? {
        return Err(AppError::employee_not_found().into());
    }
    info!("Deleted employee {}", employee_id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted",
    })))
}
