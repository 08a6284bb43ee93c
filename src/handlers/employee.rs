use actix_web::{web, HttpResponse};
use actix_web::http::header::ContentType;
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use super::as_text;
use crate::errors::{parse_id, AppError};
use crate::models::employee::Employee;

/// Body of both create and update. Absent fields are bound as NULL.
#[derive(Deserialize, Debug)]
pub struct EmployeePayload {
    name: Option<Value>,
    date_of_joining: Option<Value>,
    designation: Option<Value>,
    gender: Option<Value>,
    email: Option<Value>,
    bio: Option<Value>,
}

pub async fn create_employee(
    pool: web::Data<PgPool>,
    new_employee: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    debug!("Create employee request: {:?}", new_employee);

    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employee (name, date_of_joining, designation, gender, email, bio) VALUES ($1, $2::date, $3, $4, $5, $6) RETURNING *",
    )
    .bind(as_text(&new_employee.name))
    .bind(as_text(&new_employee.date_of_joining))
    .bind(as_text(&new_employee.designation))
    .bind(as_text(&new_employee.gender))
    .bind(as_text(&new_employee.email))
    .bind(as_text(&new_employee.bio))
    .fetch_one(&**pool)
    .await?;

    info!("Created employee with ID - {}", employee.id);
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_employees(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employee")
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(employees))
}

// Always a list: empty when the id matches nothing.
pub async fn get_employee(
    pool: web::Data<PgPool>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;

    let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employee WHERE id = $1")
        .bind(id)
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn update_employee(
    pool: web::Data<PgPool>,
    id: web::Path<String>,
    updates: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;

    let updated = sqlx::query_as::<_, Employee>(
        "UPDATE employee SET name = $1, date_of_joining = $2::date, designation = $3, gender = $4, email = $5, bio = $6 WHERE id = $7 RETURNING *",
    )
    .bind(as_text(&updates.name))
    .bind(as_text(&updates.date_of_joining))
    .bind(as_text(&updates.designation))
    .bind(as_text(&updates.gender))
    .bind(as_text(&updates.email))
    .bind(as_text(&updates.bio))
    .bind(id)
    .fetch_optional(&**pool)
    .await?;

    match updated {
        Some(employee) => {
            info!("Updated employee with ID - {}", employee.id);
            Ok(HttpResponse::Ok().json(employee))
        }
        None => Ok(HttpResponse::Ok().content_type(ContentType::json()).finish()),
    }
}

pub async fn delete_employee(
    pool: web::Data<PgPool>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;

    let result = sqlx::query("DELETE FROM employee WHERE id = $1")
        .bind(id)
        .execute(&**pool)
        .await?;
    debug!("Delete matched {} row(s)", result.rows_affected());

    info!("Deleted employee with ID - {}", id);
    Ok(HttpResponse::Ok().json(format!("Successfully deleted employee with ID - {}", id)))
}
