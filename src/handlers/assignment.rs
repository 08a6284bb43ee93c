use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use super::as_text;
use crate::errors::AppError;
use crate::models::assignment::EmployeeAssignment;

#[derive(Deserialize, Debug)]
pub struct NewAssignment {
    employee_id: Option<Value>,
    team_id: Option<Value>,
}

/// Whether both ids exist is left to the foreign keys, if the schema has them.
pub async fn create_assignment(
    pool: web::Data<PgPool>,
    new_assignment: web::Json<NewAssignment>,
) -> Result<HttpResponse, AppError> {
    debug!("Create assignment request: {:?}", new_assignment);

    let assignment = sqlx::query_as::<_, EmployeeAssignment>(
        "INSERT INTO employee_assignment (employee_id, team_id) VALUES ($1::integer, $2::integer) RETURNING *",
    )
    .bind(as_text(&new_assignment.employee_id))
    .bind(as_text(&new_assignment.team_id))
    .fetch_one(&**pool)
    .await?;

    info!(
        "Assigned employee {:?} to team {:?} (ID - {})",
        assignment.employee_id, assignment.team_id, assignment.id
    );
    Ok(HttpResponse::Ok().json(assignment))
}
