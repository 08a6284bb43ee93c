use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use super::as_text;
use crate::errors::AppError;
use crate::models::team::Team;

#[derive(Deserialize, Debug)]
pub struct NewTeam {
    name: Option<Value>,
    email: Option<Value>,
    description: Option<Value>,
}

pub async fn create_team(
    pool: web::Data<PgPool>,
    new_team: web::Json<NewTeam>,
) -> Result<HttpResponse, AppError> {
    debug!("Create team request: {:?}", new_team);

    let team = sqlx::query_as::<_, Team>(
        "INSERT INTO team (name, email, description) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(as_text(&new_team.name))
    .bind(as_text(&new_team.email))
    .bind(as_text(&new_team.description))
    .fetch_one(&**pool)
    .await?;

    info!("Created team with ID - {}", team.id);
    Ok(HttpResponse::Ok().json(team))
}

pub async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let teams = sqlx::query_as::<_, Team>("SELECT * FROM team")
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(teams))
}
