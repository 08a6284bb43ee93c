pub mod assignment;
pub mod docs;
pub mod employee;
pub mod team;

use actix_web::web;
use serde_json::Value;

use crate::errors::json_error_handler;

/// Body values go to Postgres as text; the SQL casts them, so the database decides what it accepts.
pub(crate) fn as_text(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/employee")
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/employees")
                .route(web::get().to(employee::get_employees)),
        )
        .service(
            web::resource("/employee/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee)),
        )
        .service(
            web::resource("/team")
                .route(web::post().to(team::create_team)),
        )
        .service(
            web::resource("/teams")
                .route(web::get().to(team::get_teams)),
        )
        .service(
            web::resource("/employeeassignment")
                .route(web::post().to(assignment::create_assignment)),
        )
        .service(
            web::resource("/api-docs")
                .route(web::get().to(docs::swagger_ui)),
        )
        .service(
            web::resource(docs::OPENAPI_PATH)
                .route(web::get().to(docs::openapi_json)),
        );
}
