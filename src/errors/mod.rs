use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

/// Every failure a handler can hit. All of them reach the client as a 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Invalid request body: {0}")]
    Payload(String),
}

#[derive(Serialize, Debug, Default)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    constraint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<String>,
}

impl ErrorResponse {
    fn from_app_error(err: &AppError) -> Self {
        let mut body = ErrorResponse {
            error: err.to_string(),
            ..Default::default()
        };

        // Carry whatever the server reported alongside the message.
        if let AppError::Database(sqlx::Error::Database(db_err)) = err {
            body.error = db_err.message().to_string();
            body.code = db_err.code().map(|code| code.into_owned());
            body.constraint = db_err.constraint().map(str::to_string);

            if let Some(pg_err) = db_err.try_downcast_ref::<PgDatabaseError>() {
                body.detail = pg_err.detail().map(str::to_string);
                body.hint = pg_err.hint().map(str::to_string);
                body.table = pg_err.table().map(str::to_string);
                body.column = pg_err.column().map(str::to_string);
            }
        }

        body
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!("{}", self);
        HttpResponse::InternalServerError().json(ErrorResponse::from_app_error(self))
    }
}

/// Routes malformed JSON bodies through `AppError` instead of actix's default 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Payload(err.to_string()).into()
}

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}
