//! Error handling - maps failures onto HTTP status codes and error pages.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blogly_core::error::{DomainError, RepoError};
use blogly_shared::ErrorResponse;
use std::fmt;

/// Application-level error type rendered as a small HTML page.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    /// Validation failure with no form to return to; form handlers redirect
    /// with a flash message instead.
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => {
                ErrorResponse::new(400, "Bad Request").with_detail(detail)
            }
            AppError::Internal(detail) => {
                // Details stay in the log.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(error_page(&error))
    }
}

fn error_page(error: &ErrorResponse) -> String {
    let heading = format!("{} {}", error.status, tera::escape_html(&error.title));
    let detail = error
        .detail
        .as_deref()
        .map(|d| format!("<p>{}</p>", tera::escape_html(d)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{heading}</title></head>\n\
         <body>\n<h1>{heading}</h1>\n{detail}\n<p><a href=\"/users\">Back to users</a></p>\n\
         </body>\n</html>\n"
    )
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Integrity(msg) => AppError::Internal(format!("integrity: {msg}")),
            DomainError::Repository(err) => err.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Internal(format!("constraint: {msg}")),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
