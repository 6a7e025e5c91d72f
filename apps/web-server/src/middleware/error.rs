//! Error handling - fatal failures surface as a generic error page.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use quill_core::RepoError;

/// Application-level error type.
///
/// Not-found never lands here: handlers answer an absent post with a
/// redirect to the listing. Everything below is a storage or render
/// failure, served as a generic 500 page with the cause in the log only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage failure: {0}")]
    Storage(#[from] RepoError),

    #[error("template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("Request failed: {self}");
        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(ERROR_PAGE)
    }
}

const ERROR_PAGE: &str = "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Server error</title></head>\n<body><h1>Something went wrong</h1><p>Please try again later.</p></body>\n</html>\n";

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
