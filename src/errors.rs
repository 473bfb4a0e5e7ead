use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) => AppError::NotFound(e.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
            DomainError::Validation(_)
            | DomainError::SkuMismatch { .. }
            | DomainError::InsufficientStock { .. }
            | DomainError::NotAllocated { .. }
            | DomainError::InvalidSku(_)
            | DomainError::OutOfStock(_) => AppError::BadRequest(e.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.as_str(),
            AppError::Internal(detail) => {
                log::error!("request failed: {}", detail);
                "Internal server error"
            }
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "message": message }))
    }
}
