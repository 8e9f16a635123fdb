use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("{0}")]
    DuplicateEntity(String),
    #[error("{0}")]
    ReferencedEntity(String),
    #[error("Database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConvertToUuidError(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEntity(_) | AppError::ReferencedEntity(_) => StatusCode::CONFLICT,
            AppError::SpecificOperationError(_) | AppError::ConversionEntityError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Body of the generic error page.
#[derive(Debug, Serialize)]
struct ErrorPage {
    template: &'static str,
    status: u16,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        }
        let page = ErrorPage {
            template: "error",
            status: status_code.as_u16(),
            message: self.to_string(),
        };
        (status_code, Json(page)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
