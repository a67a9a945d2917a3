use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_RENDER_FAILED, CODE_STORE_UNAVAILABLE, ERR_AUTHORS_FILE_INVALID,
    ERR_AUTHORS_FILE_UNREADABLE, ERR_RENDER_FAILED, ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    /// Machine-readable code carried by every variant.
    pub fn code(&self) -> &str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::InternalServerError { code, .. }
            | ApiError::ValidationError { code, .. } => code,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (message, errors) = match self {
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::InternalServerError { message, .. } => (message.clone(), None),
            ApiError::ValidationError { errors, .. } => {
                (ERR_VALIDATION_FAILED.to_string(), Some(errors.clone()))
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message,
            errors,
        })
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::InternalServerError {
            code: CODE_STORE_UNAVAILABLE.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::InternalServerError {
            code: CODE_STORE_UNAVAILABLE.to_string(),
            message: format!("{}: {}", ERR_AUTHORS_FILE_UNREADABLE, err),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: format!("{}: {}", ERR_AUTHORS_FILE_INVALID, err),
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        ApiError::InternalServerError {
            code: CODE_RENDER_FAILED.to_string(),
            message: format!("{}: {}", ERR_RENDER_FAILED, err),
        }
    }
}
