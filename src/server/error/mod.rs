//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every error body
//! has the shape `{ "msg": "..." }`.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Message returned to clients for every unexpected failure.
pub const INTERNAL_SERVER_ERROR_MSG: &str = "Internal Server Error";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. `ValidationError` handles its own response
/// mapping; database and I/O failures are reported as a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request validation failure.
    ///
    /// Delegates to `ValidationError::into_response()` for 400/404 mapping.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request / 404 Not Found - For `ValidationErr`, per variant
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so that query
/// text and driver details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: INTERNAL_SERVER_ERROR_MSG.to_string(),
            }),
        )
            .into_response()
    }
}
