//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type returned by services and controllers and implements
//! `IntoResponse` so handlers can simply propagate with `?`.

pub mod config;

use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Message returned for every payload that fails the presence check.
pub const MISSING_ATTRIBUTES: &str =
    "The request body is missing at least one of the required attributes";

/// Message returned when a user reviews the same business twice.
pub const DUPLICATE_REVIEW: &str = "You have already submitted a review for this business. You can update your previous review, or delete it and submit a new review";

/// Addressable resource kinds exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Business,
    Review,
}

impl Resource {
    /// Name of the attribute identifying a row of this resource.
    pub fn id_attribute(&self) -> &'static str {
        match self {
            Self::Business => "business_id",
            Self::Review => "review_id",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Business => f.write_str("business"),
            Self::Review => f.write_str("review"),
        }
    }
}

/// Builds the body returned when a single-resource lookup finds nothing.
///
/// # Arguments
/// - `resource` - Kind of resource that was looked up
/// - `id_attribute` - Attribute name the lookup was keyed on
///
/// # Returns
/// - `ErrorDto` - `{"Error": "No <resource> with this <id_attribute> exists"}`
pub fn not_found(resource: Resource, id_attribute: &str) -> ErrorDto {
    ErrorDto {
        error: format!("No {} with this {} exists", resource, id_attribute),
    }
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Validation, not-found and conflict errors are
/// raised before any mutating statement runs; database errors are logged server-side and
/// surface to the client only as a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure at startup.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Request body or query is missing a required attribute or is malformed.
    ///
    /// Results in 400 Bad Request with the uniform missing-attributes message.
    #[error("{}", MISSING_ATTRIBUTES)]
    Validation,

    /// No row exists for the requested id.
    ///
    /// Results in 404 Not Found with a resource-specific message.
    #[error("No {0} with this {id} exists", id = .0.id_attribute())]
    NotFound(Resource),

    /// The write would duplicate existing state.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// A create operation failed at the database layer.
    ///
    /// Results in 500 Internal Server Error with a resource-specific message; the source
    /// error is logged but not exposed.
    #[error("Unable to create {resource}: {source}")]
    CreateFailed {
        resource: Resource,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl AppError {
    /// Reclassifies a database error raised during a create as `CreateFailed`.
    ///
    /// Client-facing errors (validation, not found, conflict) pass through unchanged.
    pub fn during_create_of(self, resource: Resource) -> Self {
        match self {
            Self::DbErr(source) => Self::CreateFailed { resource, source },
            err => err,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::Validation
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        AppError::Validation
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For `CreateFailed` and all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: MISSING_ATTRIBUTES.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(not_found(resource, resource.id_attribute())),
            )
                .into_response(),
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::CreateFailed { resource, source } => {
                tracing::error!("Failed to create {}: {}", resource, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: format!("Unable to create {}", resource),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
