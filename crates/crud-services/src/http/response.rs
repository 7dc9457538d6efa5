//! Status codes and JSON bodies for every outcome a resource service can produce.
//!
//! Errors share one shape, `{"error": <message>, "status": <code>}`; validation failures add
//! `"fields"`. Internal details are logged here and never reach the client.

use crate::http::RestResource;
use crate::validation::ValidationError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use crud_framework::FrameworkError;
use serde::Serialize;
use serde_json::json;
use std::any::Any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} no encontrado")]
    NotFound(&'static str),

    #[error("Ruta no encontrada")]
    RouteNotFound,

    #[error("Datos inválidos")]
    Validation(#[from] ValidationError),

    #[error("Método no permitido")]
    MethodNotAllowed,

    #[error("Error interno del servidor")]
    Internal(#[source] FrameworkError),

    #[error("Error interno del servidor")]
    Panicked(String),
}

impl ApiError {
    /// Maps a client error for resource `T`. A missing id is a 404, anything else a 500.
    pub fn from_framework<T: RestResource>(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(_) => ApiError::NotFound(T::LABEL),
            other => ApiError::Internal(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) | ApiError::Panicked(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        match &self {
            ApiError::Validation(e) => {
                tracing::warn!(fields = ?e.fields, "Validation failed");
                body["fields"] = json!(e.fields);
            }
            ApiError::Internal(e) => tracing::error!(error = %e, "Internal error"),
            ApiError::Panicked(detail) => tracing::error!(detail = %detail, "Handler panicked"),
            _ => tracing::debug!(status = status.as_u16(), "{}", self),
        }

        (status, Json(body)).into_response()
    }
}

/// `201 Created` with a `Location` header pointing at the new entity.
pub fn created<E: Serialize>(location: String, entity: E) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(entity),
    )
        .into_response()
}

/// `200 OK` with a JSON body.
pub fn ok<E: Serialize>(body: E) -> Response {
    Json(body).into_response()
}

/// Confirmation body for a successful delete.
pub fn deleted<T: RestResource>() -> Response {
    ok(json!({ "message": format!("{} eliminado exitosamente", T::LABEL) }))
}

/// Response for a panic caught at the service boundary.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Panicked(detail).into_response()
}
