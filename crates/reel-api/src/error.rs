//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

impl From<reel_core::Error> for ApiError {
  fn from(e: reel_core::Error) -> Self {
    if e.is_not_found() {
      Self::NotFound(e.to_string())
    } else {
      Self::BadRequest(e.to_string())
    }
  }
}

/// Unwrap a JSON body, turning any rejection into a 400 whose message starts
/// with `what`.
pub(crate) fn json_body<T>(
  body: Result<Json<T>, JsonRejection>,
  what: &str,
) -> Result<T, ApiError> {
  body
    .map(|Json(inner)| inner)
    .map_err(|rejection| {
      ApiError::BadRequest(format!("{what}: {}", rejection.body_text()))
    })
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
