//! Handler for `POST /videos`.
//!
//! The body must deserialise into a [`NewVideo`] and pass
//! [`NewVideo::validate`]; anything else is a 400 with an `{"error": ...}`
//! body. The store never sees an invalid upload.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use reel_core::{store::VideoStore, video::NewVideo};

use crate::{
  ApiState,
  error::{ApiError, json_body},
};

/// `POST /videos`: returns 201 + the stored [`Video`](reel_core::video::Video).
pub async fn handler<S>(
  State(state): State<ApiState<S>>,
  body: Result<Json<NewVideo>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: VideoStore + 'static,
{
  let input = json_body(body, "invalid video data").inspect_err(|e| {
    tracing::warn!(error = %e, "rejected malformed upload");
  })?;
  if let Err(e) = input.validate() {
    tracing::warn!(error = %e, title = %input.title, "rejected invalid upload");
    return Err(e.into());
  }

  let video = state
    .store
    .upload_video(input)
    .await
    .map_err(ApiError::store)?;
  tracing::info!(video = %video.id, title = %video.title, "video uploaded");
  Ok((StatusCode::CREATED, Json(video)))
}
