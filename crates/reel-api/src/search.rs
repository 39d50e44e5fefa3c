//! Handler for `GET /search`.
//!
//! Matching is a case-insensitive substring test against video titles. A
//! missing or empty `q` returns every video.

use axum::{
  Json,
  extract::{Query, State},
};
use reel_core::{store::VideoStore, video::Video};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  pub q: Option<String>,
}

/// `GET /search[?q=...]`
pub async fn handler<S>(
  State(state): State<ApiState<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Video>>, ApiError>
where
  S: VideoStore + 'static,
{
  let query = params.q.unwrap_or_default();
  let videos = state
    .store
    .search_videos(&query)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(videos))
}
