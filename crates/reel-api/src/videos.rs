//! Handlers for `/videos` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/videos` | All videos |
//! | `GET`  | `/videos/:id` | 404 if not found |
//! | `GET`  | `/videos/by-slug/:slug` | 404 if not found |
//! | `POST` | `/videos/:id/like` | Toggle; 200 even if the video is missing |
//! | `POST` | `/videos/:id/dislike` | Toggle; 200 even if the video is missing |
//! | `POST` | `/videos/:id/view` | Count a view; 200 even if the video is missing |
//!
//! Uploads (`POST /videos`) live in [`crate::upload`].

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use reel_core::{
  Error as CoreError,
  id::VideoId,
  store::VideoStore,
  video::Video,
};

use crate::{ApiState, error::ApiError, user::ActingUser};

// ─── Reads ────────────────────────────────────────────────────────────────────

/// `GET /videos`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Video>>, ApiError>
where
  S: VideoStore + 'static,
{
  let videos = state.store.list_videos().await.map_err(ApiError::store)?;
  Ok(Json(videos))
}

/// `GET /videos/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<VideoId>,
) -> Result<Json<Video>, ApiError>
where
  S: VideoStore + 'static,
{
  let video = state
    .store
    .get_video(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(CoreError::VideoNotFound(id))?;
  Ok(Json(video))
}

/// `GET /videos/by-slug/:slug`
pub async fn get_by_slug<S>(
  State(state): State<ApiState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<Video>, ApiError>
where
  S: VideoStore + 'static,
{
  let video = state
    .store
    .get_video_by_slug(&slug)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("no video with slug {slug:?}")))?;
  Ok(Json(video))
}

// ─── Reactions & views ───────────────────────────────────────────────────────

/// `POST /videos/:id/like`
pub async fn like<S>(
  State(state): State<ApiState<S>>,
  ActingUser(user): ActingUser,
  Path(id): Path<VideoId>,
) -> Result<StatusCode, ApiError>
where
  S: VideoStore + 'static,
{
  state.store.like_video(user, id).await.map_err(ApiError::store)?;
  Ok(StatusCode::OK)
}

/// `POST /videos/:id/dislike`
pub async fn dislike<S>(
  State(state): State<ApiState<S>>,
  ActingUser(user): ActingUser,
  Path(id): Path<VideoId>,
) -> Result<StatusCode, ApiError>
where
  S: VideoStore + 'static,
{
  state
    .store
    .dislike_video(user, id)
    .await
    .map_err(ApiError::store)?;
  Ok(StatusCode::OK)
}

/// `POST /videos/:id/view`
pub async fn view<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<VideoId>,
) -> Result<StatusCode, ApiError>
where
  S: VideoStore + 'static,
{
  state.store.record_view(id).await.map_err(ApiError::store)?;
  Ok(StatusCode::OK)
}
