//! Handlers for comment endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/videos/:id/comments` | Empty list for unknown videos |
//! | `POST` | `/videos/:id/comments` | Body: [`NewCommentBody`]; returns 201 + stored comment |
//! | `POST` | `/comments/:id/like` | Toggle; 200 even if the comment is missing |
//! | `POST` | `/comments/:id/dislike` | Toggle; 200 even if the comment is missing |

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use reel_core::{
  comment::Comment,
  id::{CommentId, UserId, VideoId},
  store::VideoStore,
};
use serde::Deserialize;

use crate::{
  ApiState,
  error::{ApiError, json_body},
  user::ActingUser,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /videos/:id/comments`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  Path(video): Path<VideoId>,
) -> Result<Json<Vec<Comment>>, ApiError>
where
  S: VideoStore + 'static,
{
  let comments = state
    .store
    .get_video_comments(video)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(comments))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /videos/:id/comments`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentBody {
  /// Overrides the request's acting user when present.
  pub user_id: Option<UserId>,
  pub content: String,
}

/// `POST /videos/:id/comments`: returns 201 + the stored [`Comment`].
///
/// The `x-user-id` header is only consulted when the body has no `userId`.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
  Path(video): Path<VideoId>,
  body: Result<Json<NewCommentBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: VideoStore + 'static,
{
  let body = json_body(body, "invalid comment")?;
  let user = match body.user_id {
    Some(user) => user,
    None => ActingUser::from_headers(&headers, state.default_user)?.0,
  };
  let comment = state
    .store
    .add_comment(video, user, body.content)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(comment)))
}

// ─── Reactions ────────────────────────────────────────────────────────────────

/// `POST /comments/:id/like`
pub async fn like<S>(
  State(state): State<ApiState<S>>,
  ActingUser(user): ActingUser,
  Path(id): Path<CommentId>,
) -> Result<StatusCode, ApiError>
where
  S: VideoStore + 'static,
{
  state.store.like_comment(user, id).await.map_err(ApiError::store)?;
  Ok(StatusCode::OK)
}

/// `POST /comments/:id/dislike`
pub async fn dislike<S>(
  State(state): State<ApiState<S>>,
  ActingUser(user): ActingUser,
  Path(id): Path<CommentId>,
) -> Result<StatusCode, ApiError>
where
  S: VideoStore + 'static,
{
  state
    .store
    .dislike_comment(user, id)
    .await
    .map_err(ApiError::store)?;
  Ok(StatusCode::OK)
}
