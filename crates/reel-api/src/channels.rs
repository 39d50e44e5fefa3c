//! Handler for `GET /channels/:id`.

use axum::{
  Json,
  extract::{Path, State},
};
use reel_core::{Error as CoreError, channel::Channel, id::ChannelId, store::VideoStore};

use crate::{ApiState, error::ApiError};

/// `GET /channels/:id`, 404 if not found.
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<ChannelId>,
) -> Result<Json<Channel>, ApiError>
where
  S: VideoStore + 'static,
{
  let channel = state
    .store
    .get_channel(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(CoreError::ChannelNotFound(id))?;
  Ok(Json(channel))
}
