//! Handler for `GET /user/interactions`.

use axum::{Json, extract::State};
use reel_core::{ledger::InteractionRecord, store::VideoStore};

use crate::{ApiState, error::ApiError, user::ActingUser};

/// `GET /user/interactions`: the acting user's liked and disliked ids.
pub async fn handler<S>(
  State(state): State<ApiState<S>>,
  ActingUser(user): ActingUser,
) -> Result<Json<InteractionRecord>, ApiError>
where
  S: VideoStore + 'static,
{
  let record = state
    .store
    .get_user_interactions(user)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(record))
}
