//! The acting user of a request.
//!
//! Identity is taken from the `x-user-id` header. Requests without one act
//! as the server's configured default user.

use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, request::Parts},
};
use reel_core::id::UserId;

use crate::{ApiState, error::ApiError};

pub const USER_HEADER: &str = "x-user-id";

/// Extractor resolving the user a request acts on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser(pub UserId);

impl ActingUser {
  /// Resolve the acting user from request headers, falling back to
  /// `default` when the header is absent. A malformed header is a 400.
  pub fn from_headers(headers: &HeaderMap, default: UserId) -> Result<Self, ApiError> {
    let Some(raw) = headers.get(USER_HEADER) else {
      return Ok(Self(default));
    };
    raw
      .to_str()
      .ok()
      .and_then(|s| s.trim().parse::<UserId>().ok())
      .map(Self)
      .ok_or_else(|| {
        ApiError::BadRequest(format!("{USER_HEADER} must be a numeric user id"))
      })
  }
}

impl<S> FromRequestParts<ApiState<S>> for ActingUser
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &ApiState<S>,
  ) -> Result<Self, Self::Rejection> {
    Self::from_headers(&parts.headers, state.default_user)
  }
}
