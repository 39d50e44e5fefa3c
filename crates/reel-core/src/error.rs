//! Error types for `reel-core`.

use thiserror::Error;

use crate::id::{ChannelId, VideoId};

#[derive(Debug, Error)]
pub enum Error {
  #[error("video not found: {0}")]
  VideoNotFound(VideoId),

  #[error("channel not found: {0}")]
  ChannelNotFound(ChannelId),

  #[error("invalid video data: {0}")]
  Validation(String),
}

impl Error {
  /// Whether this error reports an absent entity.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::VideoNotFound(_) | Self::ChannelNotFound(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
