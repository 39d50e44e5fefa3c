//! Comments attached to a video.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{CommentId, UserId, VideoId};

/// A user's comment on a video. Created once, then only its counters change.
///
/// Neither `video_id` nor `user_id` is checked against existing entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub id:         CommentId,
  pub video_id:   VideoId,
  pub user_id:    UserId,
  pub content:    String,
  pub likes:      u64,
  #[serde(default)]
  pub dislikes:   u64,
  pub created_at: DateTime<Utc>,
}
