//! Channels own videos. They are seeded at startup and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ChannelId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
  pub id:          ChannelId,
  pub name:        String,
  pub description: Option<String>,
  pub avatar_url:  String,
  pub banner_url:  Option<String>,
  pub subscribers: u64,
  pub verified:    bool,
  pub created_at:  DateTime<Utc>,
}
