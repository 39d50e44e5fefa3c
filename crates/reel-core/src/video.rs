//! Videos, the primary catalog entity.
//!
//! A video is created by an upload and afterwards only changes through views
//! and reactions. Videos are never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  id::{ChannelId, VideoId},
};

// ─── Video ───────────────────────────────────────────────────────────────────

/// A stored video with its server-maintained counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
  pub id:            VideoId,
  pub title:         String,
  /// URL-safe form of the title; see [`slugify`].
  pub slug:          String,
  pub description:   String,
  pub video_url:     String,
  pub thumbnail_url: String,
  pub channel_id:    ChannelId,
  pub views:         u64,
  pub likes:         u64,
  pub dislikes:      u64,
  /// Free-text running time, e.g. `"3:45:20"`.
  pub duration:      String,
  /// Server-assigned; never changes after creation.
  pub created_at:    DateTime<Utc>,
}

// ─── NewVideo ────────────────────────────────────────────────────────────────

/// Input to [`crate::store::VideoStore::upload_video`].
///
/// Counters and `created_at` are always set by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
  pub title:         String,
  pub description:   String,
  pub video_url:     String,
  pub thumbnail_url: String,
  pub channel_id:    ChannelId,
  pub duration:      String,
  /// Derived from `title` when absent.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub slug:          Option<String>,
}

impl NewVideo {
  /// Check the shape rules an upload must satisfy before it reaches a store.
  pub fn validate(&self) -> Result<()> {
    let required = [
      ("title", &self.title),
      ("description", &self.description),
      ("videoUrl", &self.video_url),
      ("thumbnailUrl", &self.thumbnail_url),
      ("duration", &self.duration),
    ];
    for (field, value) in required {
      if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} must not be empty")));
      }
    }

    for (field, url) in
      [("videoUrl", &self.video_url), ("thumbnailUrl", &self.thumbnail_url)]
    {
      if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::Validation(format!(
          "{field} must be an http(s) URL"
        )));
      }
    }

    if self.channel_id.0 == 0 {
      return Err(Error::Validation(
        "channelId must be a positive integer".to_string(),
      ));
    }

    if let Some(slug) = &self.slug
      && (slug.is_empty() || slugify(slug) != *slug)
    {
      return Err(Error::Validation(format!("slug {slug:?} is not URL-safe")));
    }

    Ok(())
  }

  /// The slug to store: the caller's, or one derived from the title.
  pub fn resolved_slug(&self) -> String {
    self.slug.clone().unwrap_or_else(|| slugify(&self.title))
  }
}

// ─── Slugs ───────────────────────────────────────────────────────────────────

/// Lowercase ASCII alphanumerics, with every other run of characters collapsed
/// to a single `-` and no leading or trailing `-`.
pub fn slugify(title: &str) -> String {
  let mut slug = String::with_capacity(title.len());
  let mut pending_dash = false;
  for c in title.chars() {
    if c.is_ascii_alphanumeric() {
      if pending_dash && !slug.is_empty() {
        slug.push('-');
      }
      pending_dash = false;
      slug.push(c.to_ascii_lowercase());
    } else {
      pending_dash = true;
    }
  }
  slug
}
