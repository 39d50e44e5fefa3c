//! Plain-text rendering for CLI output.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use reel_core::{channel::Channel, comment::Comment, ledger::InteractionRecord, video::Video};

/// `1234567` → `"1,234,567"`.
pub fn grouped(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(c);
  }
  out
}

/// Coarse relative time, e.g. `"7 days ago"`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
  let secs = (now - then).num_seconds().max(0);
  let (n, unit) = match secs {
    s if s < 60 => return "less than a minute ago".to_string(),
    s if s < 3_600 => (s / 60, "minute"),
    s if s < 86_400 => (s / 3_600, "hour"),
    s if s < 30 * 86_400 => (s / 86_400, "day"),
    s if s < 365 * 86_400 => (s / (30 * 86_400), "month"),
    s => (s / (365 * 86_400), "year"),
  };
  let plural = if n == 1 { "" } else { "s" };
  format!("{n} {unit}{plural} ago")
}

/// One line per video: id, title, views and age.
pub fn video_line(video: &Video, now: DateTime<Utc>) -> String {
  format!(
    "{:>4}  {}  ({} views, {})",
    video.id,
    video.title,
    grouped(video.views),
    time_ago(video.created_at, now)
  )
}

pub fn video_detail(video: &Video, now: DateTime<Utc>) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{}", video.title);
  let _ = writeln!(out, "  id:        {}", video.id);
  let _ = writeln!(out, "  slug:      {}", video.slug);
  let _ = writeln!(out, "  channel:   {}", video.channel_id);
  let _ = writeln!(out, "  duration:  {}", video.duration);
  let _ = writeln!(
    out,
    "  views:     {}  likes: {}  dislikes: {}",
    grouped(video.views),
    grouped(video.likes),
    grouped(video.dislikes)
  );
  let _ = writeln!(out, "  uploaded:  {}", time_ago(video.created_at, now));
  let _ = writeln!(out, "  url:       {}", video.video_url);
  let _ = write!(out, "\n{}", video.description);
  out
}

pub fn comment_line(comment: &Comment, now: DateTime<Utc>) -> String {
  format!(
    "#{} user {} · {} · +{} / -{}\n    {}",
    comment.id,
    comment.user_id,
    time_ago(comment.created_at, now),
    comment.likes,
    comment.dislikes,
    comment.content
  )
}

pub fn channel_detail(channel: &Channel) -> String {
  let mut out = String::new();
  let check = if channel.verified { " ✓" } else { "" };
  let _ = writeln!(out, "{}{check}", channel.name);
  let _ = write!(out, "  {} subscribers", grouped(channel.subscribers));
  if let Some(description) = &channel.description {
    let _ = write!(out, "\n  {description}");
  }
  out
}

pub fn interactions(record: &InteractionRecord) -> String {
  fn ids<T: ToString>(set: impl IntoIterator<Item = T>) -> String {
    let joined: Vec<String> = set.into_iter().map(|id| id.to_string()).collect();
    if joined.is_empty() {
      "-".to_string()
    } else {
      joined.join(", ")
    }
  }
  format!(
    "liked videos:      {}\ndisliked videos:   {}\nliked comments:    {}\ndisliked comments: {}",
    ids(&record.liked_videos),
    ids(&record.disliked_videos),
    ids(&record.liked_comments),
    ids(&record.disliked_comments),
  )
}
