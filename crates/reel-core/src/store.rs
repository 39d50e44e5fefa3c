//! The `VideoStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `reel-store-memory`).
//! Higher layers (`reel-api`, `reel-server`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  channel::Channel,
  comment::Comment,
  id::{ChannelId, CommentId, UserId, VideoId},
  ledger::InteractionRecord,
  video::{NewVideo, Video},
};

/// Abstraction over a Reel catalog backend.
///
/// Every method is a single atomic step: no other call on the same store
/// observes a half-applied mutation.
///
/// Reactions and views aimed at a missing entity are silent no-ops and
/// resolve to `Ok(None)`; they are not errors.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait VideoStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Videos ────────────────────────────────────────────────────────────

  /// All videos, unfiltered.
  fn list_videos(
    &self,
  ) -> impl Future<Output = Result<Vec<Video>, Self::Error>> + Send + '_;

  /// Retrieve a video by id. Returns `None` if not found.
  fn get_video(
    &self,
    id: VideoId,
  ) -> impl Future<Output = Result<Option<Video>, Self::Error>> + Send + '_;

  /// Retrieve the first video whose slug equals `slug`.
  fn get_video_by_slug<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<Video>, Self::Error>> + Send + 'a;

  /// Case-insensitive substring match against titles only. An empty query
  /// matches every video.
  fn search_videos<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<Video>, Self::Error>> + Send + 'a;

  /// Store a new video. The store assigns the id, the slug when the input
  /// has none, zeroed counters and `created_at`.
  fn upload_video(
    &self,
    input: NewVideo,
  ) -> impl Future<Output = Result<Video, Self::Error>> + Send + '_;

  /// Count one view of a video.
  fn record_view(
    &self,
    id: VideoId,
  ) -> impl Future<Output = Result<Option<Video>, Self::Error>> + Send + '_;

  // ── Channels ──────────────────────────────────────────────────────────

  fn get_channel(
    &self,
    id: ChannelId,
  ) -> impl Future<Output = Result<Option<Channel>, Self::Error>> + Send + '_;

  // ── Comments ──────────────────────────────────────────────────────────

  /// All comments on `video`. An unknown video yields an empty list.
  fn get_video_comments(
    &self,
    video: VideoId,
  ) -> impl Future<Output = Result<Vec<Comment>, Self::Error>> + Send + '_;

  /// Record a comment. Neither `video` nor `user` is checked for existence.
  fn add_comment(
    &self,
    video: VideoId,
    user: UserId,
    content: String,
  ) -> impl Future<Output = Result<Comment, Self::Error>> + Send + '_;

  // ── Reactions ─────────────────────────────────────────────────────────

  /// Toggle `user`'s like on a video; returns the updated video.
  fn like_video(
    &self,
    user: UserId,
    id: VideoId,
  ) -> impl Future<Output = Result<Option<Video>, Self::Error>> + Send + '_;

  /// Toggle `user`'s dislike on a video; returns the updated video.
  fn dislike_video(
    &self,
    user: UserId,
    id: VideoId,
  ) -> impl Future<Output = Result<Option<Video>, Self::Error>> + Send + '_;

  /// Toggle `user`'s like on a comment; returns the updated comment.
  fn like_comment(
    &self,
    user: UserId,
    id: CommentId,
  ) -> impl Future<Output = Result<Option<Comment>, Self::Error>> + Send + '_;

  /// Toggle `user`'s dislike on a comment; returns the updated comment.
  fn dislike_comment(
    &self,
    user: UserId,
    id: CommentId,
  ) -> impl Future<Output = Result<Option<Comment>, Self::Error>> + Send + '_;

  /// The user's reactions, or an empty record if they have never reacted.
  fn get_user_interactions(
    &self,
    user: UserId,
  ) -> impl Future<Output = Result<InteractionRecord, Self::Error>> + Send + '_;
}
