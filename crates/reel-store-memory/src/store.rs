//! [`MemoryStore`], the in-memory implementation of [`VideoStore`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use reel_core::{
  channel::Channel,
  comment::Comment,
  id::{ChannelId, CommentId, UserId, VideoId},
  ledger::{InteractionLedger, InteractionRecord, Reaction, Target},
  store::VideoStore,
  video::{NewVideo, Video},
};

use crate::{Error, Result, seed, table::Table};

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Everything the store owns. Only reachable through the store's lock.
#[derive(Debug, Default)]
pub(crate) struct Catalog {
  pub(crate) videos:       Table<Video>,
  pub(crate) channels:     Table<Channel>,
  pub(crate) comments:     Table<Comment>,
  pub(crate) interactions: InteractionLedger,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Reel catalog held entirely in process memory.
///
/// Clones share the same catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  catalog: Arc<RwLock<Catalog>>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self { Self::default() }

  /// A store pre-loaded with the demo channels, videos and comments.
  pub fn seeded() -> Self {
    let mut catalog = Catalog::default();
    seed::populate(&mut catalog, Utc::now());
    Self { catalog: Arc::new(RwLock::new(catalog)) }
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>> {
    self.catalog.read().map_err(|_| Error::LockPoisoned("read"))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>> {
    self.catalog.write().map_err(|_| Error::LockPoisoned("write"))
  }

  /// Toggle a reaction on a video and apply the ledger's delta to its
  /// counters, all under one write lock.
  fn react_to_video(
    &self,
    user: UserId,
    id: VideoId,
    reaction: Reaction,
  ) -> Result<Option<Video>> {
    let mut guard = self.write()?;
    let Catalog { videos, interactions, .. } = &mut *guard;

    if videos.get(id).is_none() {
      debug!(%user, video = %id, ?reaction, "reaction on missing video ignored");
      return Ok(None);
    }

    let delta = interactions.toggle(user, Target::Video(id), reaction);
    let video = videos
      .update(id, |v| delta.apply_to(&mut v.likes, &mut v.dislikes))
      .cloned();
    debug!(%user, video = %id, ?reaction, ?delta, "video reaction toggled");
    Ok(video)
  }

  fn react_to_comment(
    &self,
    user: UserId,
    id: CommentId,
    reaction: Reaction,
  ) -> Result<Option<Comment>> {
    let mut guard = self.write()?;
    let Catalog { comments, interactions, .. } = &mut *guard;

    if comments.get(id).is_none() {
      debug!(%user, comment = %id, ?reaction, "reaction on missing comment ignored");
      return Ok(None);
    }

    let delta = interactions.toggle(user, Target::Comment(id), reaction);
    let comment = comments
      .update(id, |c| delta.apply_to(&mut c.likes, &mut c.dislikes))
      .cloned();
    debug!(%user, comment = %id, ?reaction, ?delta, "comment reaction toggled");
    Ok(comment)
  }
}

// ─── VideoStore impl ─────────────────────────────────────────────────────────

impl VideoStore for MemoryStore {
  type Error = Error;

  // ── Videos ────────────────────────────────────────────────────────────────

  async fn list_videos(&self) -> Result<Vec<Video>> {
    Ok(self.read()?.videos.values().cloned().collect())
  }

  async fn get_video(&self, id: VideoId) -> Result<Option<Video>> {
    Ok(self.read()?.videos.get(id).cloned())
  }

  async fn get_video_by_slug(&self, slug: &str) -> Result<Option<Video>> {
    Ok(self.read()?.videos.filter(|v| v.slug == slug).next().cloned())
  }

  async fn search_videos(&self, query: &str) -> Result<Vec<Video>> {
    let needle = query.to_lowercase();
    let catalog = self.read()?;
    Ok(
      catalog
        .videos
        .filter(|v| v.title.to_lowercase().contains(&needle))
        .cloned()
        .collect(),
    )
  }

  async fn upload_video(&self, input: NewVideo) -> Result<Video> {
    let slug = input.resolved_slug();
    let mut catalog = self.write()?;
    let video = catalog
      .videos
      .insert_with(|id| Video {
        id,
        title: input.title,
        slug,
        description: input.description,
        video_url: input.video_url,
        thumbnail_url: input.thumbnail_url,
        channel_id: input.channel_id,
        views: 0,
        likes: 0,
        dislikes: 0,
        duration: input.duration,
        created_at: Utc::now(),
      })
      .clone();
    debug!(video = %video.id, slug = %video.slug, "video uploaded");
    Ok(video)
  }

  async fn record_view(&self, id: VideoId) -> Result<Option<Video>> {
    let mut catalog = self.write()?;
    let video = catalog.videos.update(id, |v| v.views += 1).cloned();
    match &video {
      Some(v) => debug!(video = %id, views = v.views, "view recorded"),
      None => debug!(video = %id, "view on missing video ignored"),
    }
    Ok(video)
  }

  // ── Channels ──────────────────────────────────────────────────────────────

  async fn get_channel(&self, id: ChannelId) -> Result<Option<Channel>> {
    Ok(self.read()?.channels.get(id).cloned())
  }

  // ── Comments ──────────────────────────────────────────────────────────────

  async fn get_video_comments(&self, video: VideoId) -> Result<Vec<Comment>> {
    let catalog = self.read()?;
    Ok(
      catalog
        .comments
        .filter(|c| c.video_id == video)
        .cloned()
        .collect(),
    )
  }

  async fn add_comment(
    &self,
    video: VideoId,
    user: UserId,
    content: String,
  ) -> Result<Comment> {
    let mut catalog = self.write()?;
    let comment = catalog
      .comments
      .insert_with(|id| Comment {
        id,
        video_id: video,
        user_id: user,
        content,
        likes: 0,
        dislikes: 0,
        created_at: Utc::now(),
      })
      .clone();
    debug!(comment = %comment.id, %video, %user, "comment added");
    Ok(comment)
  }

  // ── Reactions ─────────────────────────────────────────────────────────────

  async fn like_video(&self, user: UserId, id: VideoId) -> Result<Option<Video>> {
    self.react_to_video(user, id, Reaction::Like)
  }

  async fn dislike_video(
    &self,
    user: UserId,
    id: VideoId,
  ) -> Result<Option<Video>> {
    self.react_to_video(user, id, Reaction::Dislike)
  }

  async fn like_comment(
    &self,
    user: UserId,
    id: CommentId,
  ) -> Result<Option<Comment>> {
    self.react_to_comment(user, id, Reaction::Like)
  }

  async fn dislike_comment(
    &self,
    user: UserId,
    id: CommentId,
  ) -> Result<Option<Comment>> {
    self.react_to_comment(user, id, Reaction::Dislike)
  }

  async fn get_user_interactions(&self, user: UserId) -> Result<InteractionRecord> {
    Ok(self.read()?.interactions.get(user).cloned().unwrap_or_default())
  }
}
