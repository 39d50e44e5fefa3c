//! Async HTTP client wrapping the Reel JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reel_core::{
  channel::Channel,
  comment::Comment,
  id::{ChannelId, CommentId, UserId, VideoId},
  ledger::InteractionRecord,
  video::{NewVideo, Video},
};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

/// Header carrying the acting user on every request.
const USER_HEADER: &str = "x-user-id";

/// Connection settings for the Reel API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  pub user:     UserId,
}

/// Async HTTP client for the Reel JSON REST API.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

#[derive(Deserialize)]
struct ErrorBody {
  error: String,
}

#[derive(Serialize)]
struct CommentBody<'a> {
  content: &'a str,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  fn acting(&self, req: RequestBuilder) -> RequestBuilder {
    req.header(USER_HEADER, self.config.user.to_string())
  }

  fn get(&self, path: &str) -> RequestBuilder {
    self.acting(self.client.get(self.url(path)))
  }

  fn post(&self, path: &str) -> RequestBuilder {
    self.acting(self.client.post(self.url(path)))
  }

  /// Send `req` and fail with the server's `{"error": ..}` message on a
  /// non-2xx status.
  async fn send(req: RequestBuilder, what: &str) -> Result<Response> {
    let resp = req.send().await.with_context(|| format!("{what} failed"))?;
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    match resp.json::<ErrorBody>().await {
      Ok(body) => Err(anyhow!("{what} → {status}: {}", body.error)),
      Err(_) => Err(anyhow!("{what} → {status}")),
    }
  }

  // ── Videos ────────────────────────────────────────────────────────────────

  /// `GET /api/videos`
  pub async fn list_videos(&self) -> Result<Vec<Video>> {
    Self::send(self.get("/videos"), "GET /videos")
      .await?
      .json()
      .await
      .context("deserialising videos")
  }

  /// `GET /api/videos/{id}`
  pub async fn get_video(&self, id: VideoId) -> Result<Video> {
    let what = format!("GET /videos/{id}");
    Self::send(self.get(&format!("/videos/{id}")), &what)
      .await?
      .json()
      .await
      .context("deserialising video")
  }

  /// `GET /api/videos/by-slug/{slug}`
  pub async fn get_video_by_slug(&self, slug: &str) -> Result<Video> {
    let what = format!("GET /videos/by-slug/{slug}");
    Self::send(self.get(&format!("/videos/by-slug/{slug}")), &what)
      .await?
      .json()
      .await
      .context("deserialising video")
  }

  /// `GET /api/search?q=<query>`
  pub async fn search(&self, query: &str) -> Result<Vec<Video>> {
    Self::send(self.get("/search").query(&[("q", query)]), "GET /search")
      .await?
      .json()
      .await
      .context("deserialising search results")
  }

  /// `POST /api/videos`
  pub async fn upload(&self, video: &NewVideo) -> Result<Video> {
    Self::send(self.post("/videos").json(video), "POST /videos")
      .await?
      .json()
      .await
      .context("deserialising uploaded video")
  }

  /// `POST /api/videos/{id}/view`
  pub async fn record_view(&self, id: VideoId) -> Result<()> {
    let what = format!("POST /videos/{id}/view");
    Self::send(self.post(&format!("/videos/{id}/view")), &what).await?;
    Ok(())
  }

  /// `POST /api/videos/{id}/like`
  pub async fn like_video(&self, id: VideoId) -> Result<()> {
    let what = format!("POST /videos/{id}/like");
    Self::send(self.post(&format!("/videos/{id}/like")), &what).await?;
    Ok(())
  }

  /// `POST /api/videos/{id}/dislike`
  pub async fn dislike_video(&self, id: VideoId) -> Result<()> {
    let what = format!("POST /videos/{id}/dislike");
    Self::send(self.post(&format!("/videos/{id}/dislike")), &what).await?;
    Ok(())
  }

  // ── Comments ──────────────────────────────────────────────────────────────

  /// `GET /api/videos/{id}/comments`
  pub async fn comments(&self, video: VideoId) -> Result<Vec<Comment>> {
    let what = format!("GET /videos/{video}/comments");
    Self::send(self.get(&format!("/videos/{video}/comments")), &what)
      .await?
      .json()
      .await
      .context("deserialising comments")
  }

  /// `POST /api/videos/{id}/comments`, posted as the configured user.
  pub async fn add_comment(&self, video: VideoId, content: &str) -> Result<Comment> {
    let what = format!("POST /videos/{video}/comments");
    Self::send(
      self
        .post(&format!("/videos/{video}/comments"))
        .json(&CommentBody { content }),
      &what,
    )
    .await?
    .json()
    .await
    .context("deserialising comment")
  }

  /// `POST /api/comments/{id}/like`
  pub async fn like_comment(&self, id: CommentId) -> Result<()> {
    let what = format!("POST /comments/{id}/like");
    Self::send(self.post(&format!("/comments/{id}/like")), &what).await?;
    Ok(())
  }

  /// `POST /api/comments/{id}/dislike`
  pub async fn dislike_comment(&self, id: CommentId) -> Result<()> {
    let what = format!("POST /comments/{id}/dislike");
    Self::send(self.post(&format!("/comments/{id}/dislike")), &what).await?;
    Ok(())
  }

  // ── Channels & users ──────────────────────────────────────────────────────

  /// `GET /api/channels/{id}`
  pub async fn channel(&self, id: ChannelId) -> Result<Channel> {
    let what = format!("GET /channels/{id}");
    Self::send(self.get(&format!("/channels/{id}")), &what)
      .await?
      .json()
      .await
      .context("deserialising channel")
  }

  /// `GET /api/user/interactions`
  pub async fn interactions(&self) -> Result<InteractionRecord> {
    Self::send(self.get("/user/interactions"), "GET /user/interactions")
      .await?
      .json()
      .await
      .context("deserialising interactions")
  }
}
