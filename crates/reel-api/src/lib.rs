//! JSON REST API for Reel.
//!
//! Exposes an axum [`Router`] backed by any [`reel_core::store::VideoStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", reel_api::api_router(store.clone(), UserId(1)))
//! ```

pub mod channels;
pub mod comments;
pub mod error;
pub mod interactions;
pub mod search;
pub mod upload;
pub mod user;
pub mod videos;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use reel_core::{id::UserId, store::VideoStore};

pub use error::ApiError;
pub use user::{ActingUser, USER_HEADER};

// ─── State ────────────────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
#[derive(Debug)]
pub struct ApiState<S> {
  pub store:        Arc<S>,
  /// Acting user for requests that carry no [`USER_HEADER`].
  pub default_user: UserId,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:        Arc::clone(&self.store),
      default_user: self.default_user,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, default_user: UserId) -> Router<()>
where
  S: VideoStore + 'static,
{
  Router::new()
    // Videos
    .route("/videos", get(videos::list::<S>).post(upload::handler::<S>))
    .route("/videos/by-slug/{slug}", get(videos::get_by_slug::<S>))
    .route("/videos/{id}", get(videos::get_one::<S>))
    .route("/videos/{id}/like", post(videos::like::<S>))
    .route("/videos/{id}/dislike", post(videos::dislike::<S>))
    .route("/videos/{id}/view", post(videos::view::<S>))
    // Comments
    .route(
      "/videos/{id}/comments",
      get(comments::list::<S>).post(comments::create::<S>),
    )
    .route("/comments/{id}/like", post(comments::like::<S>))
    .route("/comments/{id}/dislike", post(comments::dislike::<S>))
    // Channels
    .route("/channels/{id}", get(channels::get_one::<S>))
    // Search
    .route("/search", get(search::handler::<S>))
    // Interactions
    .route("/user/interactions", get(interactions::handler::<S>))
    .with_state(ApiState { store, default_user })
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use reel_store_memory::MemoryStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  fn app() -> Router {
    Router::new().nest("/api", api_router(Arc::new(MemoryStore::seeded()), UserId(1)))
  }

  async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    headers: Vec<(&str, &str)>,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    let req = match body {
      Some(json) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
      })
    };
    (status, value)
  }

  async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, vec![], None).await
  }

  async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "POST", uri, vec![], None).await
  }

  fn upload_body() -> Value {
    json!({
      "title": "Async Rust Deep Dive",
      "description": "Futures, pinning and executors",
      "videoUrl": "https://example.com/async.mp4",
      "thumbnailUrl": "https://example.com/async.jpg",
      "channelId": 1,
      "duration": "42:00"
    })
  }

  // ── Videos ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_videos_returns_seed_catalog() {
    let app = app();
    let (status, body) = get(&app, "/api/videos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["thumbnailUrl"], "https://picsum.photos/seed/webdev/1280/720");
  }

  #[tokio::test]
  async fn get_video_and_missing_video() {
    let app = app();
    let (status, body) = get(&app, "/api/videos/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "React.js Tutorial for Beginners");

    let (status, body) = get(&app, "/api/videos/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("99"));
  }

  #[tokio::test]
  async fn non_numeric_id_is_bad_request() {
    let app = app();
    let (status, _) = get(&app, "/api/videos/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn get_video_by_slug() {
    let app = app();
    let (status, body) =
      get(&app, "/api/videos/by-slug/complete-web-development-course-2024").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, body) = get(&app, "/api/videos/by-slug/reactjs-tutorial-for-beginners").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let (status, _) = get(&app, "/api/videos/by-slug/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn like_twice_toggles_back() {
    let app = app();
    let (status, _) = post(&app, "/api/videos/1/like").await;
    assert_eq!(status, StatusCode::OK);
    let (_, video) = get(&app, "/api/videos/1").await;
    assert_eq!(video["likes"], 25_001);

    let (_, record) = get(&app, "/api/user/interactions").await;
    assert_eq!(record["likedVideos"], json!([1]));

    post(&app, "/api/videos/1/like").await;
    let (_, video) = get(&app, "/api/videos/1").await;
    assert_eq!(video["likes"], 25_000);
  }

  #[tokio::test]
  async fn dislike_after_like_moves_counts() {
    let app = app();
    post(&app, "/api/videos/1/like").await;
    post(&app, "/api/videos/1/dislike").await;

    let (_, video) = get(&app, "/api/videos/1").await;
    assert_eq!(video["likes"], 25_000);
    assert_eq!(video["dislikes"], 501);

    let (_, record) = get(&app, "/api/user/interactions").await;
    assert_eq!(record["likedVideos"], json!([]));
    assert_eq!(record["dislikedVideos"], json!([1]));
  }

  #[tokio::test]
  async fn like_missing_video_is_silent() {
    let app = app();
    let (status, _) = post(&app, "/api/videos/404/like").await;
    assert_eq!(status, StatusCode::OK);
  }

  #[tokio::test]
  async fn view_increments_views() {
    let app = app();
    let (status, _) = post(&app, "/api/videos/2/view").await;
    assert_eq!(status, StatusCode::OK);
    let (_, video) = get(&app, "/api/videos/2").await;
    assert_eq!(video["views"], 150_001);
  }

  // ── Acting user ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn user_header_selects_acting_user() {
    let app = app();
    let (status, _) =
      send(&app, "POST", "/api/videos/3/like", vec![(USER_HEADER, "7")], None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, seven) =
      send(&app, "GET", "/api/user/interactions", vec![(USER_HEADER, "7")], None).await;
    assert_eq!(seven["likedVideos"], json!([3]));

    // The default user never reacted.
    let (_, default) = get(&app, "/api/user/interactions").await;
    assert_eq!(default["likedVideos"], json!([]));
  }

  #[tokio::test]
  async fn malformed_user_header_is_bad_request() {
    let app = app();
    let (status, body) =
      send(&app, "POST", "/api/videos/1/like", vec![(USER_HEADER, "bob")], None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains(USER_HEADER));
  }

  // ── Comments ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn add_comment_returns_201_and_lists_it() {
    let app = app();
    let (status, comment) = send(
      &app,
      "POST",
      "/api/videos/1/comments",
      vec![],
      Some(json!({ "userId": 2, "content": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["id"], 3);
    assert_eq!(comment["userId"], 2);
    assert_eq!(comment["likes"], 0);

    let (_, comments) = get(&app, "/api/videos/1/comments").await;
    assert!(comments.as_array().unwrap().iter().any(|c| c["content"] == "hi"));
  }

  #[tokio::test]
  async fn comment_without_user_uses_acting_user() {
    let app = app();
    let (status, comment) = send(
      &app,
      "POST",
      "/api/videos/2/comments",
      vec![(USER_HEADER, "5")],
      Some(json!({ "content": "from header" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["userId"], 5);
  }

  #[tokio::test]
  async fn comment_body_user_wins_over_malformed_header() {
    let app = app();
    let (status, comment) = send(
      &app,
      "POST",
      "/api/videos/1/comments",
      vec![(USER_HEADER, "bob")],
      Some(json!({ "userId": 4, "content": "explicit author" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["userId"], 4);
  }

  #[tokio::test]
  async fn comment_without_user_rejects_malformed_header() {
    let app = app();
    let (status, body) = send(
      &app,
      "POST",
      "/api/videos/1/comments",
      vec![(USER_HEADER, "bob")],
      Some(json!({ "content": "no author" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains(USER_HEADER));

    let (_, comments) = get(&app, "/api/videos/1/comments").await;
    assert_eq!(comments.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn comment_without_content_is_bad_request() {
    let app = app();
    let (status, _) = send(
      &app,
      "POST",
      "/api/videos/1/comments",
      vec![],
      Some(json!({ "userId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn comments_for_unknown_video_are_empty() {
    let app = app();
    let (status, body) = get(&app, "/api/videos/404/comments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
  }

  #[tokio::test]
  async fn comment_like_and_dislike() {
    let app = app();
    post(&app, "/api/comments/1/like").await;
    let (_, comments) = get(&app, "/api/videos/1/comments").await;
    assert_eq!(comments[0]["likes"], 151);

    post(&app, "/api/comments/1/dislike").await;
    let (_, comments) = get(&app, "/api/videos/1/comments").await;
    assert_eq!(comments[0]["likes"], 150);
    assert_eq!(comments[0]["dislikes"], 1);

    let (_, record) = get(&app, "/api/user/interactions").await;
    assert_eq!(record["dislikedComments"], json!([1]));
  }

  // ── Channels ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_channel_and_missing_channel() {
    let app = app();
    let (status, body) = get(&app, "/api/channels/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Tech Academy");
    assert_eq!(body["subscribers"], 500_000);

    let (status, _) = get(&app, "/api/channels/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Search ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn search_is_case_insensitive() {
    let app = app();
    let (status, body) = get(&app, "/api/search?q=REACT").await;
    assert_eq!(status, StatusCode::OK);
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], 2);
  }

  #[tokio::test]
  async fn search_without_query_returns_all() {
    let app = app();
    let (_, body) = get(&app, "/api/search").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    let (_, body) = get(&app, "/api/search?q=").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
  }

  // ── Upload ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn upload_returns_201_with_defaults() {
    let app = app();
    let (status, video) =
      send(&app, "POST", "/api/videos", vec![], Some(upload_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(video["id"], 4);
    assert_eq!(video["views"], 0);
    assert_eq!(video["likes"], 0);
    assert_eq!(video["dislikes"], 0);
    assert_eq!(video["slug"], "async-rust-deep-dive");

    let (status, _) = get(&app, "/api/videos/4").await;
    assert_eq!(status, StatusCode::OK);
  }

  #[tokio::test]
  async fn upload_missing_field_is_bad_request() {
    let app = app();
    let mut body = upload_body();
    body.as_object_mut().unwrap().remove("title");
    let (status, resp) = send(&app, "POST", "/api/videos", vec![], Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].as_str().unwrap().starts_with("invalid video data"));
  }

  #[tokio::test]
  async fn upload_blank_title_is_bad_request() {
    let app = app();
    let mut body = upload_body();
    body["title"] = json!("  ");
    let (status, resp) = send(&app, "POST", "/api/videos", vec![], Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].as_str().unwrap().contains("title"));

    let (_, videos) = get(&app, "/api/videos").await;
    assert_eq!(videos.as_array().unwrap().len(), 3);
  }

  #[tokio::test]
  async fn upload_garbage_body_is_bad_request() {
    let app = app();
    let req = Request::builder()
      .method("POST")
      .uri("/api/videos")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }
}
