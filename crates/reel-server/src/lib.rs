//! HTTP server wiring for Reel.
//!
//! Loads [`ServerConfig`], builds the in-memory store and mounts the JSON API
//! under `/api`.

use std::{path::Path, sync::Arc};

use axum::Router;
use config::{Config, ConfigError, Environment, File, FileFormat};
use reel_core::id::UserId;
use reel_store_memory::MemoryStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Prefix for environment overrides, e.g. `REEL_PORT=8080`.
pub const ENV_PREFIX: &str = "REEL";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  /// User that requests without an `x-user-id` header act as.
  #[serde(default = "default_user_id")]
  pub default_user_id: UserId,
  /// Load the demo catalog at startup.
  #[serde(default = "default_seed")]
  pub seed:            bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }
fn default_user_id() -> UserId { UserId(1) }
fn default_seed() -> bool { true }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            default_host(),
      port:            default_port(),
      default_user_id: default_user_id(),
      seed:            default_seed(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and layer `REEL_*` environment variables on
  /// top.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Config::builder()
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix(ENV_PREFIX))
      .build()?
      .try_deserialize()
  }

  /// Parse configuration from an in-memory TOML document.
  pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
    Config::builder()
      .add_source(File::from_str(source, FileFormat::Toml))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// Build the store described by `config`.
pub fn build_store(config: &ServerConfig) -> MemoryStore {
  if config.seed {
    MemoryStore::seeded()
  } else {
    MemoryStore::new()
  }
}

/// Build the full application router with request tracing.
pub fn app(store: Arc<MemoryStore>, config: &ServerConfig) -> Router {
  Router::new()
    .nest("/api", reel_api::api_router(store, config.default_user_id))
    .layer(TraceLayer::new_for_http())
}
