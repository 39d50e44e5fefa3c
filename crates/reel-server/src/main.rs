//! Reel server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), builds an
//! in-memory catalog, and serves the JSON API under `/api`.
//!
//! Every config key can be overridden with a `REEL_` environment variable:
//!
//! ```text
//! REEL_PORT=8080 REEL_SEED=false cargo run -p reel-server --bin server
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use reel_server::{ServerConfig, app, build_store};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Reel video platform server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let store = Arc::new(build_store(&server_cfg));
  tracing::info!(
    seeded = server_cfg.seed,
    default_user = %server_cfg.default_user_id,
    "catalog ready"
  );

  let app = app(store, &server_cfg);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
