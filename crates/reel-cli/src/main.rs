//! `reel`, the command-line client for the Reel video API.
//!
//! # Usage
//!
//! ```text
//! reel videos
//! reel --user 2 like 1
//! reel --url http://localhost:5000 search react
//! reel --config ~/.config/reel/config.toml interactions
//! ```

mod client;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args as ClapArgs, Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use reel_core::{
  id::{ChannelId, CommentId, UserId, VideoId},
  video::NewVideo,
};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:5000";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "reel", about = "Command-line client for the Reel video API")]
struct Args {
  /// Path to a TOML config file (url, user).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the reel server (default: http://localhost:5000).
  #[arg(long, env = "REEL_URL")]
  url: Option<String>,

  /// User id to act as (default: 1).
  #[arg(long, env = "REEL_USER")]
  user: Option<UserId>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List every video.
  Videos,
  /// Show one video.
  Show { id: VideoId },
  /// Show the video with the given slug.
  Slug { slug: String },
  /// Search video titles (case-insensitive).
  Search { query: String },
  /// List the comments on a video.
  Comments { video: VideoId },
  /// Comment on a video.
  Comment { video: VideoId, text: String },
  /// Toggle a like on a video.
  Like { video: VideoId },
  /// Toggle a dislike on a video.
  Dislike { video: VideoId },
  /// Toggle a like on a comment.
  LikeComment { id: CommentId },
  /// Toggle a dislike on a comment.
  DislikeComment { id: CommentId },
  /// Count a view of a video.
  View { video: VideoId },
  /// Show a channel.
  Channel { id: ChannelId },
  /// Show what the acting user has liked and disliked.
  Interactions,
  /// Upload a new video.
  Upload(UploadArgs),
}

#[derive(ClapArgs, Debug)]
struct UploadArgs {
  #[arg(long)]
  title:         String,
  #[arg(long)]
  description:   String,
  #[arg(long)]
  video_url:     String,
  #[arg(long)]
  thumbnail_url: String,
  #[arg(long)]
  channel:       ChannelId,
  /// Running time, e.g. `12:34`.
  #[arg(long)]
  duration:      String,
  /// URL slug; derived from the title when omitted.
  #[arg(long)]
  slug:          Option<String>,
}

impl From<UploadArgs> for NewVideo {
  fn from(args: UploadArgs) -> Self {
    Self {
      title:         args.title,
      description:   args.description,
      video_url:     args.video_url,
      thumbnail_url: args.thumbnail_url,
      channel_id:    args.channel,
      duration:      args.duration,
      slug:          args.slug,
    }
  }
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug, PartialEq)]
struct ConfigFile {
  #[serde(default)]
  url:  Option<String>,
  #[serde(default)]
  user: Option<UserId>,
}

impl ConfigFile {
  fn read(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

/// CLI flags override the config file, which overrides defaults.
fn resolve(args_url: Option<String>, args_user: Option<UserId>, file: ConfigFile) -> ApiConfig {
  ApiConfig {
    base_url: args_url
      .or(file.url)
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| DEFAULT_URL.to_string()),
    user:     args_user.or(file.user).unwrap_or(UserId(1)),
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::read(path)?,
    None => ConfigFile::default(),
  };
  let api_config = resolve(args.url, args.user, file_cfg);
  tracing::debug!(url = %api_config.base_url, user = %api_config.user, "resolved config");

  let client = ApiClient::new(api_config)?;
  run(&client, args.command).await
}

async fn run(client: &ApiClient, command: Command) -> Result<()> {
  let now = Utc::now();
  match command {
    Command::Videos => {
      for video in client.list_videos().await? {
        println!("{}", render::video_line(&video, now));
      }
    }
    Command::Show { id } => {
      println!("{}", render::video_detail(&client.get_video(id).await?, now));
    }
    Command::Slug { slug } => {
      let video = client.get_video_by_slug(&slug).await?;
      println!("{}", render::video_detail(&video, now));
    }
    Command::Search { query } => {
      let hits = client.search(&query).await?;
      if hits.is_empty() {
        println!("no videos match {query:?}");
      }
      for video in hits {
        println!("{}", render::video_line(&video, now));
      }
    }
    Command::Comments { video } => {
      let comments = client.comments(video).await?;
      if comments.is_empty() {
        println!("no comments yet");
      }
      for comment in comments {
        println!("{}", render::comment_line(&comment, now));
      }
    }
    Command::Comment { video, text } => {
      let comment = client.add_comment(video, &text).await?;
      println!("added comment #{}", comment.id);
    }
    Command::Like { video } => {
      client.like_video(video).await?;
      print_video_counts(client, video).await?;
    }
    Command::Dislike { video } => {
      client.dislike_video(video).await?;
      print_video_counts(client, video).await?;
    }
    Command::LikeComment { id } => {
      client.like_comment(id).await?;
      println!("toggled like on comment #{id}");
    }
    Command::DislikeComment { id } => {
      client.dislike_comment(id).await?;
      println!("toggled dislike on comment #{id}");
    }
    Command::View { video } => {
      client.record_view(video).await?;
      let video = client.get_video(video).await?;
      println!("{} views", render::grouped(video.views));
    }
    Command::Channel { id } => {
      println!("{}", render::channel_detail(&client.channel(id).await?));
    }
    Command::Interactions => {
      println!("{}", render::interactions(&client.interactions().await?));
    }
    Command::Upload(upload) => {
      let video = client.upload(&upload.into()).await?;
      println!("uploaded #{} as /{}", video.id, video.slug);
    }
  }
  Ok(())
}

async fn print_video_counts(client: &ApiClient, id: VideoId) -> Result<()> {
  let video = client.get_video(id).await?;
  println!(
    "{}: {} likes, {} dislikes",
    video.title,
    render::grouped(video.likes),
    render::grouped(video.dislikes)
  );
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_apply_without_flags_or_file() {
    let cfg = resolve(None, None, ConfigFile::default());
    assert_eq!(cfg.base_url, DEFAULT_URL);
    assert_eq!(cfg.user, UserId(1));
  }

  #[test]
  fn flags_override_file() {
    let file: ConfigFile =
      toml::from_str("url = \"http://file:1\"\nuser = 4").unwrap();
    let cfg = resolve(Some("http://flag:2".into()), None, file);
    assert_eq!(cfg.base_url, "http://flag:2");
    assert_eq!(cfg.user, UserId(4));
  }

  #[test]
  fn empty_file_url_falls_back_to_default() {
    let file: ConfigFile = toml::from_str("url = \"\"").unwrap();
    assert_eq!(resolve(None, None, file).base_url, DEFAULT_URL);
  }

  #[test]
  fn parses_subcommands() {
    let args = Args::try_parse_from(["reel", "--user", "9", "like-comment", "2"]).unwrap();
    assert_eq!(args.user, Some(UserId(9)));
    assert!(matches!(args.command, Command::LikeComment { id } if id == CommentId(2)));

    let args = Args::try_parse_from([
      "reel",
      "upload",
      "--title",
      "Intro",
      "--description",
      "d",
      "--video-url",
      "https://x/v.mp4",
      "--thumbnail-url",
      "https://x/t.jpg",
      "--channel",
      "1",
      "--duration",
      "1:00",
    ])
    .unwrap();
    let Command::Upload(upload) = args.command else {
      panic!("expected upload");
    };
    let video: NewVideo = upload.into();
    assert_eq!(video.channel_id, ChannelId(1));
    assert_eq!(video.slug, None);
  }

  #[test]
  fn non_numeric_id_is_rejected() {
    assert!(Args::try_parse_from(["reel", "show", "abc"]).is_err());
  }
}
