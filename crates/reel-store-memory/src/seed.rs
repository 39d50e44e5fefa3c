//! Fixed demo catalog loaded by [`MemoryStore::seeded`](crate::MemoryStore::seeded).
//!
//! Timestamps are relative to the moment the store is built.

use chrono::{DateTime, Duration, Utc};
use reel_core::{
  channel::Channel,
  comment::Comment,
  id::{ChannelId, CommentId, UserId, VideoId},
  video::Video,
};

use crate::store::Catalog;

const SAMPLE_1080P: &str = "https://test-videos.co.uk/vids/bigbuckbunny/mp4/h264/1080/Big_Buck_Bunny_1080_10s_1MB.mp4";
const SAMPLE_720P: &str = "https://test-videos.co.uk/vids/bigbuckbunny/mp4/h264/720/Big_Buck_Bunny_720_10s_1MB.mp4";

pub(crate) fn populate(catalog: &mut Catalog, now: DateTime<Utc>) {
  let days_ago = |days: i64| now - Duration::days(days);

  for channel in [
    Channel {
      id:          ChannelId(1),
      name:        "Tech Academy".into(),
      description: Some("Learn programming and web development".into()),
      avatar_url:  "https://api.dicebear.com/7.x/personas/svg?seed=tech".into(),
      banner_url:  Some("https://picsum.photos/seed/tech/1920/1080".into()),
      subscribers: 500_000,
      verified:    true,
      created_at:  days_ago(365),
    },
    Channel {
      id:          ChannelId(2),
      name:        "Gaming Central".into(),
      description: Some("Your daily dose of gaming content".into()),
      avatar_url:  "https://api.dicebear.com/7.x/personas/svg?seed=gaming".into(),
      banner_url:  Some("https://picsum.photos/seed/gaming/1920/1080".into()),
      subscribers: 1_000_000,
      verified:    true,
      created_at:  days_ago(180),
    },
  ] {
    catalog.channels.put(channel);
  }

  for video in [
    Video {
      id:            VideoId(1),
      title:         "Complete Web Development Course 2024".into(),
      slug:          "complete-web-development-course-2024".into(),
      description:   "Learn web development from scratch with this comprehensive guide".into(),
      video_url:     SAMPLE_1080P.into(),
      thumbnail_url: "https://picsum.photos/seed/webdev/1280/720".into(),
      channel_id:    ChannelId(1),
      views:         250_000,
      likes:         25_000,
      dislikes:      500,
      duration:      "3:45:20".into(),
      created_at:    days_ago(7),
    },
    Video {
      id:            VideoId(2),
      title:         "React.js Tutorial for Beginners".into(),
      slug:          "reactjs-tutorial-for-beginners".into(),
      description:   "Step-by-step guide to learning React.js".into(),
      video_url:     SAMPLE_720P.into(),
      thumbnail_url: "https://picsum.photos/seed/react/1280/720".into(),
      channel_id:    ChannelId(1),
      views:         150_000,
      likes:         18_000,
      dislikes:      300,
      duration:      "2:30:15".into(),
      created_at:    days_ago(14),
    },
    Video {
      id:            VideoId(3),
      title:         "Top 10 Games of 2024".into(),
      slug:          "top-10-games-of-2024".into(),
      description:   "The best games released this year".into(),
      video_url:     SAMPLE_720P.into(),
      thumbnail_url: "https://picsum.photos/seed/games/1280/720".into(),
      channel_id:    ChannelId(2),
      views:         500_000,
      likes:         45_000,
      dislikes:      1_000,
      duration:      "15:30".into(),
      created_at:    days_ago(2),
    },
  ] {
    catalog.videos.put(video);
  }

  for comment in [
    Comment {
      id:         CommentId(1),
      video_id:   VideoId(1),
      user_id:    UserId(1),
      content:    "Great tutorial! Really helped me understand web development."
        .into(),
      likes:      150,
      dislikes:   0,
      created_at: days_ago(5),
    },
    Comment {
      id:         CommentId(2),
      video_id:   VideoId(1),
      user_id:    UserId(2),
      content:    "Very clear explanations. Thanks for making this!".into(),
      likes:      75,
      dislikes:   0,
      created_at: days_ago(3),
    },
  ] {
    catalog.comments.put(comment);
  }
}
