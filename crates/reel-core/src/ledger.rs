//! The interaction ledger: per-user like/dislike state.
//!
//! The ledger is the only place toggle semantics are decided. A toggle returns
//! a [`ReactionDelta`] and the store applies that delta to the target's
//! counters; counters are never recomputed independently.
//!
//! For every user and target, the target appears in at most one of the
//! "liked" and "disliked" sets of its kind.

use std::{
  collections::{BTreeSet, HashMap},
  fmt,
};

use serde::{Deserialize, Serialize};

use crate::id::{CommentId, UserId, VideoId};

// ─── Reactions ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
  Like,
  Dislike,
}

/// The entity a reaction is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
  Video(VideoId),
  Comment(CommentId),
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Video(id) => write!(f, "video {id}"),
      Self::Comment(id) => write!(f, "comment {id}"),
    }
  }
}

/// Net change to a target's `(likes, dislikes)` counters implied by a toggle.
/// Each component is in `{-1, 0, +1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionDelta {
  pub likes:    i8,
  pub dislikes: i8,
}

impl ReactionDelta {
  /// Apply the delta to a pair of counters, flooring each at zero.
  pub fn apply_to(self, likes: &mut u64, dislikes: &mut u64) {
    *likes = likes.saturating_add_signed(i64::from(self.likes));
    *dislikes = dislikes.saturating_add_signed(i64::from(self.dislikes));
  }
}

// ─── InteractionRecord ───────────────────────────────────────────────────────

/// One user's reactions. Sets serialise as ascending JSON arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
  pub liked_videos:      BTreeSet<VideoId>,
  pub disliked_videos:   BTreeSet<VideoId>,
  pub liked_comments:    BTreeSet<CommentId>,
  pub disliked_comments: BTreeSet<CommentId>,
}

impl InteractionRecord {
  /// The user's current reaction to `target`, if any.
  pub fn reaction_to(&self, target: Target) -> Option<Reaction> {
    let (liked, disliked) = match target {
      Target::Video(id) => {
        (self.liked_videos.contains(&id), self.disliked_videos.contains(&id))
      }
      Target::Comment(id) => (
        self.liked_comments.contains(&id),
        self.disliked_comments.contains(&id),
      ),
    };
    match (liked, disliked) {
      (true, _) => Some(Reaction::Like),
      (false, true) => Some(Reaction::Dislike),
      (false, false) => None,
    }
  }

  /// Toggle `reaction` on `target` and report the counter delta.
  ///
  /// Repeating a reaction withdraws it. Switching from the opposite reaction
  /// removes that one first.
  pub fn toggle(&mut self, target: Target, reaction: Reaction) -> ReactionDelta {
    match target {
      Target::Video(id) => toggle_in(
        &mut self.liked_videos,
        &mut self.disliked_videos,
        id,
        reaction,
      ),
      Target::Comment(id) => toggle_in(
        &mut self.liked_comments,
        &mut self.disliked_comments,
        id,
        reaction,
      ),
    }
  }
}

fn toggle_in<K: Ord>(
  liked: &mut BTreeSet<K>,
  disliked: &mut BTreeSet<K>,
  id: K,
  reaction: Reaction,
) -> ReactionDelta {
  let (chosen, opposite) = match reaction {
    Reaction::Like => (liked, disliked),
    Reaction::Dislike => (disliked, liked),
  };

  let (toward, away) = if chosen.remove(&id) {
    (-1, 0)
  } else {
    let away = if opposite.remove(&id) { -1 } else { 0 };
    chosen.insert(id);
    (1, away)
  };

  match reaction {
    Reaction::Like => ReactionDelta { likes: toward, dislikes: away },
    Reaction::Dislike => ReactionDelta { likes: away, dislikes: toward },
  }
}

// ─── InteractionLedger ───────────────────────────────────────────────────────

/// Interaction records for every user who has reacted to anything.
///
/// Records are created on a user's first toggle and never removed.
#[derive(Debug, Clone, Default)]
pub struct InteractionLedger {
  records: HashMap<UserId, InteractionRecord>,
}

impl InteractionLedger {
  pub fn new() -> Self { Self::default() }

  /// The stored record for `user`. Reads never create one; callers map `None`
  /// to [`InteractionRecord::default`].
  pub fn get(&self, user: UserId) -> Option<&InteractionRecord> {
    self.records.get(&user)
  }

  /// Toggle a reaction on behalf of `user`, creating their record if needed.
  pub fn toggle(
    &mut self,
    user: UserId,
    target: Target,
    reaction: Reaction,
  ) -> ReactionDelta {
    self.records.entry(user).or_default().toggle(target, reaction)
  }

  /// Number of users with a stored record.
  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
