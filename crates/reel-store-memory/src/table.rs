//! [`Table`]: an id-keyed collection of one entity type.

use std::collections::BTreeMap;

use reel_core::{
  channel::Channel,
  comment::Comment,
  id::{ChannelId, CommentId, EntityId, VideoId},
  video::Video,
};

/// An entity with a sequential integer identity.
pub trait Record {
  type Id: EntityId;

  fn id(&self) -> Self::Id;
}

impl Record for Video {
  type Id = VideoId;

  fn id(&self) -> VideoId { self.id }
}

impl Record for Channel {
  type Id = ChannelId;

  fn id(&self) -> ChannelId { self.id }
}

impl Record for Comment {
  type Id = CommentId;

  fn id(&self) -> CommentId { self.id }
}

// ─── Table ───────────────────────────────────────────────────────────────────

/// Canonical records of one entity type, keyed by id.
///
/// Iteration is in ascending id order. New ids are `max(existing) + 1`, or 1
/// for an empty table.
#[derive(Debug, Clone)]
pub struct Table<T: Record> {
  rows: BTreeMap<T::Id, T>,
}

impl<T: Record> Default for Table<T> {
  fn default() -> Self { Self { rows: BTreeMap::new() } }
}

impl<T: Record> Table<T> {
  pub fn new() -> Self { Self::default() }

  pub fn get(&self, id: T::Id) -> Option<&T> { self.rows.get(&id) }

  pub fn values(&self) -> impl Iterator<Item = &T> { self.rows.values() }

  /// Lazily scan for records matching `predicate`. Call again to restart.
  pub fn filter<'a>(
    &'a self,
    mut predicate: impl FnMut(&T) -> bool + 'a,
  ) -> impl Iterator<Item = &'a T> + 'a {
    self.rows.values().filter(move |row| predicate(*row))
  }

  /// The id the next [`insert_with`](Self::insert_with) will assign.
  pub fn next_id(&self) -> T::Id {
    self
      .rows
      .last_key_value()
      .map_or_else(|| T::Id::from(1_u64), |(id, _)| id.next())
  }

  /// Assign the next id, build the record for it, and store it.
  pub fn insert_with(&mut self, build: impl FnOnce(T::Id) -> T) -> &T {
    let id = self.next_id();
    let record = build(id);
    debug_assert_eq!(record.id(), id, "builder must use the assigned id");
    self.rows.entry(id).or_insert(record)
  }

  /// Store a record under its own id, replacing any previous holder.
  pub fn put(&mut self, record: T) { self.rows.insert(record.id(), record); }

  /// Apply `mutate` to the record with `id`. Returns `None` if absent.
  pub fn update(&mut self, id: T::Id, mutate: impl FnOnce(&mut T)) -> Option<&T> {
    let row = self.rows.get_mut(&id)?;
    mutate(row);
    Some(row)
  }

  pub fn len(&self) -> usize { self.rows.len() }

  pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use reel_core::id::{UserId, VideoId};

  use super::*;

  fn comment(id: CommentId, video: u64) -> Comment {
    Comment {
      id,
      video_id: VideoId(video),
      user_id: UserId(1),
      content: format!("comment {id}"),
      likes: 0,
      dislikes: 0,
      created_at: Utc::now(),
    }
  }

  #[test]
  fn empty_table_assigns_id_one() {
    let mut table = Table::<Comment>::new();
    assert_eq!(table.next_id(), CommentId(1));
    let stored = table.insert_with(|id| comment(id, 1));
    assert_eq!(stored.id, CommentId(1));
  }

  #[test]
  fn ids_follow_the_maximum() {
    let mut table = Table::<Comment>::new();
    table.put(comment(CommentId(2), 1));
    table.put(comment(CommentId(9), 1));

    let stored = table.insert_with(|id| comment(id, 1));
    assert_eq!(stored.id, CommentId(10));
    assert_eq!(table.len(), 3);
  }

  #[test]
  fn get_absent_is_none() {
    let table = Table::<Comment>::new();
    assert!(table.get(CommentId(1)).is_none());
  }

  #[test]
  fn filter_is_restartable() {
    let mut table = Table::<Comment>::new();
    for video in [1, 2, 1] {
      table.insert_with(|id| comment(id, video));
    }

    let first: Vec<_> = table.filter(|c| c.video_id == VideoId(1)).collect();
    let again: Vec<_> = table.filter(|c| c.video_id == VideoId(1)).collect();
    assert_eq!(first, again);
    assert_eq!(
      first.iter().map(|c| c.id).collect::<Vec<_>>(),
      [CommentId(1), CommentId(3)]
    );
  }

  #[test]
  fn update_reports_missing_rows() {
    let mut table = Table::<Comment>::new();
    table.insert_with(|id| comment(id, 1));

    let updated = table.update(CommentId(1), |c| c.likes += 5);
    assert_eq!(updated.map(|c| c.likes), Some(5));
    assert!(table.update(CommentId(2), |c| c.likes += 5).is_none());
  }
}
