//! Integer identity newtypes.
//!
//! Every id is a plain `u64` on the wire (`#[serde(transparent)]`), so path
//! segments and JSON numbers deserialise straight into the typed form.

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// Anything that can be stored in a table keyed by a sequential id.
pub trait EntityId: Copy + Ord + fmt::Debug + From<u64> {
  fn get(self) -> u64;

  /// The id following `self` in assignment order.
  fn next(self) -> Self { Self::from(self.get() + 1) }
}

macro_rules! entity_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(
      Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
      Deserialize,
    )]
    #[serde(transparent)]
    pub struct $name(pub u64);

    impl EntityId for $name {
      fn get(self) -> u64 { self.0 }
    }

    impl From<u64> for $name {
      fn from(value: u64) -> Self { Self(value) }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
      }
    }

    impl FromStr for $name {
      type Err = ParseIntError;

      fn from_str(s: &str) -> Result<Self, Self::Err> { s.parse().map(Self) }
    }
  };
}

entity_id!(
  /// Identity of a [`Video`](crate::video::Video).
  VideoId
);
entity_id!(
  /// Identity of a [`Channel`](crate::channel::Channel).
  ChannelId
);
entity_id!(
  /// Identity of a [`Comment`](crate::comment::Comment).
  CommentId
);
entity_id!(
  /// The user on whose behalf a comment or reaction is recorded.
  UserId
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_serialise_as_bare_numbers() {
    let json = serde_json::to_string(&VideoId(7)).unwrap();
    assert_eq!(json, "7");

    let back: CommentId = serde_json::from_str("42").unwrap();
    assert_eq!(back, CommentId(42));
  }

  #[test]
  fn ids_parse_from_path_segments() {
    assert_eq!("12".parse::<UserId>().unwrap(), UserId(12));
    assert!("abc".parse::<VideoId>().is_err());
    assert!("-1".parse::<ChannelId>().is_err());
  }

  #[test]
  fn next_increments() {
    assert_eq!(VideoId(3).next(), VideoId(4));
  }
}
