use crate::analysis::text;
use chrono::{DateTime, Utc};

/// One social-media post as the pipeline sees it.
///
/// `is_repost` and `length` are derived from `text` on demand so they can
/// never disagree with the stored body.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Post {
  pub id: String,
  pub text: String,
  pub created_at: DateTime<Utc>,
  pub like_count: u64,
  pub repost_count: u64,
}

impl Post {
  /// True iff the body starts with the literal repost marker.
  pub fn is_repost(&self) -> bool {
    text::is_repost(&self.text)
  }

  /// Character count of the body.
  pub fn length(&self) -> usize {
    self.text.chars().count()
  }
}
