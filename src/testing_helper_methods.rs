use crate::analysis::sentiment::Sentiment;
use crate::pipeline::aggregation::ScoredPost;
use crate::timeline::post::Post;
use chrono::{TimeZone, Utc};

/// Creates a post with the given data and a fixed timestamp.
pub fn generate_post(id: &str, text: &str, like_count: u64, repost_count: u64) -> Post {
  Post {
    id: id.to_string(),
    text: text.to_string(),
    created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    like_count,
    repost_count,
  }
}

/// Creates a post with the given data plus already-assigned sentiment scores.
pub fn generate_scored_post(
  id: &str,
  text: &str,
  like_count: u64,
  repost_count: u64,
  polarity: f64,
  subjectivity: f64,
) -> ScoredPost {
  ScoredPost {
    post: generate_post(id, text, like_count, repost_count),
    sentiment: Sentiment {
      polarity,
      subjectivity,
    },
  }
}
