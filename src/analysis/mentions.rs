use crate::analysis::text;
use crate::timeline::post::Post;
use std::collections::HashMap;

/// How often one `@handle` token appeared across a post set.
///
/// No identity resolution is attempted against real accounts. A typo'd handle
/// is counted as its own key.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MentionCount {
  pub username: String,
  pub mentions_received: usize,
}

/// Tallies every `@handle` token across the given posts, most mentioned first.
///
/// Ties are broken by username so repeated runs export identical tables.
pub fn count_mentions(posts: &[Post]) -> Vec<MentionCount> {
  let mut counts: HashMap<String, usize> = HashMap::new();

  for post in posts {
    for mention in text::extract_mentions(&post.text) {
      *counts.entry(mention).or_default() += 1;
    }
  }

  let mut mention_counts: Vec<MentionCount> = counts
    .into_iter()
    .map(|(username, mentions_received)| MentionCount {
      username,
      mentions_received,
    })
    .collect();

  mention_counts.sort_by(|a, b| {
    b.mentions_received
      .cmp(&a.mentions_received)
      .then_with(|| a.username.cmp(&b.username))
  });

  mention_counts
}
