use crate::timeline::post::Post;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// How often one lowercased token appeared across a post set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WordCount {
  pub word: String,
  pub occurrences: usize,
}

lazy_static! {
  static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Single-pass token frequency table over the given posts, most frequent first.
///
/// Tokens are lowercased whitespace splits with common English stopwords
/// dropped. This is the data a word cloud of the post set renders from.
pub fn word_frequencies(posts: &[Post]) -> Vec<WordCount> {
  let mut counts: HashMap<String, usize> = HashMap::new();

  for post in posts {
    for token in post.text.split_whitespace() {
      let token = token.to_lowercase();

      if STOP_WORD_SET.contains(token.as_str()) {
        continue;
      }

      *counts.entry(token).or_default() += 1;
    }
  }

  let mut word_counts: Vec<WordCount> = counts
    .into_iter()
    .map(|(word, occurrences)| WordCount { word, occurrences })
    .collect();

  word_counts.sort_by(|a, b| {
    b.occurrences
      .cmp(&a.occurrences)
      .then_with(|| a.word.cmp(&b.word))
  });

  word_counts
}

const STOP_WORDS: &[&str] = &[
  "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
  "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does", "doing",
  "down", "during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "he",
  "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just",
  "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
  "other", "our", "ours", "out", "over", "own", "so", "she", "should", "some", "such", "than",
  "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
  "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
  "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
  "yours",
];
