/// One ranked comparison row.
///
/// Built once from an immutable snapshot of a handle's fetched posts and never
/// mutated afterwards. Field order matches the exported CSV columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UserSummary {
  pub username: String,
  /// Raw original-post texts joined with `". "`. Not cleaned.
  pub tweet_corpus: String,
  pub likes_per_post: f64,
  pub rts_per_post: f64,
  /// -1 to 1, scored once over the cleaned full corpus.
  pub avg_polarity: f64,
  /// 0 to 1, scored once over the cleaned full corpus.
  pub avg_subjectivity: f64,
  pub avg_post_length: f64,
}
