use crate::pipeline::summary::UserSummary;
use std::cmp::Ordering;

/// Sorts the comparison rows by the fixed five-key ranking order.
///
/// Precedence and direction: likes_per_post desc, rts_per_post desc,
/// avg_polarity desc, avg_subjectivity asc, avg_post_length asc. Ties at one
/// key cascade to the next. The sort is stable, so fully tied rows keep their
/// input order, and re-ranking a ranked table changes nothing.
pub fn rank(mut summaries: Vec<UserSummary>) -> Vec<UserSummary> {
  summaries.sort_by(compare_ranking_keys);

  summaries
}

fn compare_ranking_keys(a: &UserSummary, b: &UserSummary) -> Ordering {
  b.likes_per_post
    .total_cmp(&a.likes_per_post)
    .then_with(|| b.rts_per_post.total_cmp(&a.rts_per_post))
    .then_with(|| b.avg_polarity.total_cmp(&a.avg_polarity))
    .then_with(|| a.avg_subjectivity.total_cmp(&b.avg_subjectivity))
    .then_with(|| a.avg_post_length.total_cmp(&b.avg_post_length))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn summary(
    username: &str,
    likes_per_post: f64,
    rts_per_post: f64,
    avg_polarity: f64,
    avg_subjectivity: f64,
    avg_post_length: f64,
  ) -> UserSummary {
    UserSummary {
      username: username.to_string(),
      tweet_corpus: String::new(),
      likes_per_post,
      rts_per_post,
      avg_polarity,
      avg_subjectivity,
      avg_post_length,
    }
  }

  fn usernames(summaries: &[UserSummary]) -> Vec<&str> {
    summaries
      .iter()
      .map(|summary| summary.username.as_str())
      .collect()
  }

  #[test]
  fn more_likes_per_post_ranks_first() {
    let ranked = rank(vec![
      summary("modest", 10.0, 50.0, 1.0, 0.0, 10.0),
      summary("popular", 90.0, 1.0, -1.0, 1.0, 500.0),
    ]);

    assert_eq!(usernames(&ranked), vec!["popular", "modest"]);
  }

  #[test]
  fn likes_ties_break_to_retweets_descending() {
    let ranked = rank(vec![
      summary("fewer_rts", 50.0, 3.0, 1.0, 0.0, 10.0),
      summary("more_rts", 50.0, 7.0, -1.0, 1.0, 500.0),
    ]);

    assert_eq!(usernames(&ranked), vec!["more_rts", "fewer_rts"]);
  }

  #[test]
  fn every_key_cascades_in_its_documented_direction() {
    let ranked = rank(vec![
      summary("long_posts", 50.0, 7.0, 0.5, 0.3, 120.0),
      summary("short_posts", 50.0, 7.0, 0.5, 0.3, 80.0),
      summary("less_subjective", 50.0, 7.0, 0.5, 0.1, 200.0),
      summary("more_polar", 50.0, 7.0, 0.9, 0.9, 200.0),
    ]);

    assert_eq!(
      usernames(&ranked),
      vec!["more_polar", "less_subjective", "short_posts", "long_posts"]
    );
  }

  #[test]
  fn fully_tied_rows_keep_their_input_order() {
    let ranked = rank(vec![
      summary("first_in", 10.0, 2.0, 0.0, 0.5, 100.0),
      summary("second_in", 10.0, 2.0, 0.0, 0.5, 100.0),
      summary("third_in", 10.0, 2.0, 0.0, 0.5, 100.0),
    ]);

    assert_eq!(usernames(&ranked), vec!["first_in", "second_in", "third_in"]);
  }

  #[test]
  fn ranking_is_idempotent() {
    let rows = vec![
      summary("a", 10.0, 2.0, 0.1, 0.5, 100.0),
      summary("b", 90.0, 1.0, -0.4, 0.2, 80.0),
      summary("c", 10.0, 9.0, 0.7, 0.9, 140.0),
    ];

    let ranked_once = rank(rows);
    let ranked_twice = rank(ranked_once.clone());

    assert_eq!(ranked_once, ranked_twice);
  }

  #[test]
  fn an_empty_table_ranks_to_an_empty_table() {
    assert!(rank(Vec::new()).is_empty());
  }
}
