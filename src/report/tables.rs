use crate::pipeline::summary::UserSummary;
use tabled::{Table, Tabled};

/// One console row of the ranked comparison. The corpus column is left out,
/// it would drown the table.
#[derive(Tabled, Debug, PartialEq)]
pub struct RankingEntry {
  pub place: String,
  pub username: String,
  pub likes_per_post: f64,
  pub rts_per_post: f64,
  pub avg_polarity: f64,
  pub avg_subjectivity: f64,
  pub avg_post_length: f64,
}

impl RankingEntry {
  pub fn build_entries(ranked_summaries: &[UserSummary]) -> Vec<Self> {
    ranked_summaries
      .iter()
      .enumerate()
      .map(|(position, summary)| Self {
        place: format!("#{}", position + 1),
        username: summary.username.clone(),
        likes_per_post: summary.likes_per_post,
        rts_per_post: summary.rts_per_post,
        avg_polarity: summary.avg_polarity,
        avg_subjectivity: summary.avg_subjectivity,
        avg_post_length: summary.avg_post_length,
      })
      .collect()
  }
}

pub fn render_ranking_table(ranked_summaries: &[UserSummary]) -> String {
  Table::new(RankingEntry::build_entries(ranked_summaries)).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn summary(username: &str, likes_per_post: f64) -> UserSummary {
    UserSummary {
      username: username.to_string(),
      tweet_corpus: "unused".to_string(),
      likes_per_post,
      rts_per_post: 1.0,
      avg_polarity: 0.0,
      avg_subjectivity: 0.0,
      avg_post_length: 50.0,
    }
  }

  #[test]
  fn places_are_numbered_from_first() {
    let entries = RankingEntry::build_entries(&[summary("a", 30.0), summary("b", 10.0)]);

    assert_eq!(entries[0].place, "#1");
    assert_eq!(entries[0].username, "a");
    assert_eq!(entries[1].place, "#2");
    assert_eq!(entries[1].username, "b");
  }

  #[test]
  fn rendered_table_contains_every_username() {
    let rendered = render_ranking_table(&[summary("alpha", 30.0), summary("beta", 10.0)]);

    assert!(rendered.contains("alpha"));
    assert!(rendered.contains("beta"));
  }
}
