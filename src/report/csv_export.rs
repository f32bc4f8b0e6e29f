use crate::analysis::mentions::MentionCount;
use crate::analysis::word_frequencies::WordCount;
use crate::errors::AppError;
use crate::pipeline::aggregation::ScoredPost;
use crate::pipeline::summary::UserSummary;
use std::io::Write;

/// Column order of the ranked comparison table.
const COMPARISON_HEADERS: [&str; 7] = [
  "username",
  "tweet_corpus",
  "likes_per_post",
  "rts_per_post",
  "avg_polarity",
  "avg_subjectivity",
  "avg_post_length",
];

/// Writes the ranked comparison table.
///
/// An empty table still gets its header row, so a run where every handle was
/// skipped produces a readable file instead of nothing.
pub fn write_comparison_table<W: Write>(
  writer: W,
  ranked_summaries: &[UserSummary],
) -> Result<(), AppError> {
  let mut csv_writer = csv::Writer::from_writer(writer);

  if ranked_summaries.is_empty() {
    csv_writer.write_record(COMPARISON_HEADERS)?;
  }

  for summary in ranked_summaries {
    csv_writer.serialize(summary)?;
  }

  csv_writer.flush()?;

  Ok(())
}

/// Writes one post per row with its derived character length and its own
/// sentiment scores.
pub fn write_post_table<W: Write>(writer: W, posts: &[ScoredPost]) -> Result<(), AppError> {
  let mut csv_writer = csv::Writer::from_writer(writer);

  for scored_post in posts {
    csv_writer.serialize(PostRecord::from(scored_post))?;
  }

  csv_writer.flush()?;

  Ok(())
}

pub fn write_mention_table<W: Write>(
  writer: W,
  mention_counts: &[MentionCount],
) -> Result<(), AppError> {
  let mut csv_writer = csv::Writer::from_writer(writer);

  for mention_count in mention_counts {
    csv_writer.serialize(mention_count)?;
  }

  csv_writer.flush()?;

  Ok(())
}

pub fn write_word_frequency_table<W: Write>(
  writer: W,
  word_counts: &[WordCount],
) -> Result<(), AppError> {
  let mut csv_writer = csv::Writer::from_writer(writer);

  for word_count in word_counts {
    csv_writer.serialize(word_count)?;
  }

  csv_writer.flush()?;

  Ok(())
}

#[derive(Debug, serde::Serialize)]
struct PostRecord<'a> {
  id: &'a str,
  text: &'a str,
  created_at: String,
  likes: u64,
  retweets: u64,
  length: usize,
  polarity: f64,
  subjectivity: f64,
}

impl<'a> From<&'a ScoredPost> for PostRecord<'a> {
  fn from(scored_post: &'a ScoredPost) -> Self {
    Self {
      id: &scored_post.post.id,
      text: &scored_post.post.text,
      created_at: scored_post.post.created_at.to_rfc3339(),
      likes: scored_post.post.like_count,
      retweets: scored_post.post.repost_count,
      length: scored_post.post.length(),
      polarity: scored_post.sentiment.polarity,
      subjectivity: scored_post.sentiment.subjectivity,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing_helper_methods::generate_scored_post;

  fn written_lines(buffer: Vec<u8>) -> Vec<String> {
    String::from_utf8(buffer)
      .unwrap()
      .lines()
      .map(|line| line.to_string())
      .collect()
  }

  #[test]
  fn comparison_table_keeps_the_documented_column_order() {
    let summaries = vec![UserSummary {
      username: "a".to_string(),
      tweet_corpus: "first post. second post".to_string(),
      likes_per_post: 15.0,
      rts_per_post: 2.0,
      avg_polarity: 0.25,
      avg_subjectivity: 0.5,
      avg_post_length: 10.5,
    }];
    let mut buffer = Vec::new();

    write_comparison_table(&mut buffer, &summaries).unwrap();

    let lines = written_lines(buffer);
    assert_eq!(
      lines[0],
      "username,tweet_corpus,likes_per_post,rts_per_post,avg_polarity,avg_subjectivity,avg_post_length"
    );
    assert_eq!(lines[1], "a,first post. second post,15.0,2.0,0.25,0.5,10.5");
  }

  #[test]
  fn empty_comparison_table_still_writes_the_header() {
    let mut buffer = Vec::new();

    write_comparison_table(&mut buffer, &[]).unwrap();

    let lines = written_lines(buffer);
    assert_eq!(lines.len(), 1);
    assert_eq!(
      lines[0],
      "username,tweet_corpus,likes_per_post,rts_per_post,avg_polarity,avg_subjectivity,avg_post_length"
    );
  }

  #[test]
  fn post_table_includes_length_and_per_post_sentiment_columns() {
    let posts = vec![generate_scored_post("1", "hello", 3, 1, 0.25, 0.5)];
    let mut buffer = Vec::new();

    write_post_table(&mut buffer, &posts).unwrap();

    let lines = written_lines(buffer);
    assert_eq!(
      lines[0],
      "id,text,created_at,likes,retweets,length,polarity,subjectivity"
    );
    assert!(lines[1].starts_with("1,hello,"));
    assert!(lines[1].ends_with(",3,1,5,0.25,0.5"));
  }

  #[test]
  fn mention_table_writes_username_and_count_columns() {
    let mention_counts = vec![MentionCount {
      username: "@bob".to_string(),
      mentions_received: 2,
    }];
    let mut buffer = Vec::new();

    write_mention_table(&mut buffer, &mention_counts).unwrap();

    let lines = written_lines(buffer);
    assert_eq!(lines[0], "username,mentions_received");
    assert_eq!(lines[1], "@bob,2");
  }
}
