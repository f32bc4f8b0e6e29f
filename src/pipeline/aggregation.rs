use crate::analysis::sentiment::{Sentiment, ScoringError, SentimentScorer};
use crate::analysis::text;
use crate::errors::AppError;
use crate::pipeline::summary::UserSummary;
use crate::timeline::post::Post;
use crate::timeline::{FetchError, TweetSource};
use crate::CORPUS_SEPARATOR;

/// What became of one requested handle.
///
/// Skips carry their reason so callers can tell "no data for these handles"
/// apart from "every handle ranked" without reading the logs.
#[derive(Debug)]
pub enum HandleOutcome {
  Aggregated(UserReport),
  Skipped { handle: String, reason: SkipReason },
}

/// A successfully aggregated handle: the comparison row plus the scored post
/// snapshot it was built from, kept for the per-user exports.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
  pub summary: UserSummary,
  pub posts: Vec<ScoredPost>,
}

/// One fetched post with the sentiment of its own cleaned text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPost {
  pub post: Post,
  pub sentiment: Sentiment,
}

#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
  #[error("{}", .0)]
  FetchFailed(#[from] FetchError),

  #[error("The fetch returned no posts at all.")]
  EmptyTimeline,

  #[error("Every fetched post was a repost, leaving nothing to aggregate.")]
  NoOriginalPosts,

  #[error("The cleaned corpus was empty, leaving nothing to score.")]
  UnscorableCorpus,
}

/// Aggregates every handle, in input order, into one outcome each.
///
/// Handles are processed sequentially. A handle whose fetch fails, whose
/// timeline is empty or all reposts, or whose cleaned corpus is empty is
/// skipped with a warning. A scorer failure on a non-empty cleaned corpus is a
/// collaborator contract violation and aborts the run.
pub async fn build_summaries<Source, Scorer>(
  handles: &[String],
  post_count: usize,
  source: &Source,
  scorer: &Scorer,
) -> Result<Vec<HandleOutcome>, AppError>
where
  Source: TweetSource,
  Scorer: SentimentScorer + ?Sized,
{
  let mut outcomes = Vec::with_capacity(handles.len());

  for handle in handles {
    let posts = match source.fetch_recent(handle, post_count).await {
      Ok(posts) => posts,
      Err(error) => {
        tracing::warn!("Skipping {:?}. Failed to fetch posts: {}", handle, error);

        outcomes.push(HandleOutcome::Skipped {
          handle: handle.clone(),
          reason: SkipReason::FetchFailed(error),
        });

        continue;
      }
    };

    if posts.is_empty() {
      tracing::warn!("Skipping {:?}. The fetch returned no posts.", handle);

      outcomes.push(HandleOutcome::Skipped {
        handle: handle.clone(),
        reason: SkipReason::EmptyTimeline,
      });

      continue;
    }

    let originals: Vec<&Post> = posts.iter().filter(|post| !post.is_repost()).collect();

    tracing::info!(
      "Handle: {:?} | posts requested: {} | extracted: {} | originals: {}",
      handle,
      post_count,
      posts.len(),
      originals.len()
    );

    if originals.is_empty() {
      tracing::warn!("Skipping {:?}. Every fetched post was a repost.", handle);

      outcomes.push(HandleOutcome::Skipped {
        handle: handle.clone(),
        reason: SkipReason::NoOriginalPosts,
      });

      continue;
    }

    let summary = match summarize_originals(handle, &originals, scorer) {
      Ok(summary) => summary,
      Err(ScoringError::EmptyInput) => {
        tracing::warn!("Skipping {:?}. Nothing was left to score after cleaning.", handle);

        outcomes.push(HandleOutcome::Skipped {
          handle: handle.clone(),
          reason: SkipReason::UnscorableCorpus,
        });

        continue;
      }
      Err(error) => {
        return Err(AppError::Scoring {
          handle: handle.clone(),
          source: error,
        });
      }
    };

    let scored_posts = score_posts(posts, scorer).map_err(|error| AppError::Scoring {
      handle: handle.clone(),
      source: error,
    })?;

    outcomes.push(HandleOutcome::Aggregated(UserReport {
      summary,
      posts: scored_posts,
    }));
  }

  Ok(outcomes)
}

/// Builds the comparison row for one handle from its original posts.
fn summarize_originals<Scorer>(
  handle: &str,
  originals: &[&Post],
  scorer: &Scorer,
) -> Result<UserSummary, ScoringError>
where
  Scorer: SentimentScorer + ?Sized,
{
  let corpus = originals
    .iter()
    .map(|post| post.text.as_str())
    .collect::<Vec<&str>>()
    .join(CORPUS_SEPARATOR);

  let original_count = originals.len() as f64;
  let avg_post_length = round_to_2(
    originals.iter().map(|post| post.length()).sum::<usize>() as f64 / original_count,
  );
  let likes_per_post = round_to_2(
    originals.iter().map(|post| post.like_count).sum::<u64>() as f64 / original_count,
  );
  let rts_per_post = round_to_2(
    originals.iter().map(|post| post.repost_count).sum::<u64>() as f64 / original_count,
  );

  // Scored once over the whole cleaned corpus, not averaged per post.
  let sentiment = scorer.score(&text::clean(&corpus))?;

  Ok(UserSummary {
    username: handle.to_string(),
    tweet_corpus: corpus,
    likes_per_post,
    rts_per_post,
    avg_polarity: round_to_2(sentiment.polarity),
    avg_subjectivity: round_to_2(sentiment.subjectivity),
    avg_post_length,
  })
}

/// Scores every fetched post on its own cleaned text, for the per-user
/// exports. A post with nothing left after cleaning scores neutral instead of
/// failing the whole handle.
fn score_posts<Scorer>(posts: Vec<Post>, scorer: &Scorer) -> Result<Vec<ScoredPost>, ScoringError>
where
  Scorer: SentimentScorer + ?Sized,
{
  posts
    .into_iter()
    .map(|post| {
      let sentiment = match scorer.score(&text::clean(&post.text)) {
        Ok(sentiment) => Sentiment {
          polarity: round_to_2(sentiment.polarity),
          subjectivity: round_to_2(sentiment.subjectivity),
        },
        Err(ScoringError::EmptyInput) => Sentiment {
          polarity: 0.0,
          subjectivity: 0.0,
        },
        Err(error) => return Err(error),
      };

      Ok(ScoredPost { post, sentiment })
    })
    .collect()
}

pub fn round_to_2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}
