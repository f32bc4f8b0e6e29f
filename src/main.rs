use app_config::{APP_CONFIG, CLAP_ARGS};
use std::fs::File;
use std::path::Path;
use tweet_insight_tracker::analysis::mentions::count_mentions;
use tweet_insight_tracker::analysis::sentiment::LexiconScorer;
use tweet_insight_tracker::analysis::word_frequencies::word_frequencies;
use tweet_insight_tracker::errors::AppError;
use tweet_insight_tracker::pipeline::aggregation::{
  build_summaries, HandleOutcome, ScoredPost, UserReport,
};
use tweet_insight_tracker::pipeline::ranking::rank;
use tweet_insight_tracker::report::{charts, csv_export, tables};
use tweet_insight_tracker::timeline::post::Post;
use tweet_insight_tracker::timeline::twitter_api::TwitterApi;

#[tokio::main]
async fn main() {
  tweet_insight_tracker::logging::setup_logging_config().unwrap();

  if APP_CONFIG.handles().is_empty() {
    println!("No handles to compare.");

    std::process::exit(0);
  }

  let tweet_count = match CLAP_ARGS.tweet_count_override() {
    Some(Ok(count)) => count,
    Some(Err(error)) => {
      tracing::error!("Invalid tweet count override. Reason: {}", error);

      std::process::exit(1);
    }
    None => APP_CONFIG.tweets_per_user(),
  };
  let source = match TwitterApi::new() {
    Ok(source) => source,
    Err(error) => {
      tracing::error!("Failed to set up the API client. Reason: {:?}", error);

      std::process::exit(1);
    }
  };
  let scorer = LexiconScorer::new();

  match build_summaries(APP_CONFIG.handles(), tweet_count, &source, &scorer).await {
    Ok(outcomes) => {
      if let Err(error) = write_reports(outcomes) {
        tracing::error!("Failed to write the comparison reports. Reason: {:?}", error);

        std::process::exit(1);
      }
    }
    Err(error) => {
      tracing::error!("Failed to aggregate the configured handles. Reason: {:?}", error);

      std::process::exit(1);
    }
  }
}

fn write_reports(outcomes: Vec<HandleOutcome>) -> Result<(), AppError> {
  let results_dir = APP_CONFIG.results_dir();
  std::fs::create_dir_all(results_dir)?;

  let mut summaries = Vec::new();

  for outcome in outcomes {
    match outcome {
      HandleOutcome::Aggregated(user_report) => {
        export_user_files(results_dir, &user_report)?;

        summaries.push(user_report.summary);
      }
      HandleOutcome::Skipped { handle, reason } => {
        println!("Skipped {:?}: {}", handle, reason);
      }
    }
  }

  let ranked = rank(summaries);

  let comparison_file = File::create(results_dir.join("Tweet comparisons.csv"))?;
  csv_export::write_comparison_table(comparison_file, &ranked)?;

  if ranked.is_empty() {
    println!("No handles could be aggregated. Wrote an empty comparison table.");

    return Ok(());
  }

  if !CLAP_ARGS.skip_charts_flag() {
    charts::render_likes_vs_retweets(&ranked, &results_dir.join("Likes and Retweets.png"))?;
    charts::render_sentiment(&ranked, &results_dir.join("Sentiment scores.png"))?;
  }

  println!("{}", tables::render_ranking_table(&ranked));

  Ok(())
}

/// Writes the per-user outputs next to the comparison ones: every fetched
/// post, the originals only, the mention counts, the word frequencies, and
/// the two sentiment-over-time charts.
fn export_user_files(results_dir: &Path, user_report: &UserReport) -> Result<(), AppError> {
  let handle = &user_report.summary.username;
  let originals: Vec<ScoredPost> = user_report
    .posts
    .iter()
    .filter(|scored_post| !scored_post.post.is_repost())
    .cloned()
    .collect();
  let all_posts: Vec<Post> = user_report
    .posts
    .iter()
    .map(|scored_post| scored_post.post.clone())
    .collect();
  let original_posts: Vec<Post> = originals
    .iter()
    .map(|scored_post| scored_post.post.clone())
    .collect();

  let all_posts_file = File::create(user_file_path(
    results_dir,
    handle,
    "Tweet analysis (all).csv",
  ))?;
  csv_export::write_post_table(all_posts_file, &user_report.posts)?;

  let originals_file = File::create(user_file_path(
    results_dir,
    handle,
    "Tweet analysis (originals).csv",
  ))?;
  csv_export::write_post_table(originals_file, &originals)?;

  let mentions_file = File::create(user_file_path(
    results_dir,
    handle,
    "Tweet mentions count.csv",
  ))?;
  csv_export::write_mention_table(mentions_file, &count_mentions(&all_posts))?;

  let words_file = File::create(user_file_path(results_dir, handle, "Word frequencies.csv"))?;
  csv_export::write_word_frequency_table(words_file, &word_frequencies(&original_posts))?;

  if !CLAP_ARGS.skip_charts_flag() {
    charts::render_polarity_over_time(
      handle,
      &user_report.posts,
      &user_file_path(results_dir, handle, "Polarity scores over time.png"),
    )?;
    charts::render_subjectivity_over_time(
      handle,
      &user_report.posts,
      &user_file_path(results_dir, handle, "Subjectivity scores over time.png"),
    )?;
  }

  Ok(())
}

fn user_file_path(results_dir: &Path, handle: &str, file_name: &str) -> std::path::PathBuf {
  results_dir.join(format!("{} - {}", handle, file_name))
}
