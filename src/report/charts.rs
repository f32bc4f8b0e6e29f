use crate::errors::AppError;
use crate::pipeline::aggregation::ScoredPost;
use crate::pipeline::summary::UserSummary;
use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1280, 720);
const LABEL_FONT: (&str, u32) = ("sans-serif", 18);

/// Renders the likes-per-post vs retweets-per-post scatter, one labeled point
/// per ranked user. Axes start at zero and pad one unit past the maxima.
pub fn render_likes_vs_retweets(
  summaries: &[UserSummary],
  output_path: &Path,
) -> Result<(), AppError> {
  const CHART_NAME: &str = "likes and retweets";

  if summaries.is_empty() {
    return Ok(());
  }

  let max_likes = axis_max(summaries.iter().map(|summary| summary.likes_per_post));
  let max_retweets = axis_max(summaries.iter().map(|summary| summary.rts_per_post));

  let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
  root.fill(&WHITE).map_err(chart_error(CHART_NAME))?;

  let mut chart = ChartBuilder::on(&root)
    .caption("Twitter - Likes and Retweets", ("sans-serif", 36))
    .margin(20)
    .x_label_area_size(50)
    .y_label_area_size(60)
    .build_cartesian_2d(0f64..max_likes, 0f64..max_retweets)
    .map_err(chart_error(CHART_NAME))?;

  chart
    .configure_mesh()
    .x_desc("Likes per post")
    .y_desc("RTs per post")
    .draw()
    .map_err(chart_error(CHART_NAME))?;

  chart
    .draw_series(summaries.iter().map(|summary| {
      Circle::new(
        (summary.likes_per_post, summary.rts_per_post),
        6,
        GREEN.filled(),
      )
    }))
    .map_err(chart_error(CHART_NAME))?;
  chart
    .draw_series(summaries.iter().map(|summary| {
      Text::new(
        summary.username.clone(),
        (summary.likes_per_post, summary.rts_per_post),
        LABEL_FONT,
      )
    }))
    .map_err(chart_error(CHART_NAME))?;

  root.present().map_err(chart_error(CHART_NAME))?;

  Ok(())
}

/// Renders the sentiment scatter on the scorer's fixed ranges: subjectivity
/// 0..1 on the x axis, polarity -1..1 on the y axis.
pub fn render_sentiment(summaries: &[UserSummary], output_path: &Path) -> Result<(), AppError> {
  const CHART_NAME: &str = "sentiment scores";

  if summaries.is_empty() {
    return Ok(());
  }

  let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
  root.fill(&WHITE).map_err(chart_error(CHART_NAME))?;

  let mut chart = ChartBuilder::on(&root)
    .caption("Tweet sentiment", ("sans-serif", 36))
    .margin(20)
    .x_label_area_size(50)
    .y_label_area_size(60)
    .build_cartesian_2d(0f64..1f64, -1f64..1f64)
    .map_err(chart_error(CHART_NAME))?;

  chart
    .configure_mesh()
    .x_desc("Average subjectivity")
    .y_desc("Average polarity")
    .draw()
    .map_err(chart_error(CHART_NAME))?;

  chart
    .draw_series(summaries.iter().map(|summary| {
      Circle::new(
        (summary.avg_subjectivity, summary.avg_polarity),
        6,
        RED.filled(),
      )
    }))
    .map_err(chart_error(CHART_NAME))?;
  chart
    .draw_series(summaries.iter().map(|summary| {
      Text::new(
        summary.username.clone(),
        (summary.avg_subjectivity, summary.avg_polarity),
        LABEL_FONT,
      )
    }))
    .map_err(chart_error(CHART_NAME))?;

  root.present().map_err(chart_error(CHART_NAME))?;

  Ok(())
}

/// Renders one user's per-post polarity as a line over posting time.
pub fn render_polarity_over_time(
  handle: &str,
  posts: &[ScoredPost],
  output_path: &Path,
) -> Result<(), AppError> {
  render_score_over_time(
    "polarity over time",
    &format!("{} - Polarity scores over time", handle),
    "Polarity",
    -1f64..1f64,
    posts,
    |scored_post| scored_post.sentiment.polarity,
    output_path,
  )
}

/// Renders one user's per-post subjectivity as a line over posting time.
pub fn render_subjectivity_over_time(
  handle: &str,
  posts: &[ScoredPost],
  output_path: &Path,
) -> Result<(), AppError> {
  render_score_over_time(
    "subjectivity over time",
    &format!("{} - Subjectivity scores over time", handle),
    "Subjectivity",
    0f64..1f64,
    posts,
    |scored_post| scored_post.sentiment.subjectivity,
    output_path,
  )
}

fn render_score_over_time(
  chart_name: &'static str,
  caption: &str,
  y_desc: &str,
  score_range: Range<f64>,
  posts: &[ScoredPost],
  score: impl Fn(&ScoredPost) -> f64,
  output_path: &Path,
) -> Result<(), AppError> {
  if posts.is_empty() {
    return Ok(());
  }

  let mut points: Vec<(DateTime<Utc>, f64)> = posts
    .iter()
    .map(|scored_post| (scored_post.post.created_at, score(scored_post)))
    .collect();
  points.sort_by_key(|(posted_at, _)| *posted_at);

  let (start, end) = time_bounds(&points);

  let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
  root.fill(&WHITE).map_err(chart_error(chart_name))?;

  let mut chart = ChartBuilder::on(&root)
    .caption(caption, ("sans-serif", 36))
    .margin(20)
    .x_label_area_size(50)
    .y_label_area_size(60)
    .build_cartesian_2d(start..end, score_range)
    .map_err(chart_error(chart_name))?;

  chart
    .configure_mesh()
    .x_desc("Posted at")
    .y_desc(y_desc)
    .draw()
    .map_err(chart_error(chart_name))?;

  chart
    .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
    .map_err(chart_error(chart_name))?;
  chart
    .draw_series(
      points
        .iter()
        .map(|(posted_at, value)| Circle::new((*posted_at, *value), 4, BLUE.filled())),
    )
    .map_err(chart_error(chart_name))?;

  root.present().map_err(chart_error(chart_name))?;

  Ok(())
}

/// A series posted all at one instant still needs a non-degenerate x range.
fn time_bounds(points: &[(DateTime<Utc>, f64)]) -> (DateTime<Utc>, DateTime<Utc>) {
  let start = points[0].0;
  let end = points[points.len() - 1].0;

  if start == end {
    (start, end + Duration::days(1))
  } else {
    (start, end)
  }
}

fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
  values.fold(0f64, f64::max).ceil() + 1.0
}

fn chart_error<E: std::fmt::Display>(chart_name: &'static str) -> impl Fn(E) -> AppError {
  move |error| AppError::ChartRender {
    chart_name,
    reason: error.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn single_instant_series_gets_a_padded_time_range() {
    let posted_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let points = vec![(posted_at, 0.5)];

    let (start, end) = time_bounds(&points);

    assert_eq!(start, posted_at);
    assert_eq!(end, posted_at + Duration::days(1));
  }

  #[test]
  fn spread_out_series_keeps_its_own_time_range() {
    let first = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let last = Utc.timestamp_opt(1_700_090_000, 0).unwrap();
    let points = vec![(first, 0.1), (last, -0.3)];

    let (start, end) = time_bounds(&points);

    assert_eq!(start, first);
    assert_eq!(end, last);
  }

  #[test]
  fn axis_max_pads_one_unit_past_the_ceiling() {
    assert_eq!(axis_max([13.4, 2.0].into_iter()), 15.0);
    assert_eq!(axis_max([10.0].into_iter()), 11.0);
    assert_eq!(axis_max(std::iter::empty::<f64>()), 1.0);
  }
}
