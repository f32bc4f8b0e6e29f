use crate::analysis::sentiment::ScoringError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("{}", .0)]
  IoError(#[from] std::io::Error),

  #[error("{}", .0)]
  CsvError(#[from] csv::Error),

  #[error("{}", .0)]
  ReqwestError(#[from] reqwest::Error),

  #[error("{}", .0)]
  UrlParseError(#[from] url::ParseError),

  #[error("The sentiment scorer failed on a non-empty corpus for {handle:?}. Reason: {source}")]
  Scoring {
    handle: String,
    #[source]
    source: ScoringError,
  },

  #[error("Failed to render the {chart_name} chart. Reason: {reason}")]
  ChartRender {
    chart_name: &'static str,
    reason: String,
  },
}
