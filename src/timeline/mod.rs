pub mod post;
pub mod twitter_api;

pub use post::Post;

use crate::helper_methods::RetryError;

/// Provides the bounded list of most recent posts for a handle.
///
/// The aggregation pipeline only ever talks to this seam, so tests can swap in
/// a canned source instead of the real API client.
pub trait TweetSource {
  async fn fetch_recent(&self, handle: &str, count: usize) -> Result<Vec<Post>, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  #[error("Failed to query the timeline for {handle:?}. Reason: {source}")]
  Request {
    handle: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("Could not reach the API for {handle:?}. Reason: {source}")]
  Unreachable {
    handle: String,
    #[source]
    source: RetryError,
  },

  #[error("No account was found for handle {handle:?}.")]
  UnknownHandle { handle: String },

  #[error("Received status {status} while fetching posts for {handle:?}.")]
  ErroredResponse {
    handle: String,
    status: reqwest::StatusCode,
  },

  #[error("Failed to build the query URL for {handle:?}. Reason: {source}")]
  InvalidQueryUrl {
    handle: String,
    #[source]
    source: url::ParseError,
  },
}

impl FetchError {
  /// The handle the failed fetch was for.
  pub fn handle(&self) -> &str {
    match self {
      Self::Request { handle, .. }
      | Self::Unreachable { handle, .. }
      | Self::UnknownHandle { handle }
      | Self::ErroredResponse { handle, .. }
      | Self::InvalidQueryUrl { handle, .. } => handle,
    }
  }
}
