use crate::errors::AppError;
use crate::helper_methods::get_with_retry;
use crate::timeline::post::Post;
use crate::timeline::{FetchError, TweetSource};
use app_config::secret_string::Secret;
use app_config::APP_CONFIG;
use chrono::{DateTime, Utc};
use std::time::Duration;
use url::Url;

/// The timeline endpoint rejects `max_results` outside of this window.
const MIN_PAGE_SIZE: usize = 5;
const MAX_PAGE_SIZE: usize = 100;

const TIMELINE_TWEET_FIELDS: &str = "created_at,public_metrics";

/// Twitter API v2 client backing the [`TweetSource`] seam.
///
/// Fetching a handle's timeline takes two requests: a username lookup for the
/// numeric user ID, then the recent tweets query for that ID.
#[derive(Debug)]
pub struct TwitterApi {
  client: reqwest::Client,
  base_url: Url,
  retry_count: usize,
  retry_wait: Duration,
}

impl TwitterApi {
  pub fn new() -> Result<Self, AppError> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(APP_CONFIG.request_timeout_seconds()))
      .build()?;
    let base_url = Url::parse(APP_CONFIG.api_base_url())?;

    Ok(Self {
      client,
      base_url,
      retry_count: APP_CONFIG.request_retry_count(),
      retry_wait: Duration::from_secs(APP_CONFIG.request_retry_wait_seconds()),
    })
  }

  async fn lookup_user_id(&self, handle: &str) -> Result<String, FetchError> {
    let query_url = self
      .base_url
      .join(&format!("/2/users/by/username/{}", handle))
      .map_err(|source| FetchError::InvalidQueryUrl {
        handle: handle.to_string(),
        source,
      })?;

    let response_body: UserLookupResponse = self.get_json(query_url, handle).await?;

    let Some(user) = response_body.data else {
      return Err(FetchError::UnknownHandle {
        handle: handle.to_string(),
      });
    };

    Ok(user.id)
  }

  async fn fetch_timeline(
    &self,
    user_id: &str,
    handle: &str,
    count: usize,
  ) -> Result<Vec<Post>, FetchError> {
    let page_size = count.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
    let mut query_url = self
      .base_url
      .join(&format!("/2/users/{}/tweets", user_id))
      .map_err(|source| FetchError::InvalidQueryUrl {
        handle: handle.to_string(),
        source,
      })?;
    query_url
      .query_pairs_mut()
      .append_pair("max_results", &page_size.to_string())
      .append_pair("tweet.fields", TIMELINE_TWEET_FIELDS);

    let response_body: TimelineResponse = self.get_json(query_url, handle).await?;

    let posts = response_body
      .data
      .unwrap_or_default()
      .into_iter()
      .take(count)
      .map(TweetObject::into_post)
      .collect();

    Ok(posts)
  }

  async fn get_json<T: serde::de::DeserializeOwned>(
    &self,
    query_url: Url,
    handle: &str,
  ) -> Result<T, FetchError> {
    let request = self
      .client
      .get(query_url)
      .bearer_auth(Secret::read_secret_string(
        APP_CONFIG.bearer_token().read_value(),
      ));

    let response = get_with_retry(request, self.retry_count, self.retry_wait)
      .await
      .map_err(|source| FetchError::Unreachable {
        handle: handle.to_string(),
        source,
      })?;

    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
      return Err(FetchError::UnknownHandle {
        handle: handle.to_string(),
      });
    }

    if !status.is_success() {
      return Err(FetchError::ErroredResponse {
        handle: handle.to_string(),
        status,
      });
    }

    response
      .json::<T>()
      .await
      .map_err(|source| FetchError::Request {
        handle: handle.to_string(),
        source,
      })
  }
}

impl TweetSource for TwitterApi {
  async fn fetch_recent(&self, handle: &str, count: usize) -> Result<Vec<Post>, FetchError> {
    let user_id = self.lookup_user_id(handle).await?;

    tracing::debug!("Resolved {:?} to user ID {:?}.", handle, user_id);

    self.fetch_timeline(&user_id, handle, count).await
  }
}

#[derive(Debug, serde::Deserialize)]
struct UserLookupResponse {
  data: Option<UserObject>,
}

#[derive(Debug, serde::Deserialize)]
struct UserObject {
  id: String,
}

#[derive(Debug, serde::Deserialize)]
struct TimelineResponse {
  data: Option<Vec<TweetObject>>,
}

#[derive(Debug, serde::Deserialize)]
struct TweetObject {
  id: String,
  text: String,
  created_at: Option<DateTime<Utc>>,
  public_metrics: Option<PublicMetrics>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct PublicMetrics {
  like_count: u64,
  retweet_count: u64,
}

impl TweetObject {
  fn into_post(self) -> Post {
    let public_metrics = self.public_metrics.unwrap_or_default();

    Post {
      id: self.id,
      text: self.text,
      created_at: self.created_at.unwrap_or_default(),
      like_count: public_metrics.like_count,
      repost_count: public_metrics.retweet_count,
    }
  }
}
