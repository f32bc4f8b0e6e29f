use crate::log_level_wrapper::*;
use crate::rolling_appender_rotation::*;
use crate::secret_string::Secret;
use anyhow::anyhow;
use lazy_static::lazy_static;
use schematic::merge::append_vec;
use schematic::validate::max_length;
use schematic::{Config, ConfigLoader};
use std::path::PathBuf;

const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";
const DEFAULT_CONFIG_FILEPATH: &str = "./config/config.yml";

/// The timeline endpoint rejects page sizes outside of this window.
const MIN_TWEETS_PER_USER: usize = 5;
const MAX_TWEETS_PER_USER: usize = 100;

lazy_static! {
  pub static ref APP_CONFIG: AppConfig = AppConfig::new().unwrap();
}

#[derive(Debug, Config, serde::Serialize, serde::Deserialize)]
pub struct AppConfig {
  log_level: Option<LoggingConfigLevel>,
  logging_dir: Option<PathBuf>,
  #[setting(default = "")]
  logging_filename_prefix: String,
  #[setting(default = "daily")]
  logging_roll_appender: RollingAppenderRotation,

  #[setting(extend, merge = append_vec, validate = max_length(100))]
  handles: Vec<String>,

  #[setting(default = 20)]
  tweets_per_user: usize,

  #[setting(default = "./results")]
  results_dir: PathBuf,

  #[setting(default = "https://api.twitter.com")]
  api_base_url: String,

  #[setting(required, env = "TWITTER_BEARER_TOKEN")]
  bearer_token: Option<Secret>,

  #[setting(default = 10)]
  request_timeout_seconds: u64,
  #[setting(default = 3)]
  request_retry_count: usize,
  #[setting(default = 2)]
  request_retry_wait_seconds: u64,
}

impl AppConfig {
  #[cfg(any(test, feature = "__test_hook"))]
  pub const TEST_HANDLES: &'static [&'static str] = &["test_user_one", "test_user_two"];

  fn new() -> anyhow::Result<Self> {
    if cfg!(test) || cfg!(feature = "__test_hook") {
      return Ok(Self::test_config());
    }

    let config = ConfigLoader::<AppConfig>::new()
      .file_optional(get_config_path())
      .unwrap()
      .load()?
      .config;

    if config.tweets_per_user < MIN_TWEETS_PER_USER
      || config.tweets_per_user > MAX_TWEETS_PER_USER
    {
      return Err(anyhow!(
        "tweets_per_user must be between {} and {}. Got {}.",
        MIN_TWEETS_PER_USER,
        MAX_TWEETS_PER_USER,
        config.tweets_per_user
      ));
    }

    Ok(config)
  }

  #[cfg(any(test, feature = "__test_hook"))]
  fn test_config() -> Self {
    Self {
      log_level: None,
      logging_dir: None,
      logging_filename_prefix: String::new(),
      logging_roll_appender: RollingAppenderRotation::Never,
      handles: Self::TEST_HANDLES
        .iter()
        .map(|handle| handle.to_string())
        .collect(),
      tweets_per_user: 20,
      results_dir: PathBuf::from("./results"),
      api_base_url: "https://api.twitter.com".to_string(),
      bearer_token: Some(Secret::new("test_token".to_string())),
      request_timeout_seconds: 10,
      request_retry_count: 3,
      request_retry_wait_seconds: 2,
    }
  }

  #[cfg(not(any(test, feature = "__test_hook")))]
  fn test_config() -> Self {
    unreachable!()
  }

  pub fn log_level(&self) -> Option<&LoggingConfigLevel> {
    self.log_level.as_ref()
  }

  pub fn logging_dir(&self) -> Option<&PathBuf> {
    self.logging_dir.as_ref()
  }

  pub fn logging_filename_prefix(&self) -> &str {
    &self.logging_filename_prefix
  }

  pub fn logging_file_roll_appender(&self) -> &RollingAppenderRotation {
    &self.logging_roll_appender
  }

  pub fn handles(&self) -> &Vec<String> {
    &self.handles
  }

  pub fn tweets_per_user(&self) -> usize {
    self.tweets_per_user
  }

  pub fn results_dir(&self) -> &PathBuf {
    &self.results_dir
  }

  pub fn api_base_url(&self) -> &str {
    &self.api_base_url
  }

  pub fn bearer_token(&self) -> &Secret {
    self.bearer_token.as_ref().unwrap()
  }

  pub fn request_timeout_seconds(&self) -> u64 {
    self.request_timeout_seconds
  }

  pub fn request_retry_count(&self) -> usize {
    self.request_retry_count
  }

  pub fn request_retry_wait_seconds(&self) -> u64 {
    self.request_retry_wait_seconds
  }
}

fn get_config_path() -> PathBuf {
  let Some((_, config_path)) = std::env::vars().find(|(key, _)| key == CONFIG_PATH_ENV_VAR) else {
    return PathBuf::from(DEFAULT_CONFIG_FILEPATH);
  };

  PathBuf::from(config_path)
}
