use anyhow::anyhow;
use clap::{Arg, Command};
use lazy_static::lazy_static;

/// The timeline endpoint rejects page sizes outside of this window, so the
/// override is held to the same bounds as the config value.
const MIN_TWEET_COUNT: usize = 5;
const MAX_TWEET_COUNT: usize = 100;

lazy_static! {
  pub static ref CLAP_ARGS: ClapArgs = ClapArgs::new();
}

pub struct ClapArgs {
  args: clap::ArgMatches,
}

impl ClapArgs {
  const TWEET_COUNT: &'static str = "tweet_count";
  const SKIP_CHARTS: &'static str = "skip_charts";

  pub fn new() -> Self {
    let args = Self::setup_args();

    Self { args }
  }

  /// Overrides the configured amount of tweets requested per handle.
  ///
  /// A passed value that is not a whole number inside the accepted window is
  /// an error, not a silent fallback to the config value.
  pub fn tweet_count_override(&self) -> Option<anyhow::Result<usize>> {
    let value = self.args.get_one::<String>(Self::TWEET_COUNT)?;

    Some(Self::parse_tweet_count(value))
  }

  fn parse_tweet_count(value: &str) -> anyhow::Result<usize> {
    let count = value
      .parse::<usize>()
      .map_err(|_| anyhow!("--count expects a whole number. Got {:?}.", value))?;

    if !(MIN_TWEET_COUNT..=MAX_TWEET_COUNT).contains(&count) {
      return Err(anyhow!(
        "--count must be between {} and {}. Got {}.",
        MIN_TWEET_COUNT,
        MAX_TWEET_COUNT,
        count
      ));
    }

    Ok(count)
  }

  pub fn skip_charts_flag(&self) -> bool {
    self.args.get_flag(Self::SKIP_CHARTS)
  }

  fn setup_args() -> clap::ArgMatches {
    Command::new("Tweet Insight Tracker")
      .arg(
        Arg::new(Self::TWEET_COUNT)
          .short('c')
          .long("count")
          .action(clap::ArgAction::Set)
          .help("Overrides the configured amount of recent tweets to request per handle."),
      )
      .arg(
        Arg::new(Self::SKIP_CHARTS)
          .long("skip-charts")
          .action(clap::ArgAction::SetTrue)
          .help("Skips rendering the comparison chart images."),
      )
      .get_matches()
  }
}

impl Default for ClapArgs {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tweet_counts_inside_the_accepted_window_parse() {
    assert_eq!(ClapArgs::parse_tweet_count("5").unwrap(), 5);
    assert_eq!(ClapArgs::parse_tweet_count("20").unwrap(), 20);
    assert_eq!(ClapArgs::parse_tweet_count("100").unwrap(), 100);
  }

  #[test]
  fn tweet_counts_outside_the_accepted_window_are_rejected() {
    assert!(ClapArgs::parse_tweet_count("0").is_err());
    assert!(ClapArgs::parse_tweet_count("4").is_err());
    assert!(ClapArgs::parse_tweet_count("101").is_err());
  }

  #[test]
  fn non_numeric_tweet_counts_are_rejected() {
    assert!(ClapArgs::parse_tweet_count("twenty").is_err());
    assert!(ClapArgs::parse_tweet_count("").is_err());
    assert!(ClapArgs::parse_tweet_count("-5").is_err());
  }
}
