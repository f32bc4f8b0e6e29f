use lazy_static::lazy_static;
use regex::Regex;

/// Prefix marking a repost in the post body. A structural heuristic, not a
/// platform flag: a post that happens to start with it is misclassified.
pub const REPOST_PREFIX: &str = "RT ";

lazy_static! {
  // Branch order matters: a mention or URL has to be swallowed whole before the
  // catch-all character class gets a chance to eat it one symbol at a time.
  static ref NOISE_REGEX: Regex =
    Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)").unwrap();
  static ref MENTION_REGEX: Regex = Regex::new(r"@[A-Za-z0-9]+").unwrap();
}

/// True iff the first three characters of `text` exactly equal the repost prefix.
pub fn is_repost(text: &str) -> bool {
  text.starts_with(REPOST_PREFIX)
}

/// Strips mentions, URL-like tokens and all other non-alphanumeric characters,
/// then collapses whitespace runs into single spaces.
///
/// Only used to prepare a corpus for sentiment scoring. The stored corpus
/// keeps the raw text.
pub fn clean(text: &str) -> String {
  let stripped = NOISE_REGEX.replace_all(text, " ");

  stripped.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Every `@handle` token in the text, `@` included, in order of appearance.
pub fn extract_mentions(text: &str) -> Vec<String> {
  MENTION_REGEX
    .find_iter(text)
    .map(|mention| mention.as_str().to_string())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn repost_detection_only_looks_at_the_prefix() {
    assert!(is_repost("RT @someone: great post"));
    assert!(is_repost("RT without a colon"));

    assert!(!is_repost(""));
    assert!(!is_repost("RT"));
    assert!(!is_repost("RT@nospace"));
    assert!(!is_repost("rt @lowercase: nope"));
    assert!(!is_repost("A normal post mentioning RT later"));
  }

  #[test]
  fn clean_removes_urls_mentions_and_punctuation() {
    let result = clean("check http://x.co @bob!! great");

    assert_eq!(result, "check great");
  }

  #[test]
  fn clean_collapses_whitespace_and_trims() {
    let result = clean("  so    many\t\tspaces...  ");

    assert_eq!(result, "so many spaces");
  }

  #[test]
  fn clean_is_total_over_empty_and_symbol_only_input() {
    assert_eq!(clean(""), "");
    assert_eq!(clean("!!! ??? :-)"), "");
  }

  #[test]
  fn mentions_are_extracted_with_their_at_sign() {
    let result = extract_mentions("hey @bob and @alice123, not an email@address");

    assert_eq!(result, vec!["@bob", "@alice123", "@address"]);
  }

  #[test]
  fn text_without_mentions_extracts_nothing() {
    assert!(extract_mentions("no mentions here").is_empty());
  }
}
