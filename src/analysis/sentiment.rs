use std::collections::HashSet;

/// Sentiment scores for one corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
  /// -1 (negative) to 1 (positive).
  pub polarity: f64,
  /// 0 (factual) to 1 (opinionated).
  pub subjectivity: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
  #[error("Attempted to score an empty corpus.")]
  EmptyInput,

  #[error("The scorer failed internally. Reason: {:?}", .0)]
  Internal(String),
}

/// Scores one whole corpus at a time.
///
/// The pipeline treats this as an injected capability so tests can swap in a
/// deterministic stub instead of a real model.
pub trait SentimentScorer {
  fn score(&self, corpus: &str) -> Result<Sentiment, ScoringError>;
}

/// Word-list scorer used by the binary.
///
/// Polarity is the signed share of matched opinion words, subjectivity the
/// share of all words that carried any opinion at all.
pub struct LexiconScorer {
  positive_words: HashSet<&'static str>,
  negative_words: HashSet<&'static str>,
}

impl LexiconScorer {
  pub fn new() -> Self {
    Self {
      positive_words: POSITIVE_WORDS.iter().copied().collect(),
      negative_words: NEGATIVE_WORDS.iter().copied().collect(),
    }
  }
}

impl SentimentScorer for LexiconScorer {
  fn score(&self, corpus: &str) -> Result<Sentiment, ScoringError> {
    let lowered = corpus.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    if words.is_empty() {
      return Err(ScoringError::EmptyInput);
    }

    let positive = words
      .iter()
      .filter(|word| self.positive_words.contains(**word))
      .count();
    let negative = words
      .iter()
      .filter(|word| self.negative_words.contains(**word))
      .count();
    let matched = positive + negative;

    let polarity = if matched == 0 {
      0.0
    } else {
      (positive as f64 - negative as f64) / matched as f64
    };
    let subjectivity = (matched as f64 / words.len() as f64).clamp(0.0, 1.0);

    Ok(Sentiment {
      polarity,
      subjectivity,
    })
  }
}

impl Default for LexiconScorer {
  fn default() -> Self {
    Self::new()
  }
}

const POSITIVE_WORDS: &[&str] = &[
  "amazing",
  "awesome",
  "beautiful",
  "best",
  "brilliant",
  "celebrate",
  "congrats",
  "congratulations",
  "excellent",
  "excited",
  "fantastic",
  "glad",
  "good",
  "grateful",
  "great",
  "happy",
  "impressive",
  "incredible",
  "inspiring",
  "love",
  "loved",
  "perfect",
  "proud",
  "success",
  "successful",
  "thank",
  "thanks",
  "thrilled",
  "win",
  "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
  "angry",
  "annoying",
  "awful",
  "bad",
  "broken",
  "disappointed",
  "disappointing",
  "disaster",
  "fail",
  "failed",
  "failure",
  "hate",
  "horrible",
  "hurt",
  "lose",
  "losing",
  "lost",
  "mess",
  "painful",
  "poor",
  "sad",
  "shame",
  "terrible",
  "tragic",
  "ugly",
  "unfair",
  "upset",
  "worse",
  "worst",
  "wrong",
];
