//! Keyword-based complaint bucketing for uploaded reviews.
//!
//! Each review is checked against every bucket's keyword list using plain
//! substring containment, and separately tokenized into a corpus-wide word
//! count. No external NLP dependencies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;
use utoipa::ToSchema;

use crate::bucket::Bucket;
use crate::models::BucketCounts;

/// Runs of non-word characters (ASCII word set: letters, digits, underscore).
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid token regex"));

/// Tokens of this length or shorter are ignored.
const MIN_TOKEN_LEN: usize = 2;

/// A word with its corpus count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WordCount {
    #[schema(example = "sticky")]
    pub word: String,
    pub count: usize,
}

impl WordCount {
    /// Display form, e.g. `sticky (3)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.word, self.count)
    }
}

/// Word counts that remember the order words were first seen, so ties in
/// [`WordFrequency::top`] resolve the same way on every run.
///
/// Tie order follows JavaScript object key order: integer-like words such as
/// "100" or "2024" come first in ascending numeric order, then every other
/// word in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    index: HashMap<String, usize>,
    counts: Vec<WordCount>,
}

impl WordFrequency {
    pub fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.counts[i].count += 1,
            None => {
                self.index.insert(word.to_string(), self.counts.len());
                self.counts.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map(|&i| self.counts[i].count).unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent words, count descending. Ties put integer-like
    /// words first (ascending), then the rest in first-seen order.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut sorted = self.counts.clone();
        sorted.sort_by_key(|w| match array_index(&w.word) {
            Some(value) => (0, value),
            None => (1, 0),
        });
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(n);
        sorted
    }
}

/// Value of a canonical array-index string: decimal digits, no leading zero,
/// below 2^32 - 1.
fn array_index(word: &str) -> Option<u32> {
    if word.is_empty()
        || !word.bytes().all(|b| b.is_ascii_digit())
        || (word.len() > 1 && word.starts_with('0'))
    {
        return None;
    }
    word.parse::<u32>().ok().filter(|&v| v != u32::MAX)
}

/// Output of [`classify`].
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub bucket_counts: BucketCounts,
    pub word_frequency: WordFrequency,
    pub reviews: usize,
}

/// Split a review into counted tokens.
pub fn tokenize(review: &str) -> impl Iterator<Item = &str> {
    NON_WORD
        .split(review)
        .filter(|w| w.len() > MIN_TOKEN_LEN)
}

/// Count per-bucket complaints and word frequencies over a set of reviews.
///
/// A review adds at most one to each bucket, however many of that bucket's
/// keywords it contains, and may count toward several buckets.
pub fn classify<S: AsRef<str>>(reviews: &[S]) -> Classification {
    let mut result = Classification {
        reviews: reviews.len(),
        ..Default::default()
    };

    for review in reviews {
        let review = review.as_ref().to_lowercase();

        for word in tokenize(&review) {
            result.word_frequency.record(word);
        }

        for bucket in Bucket::ALL {
            if bucket.matches(&review) {
                result.bucket_counts.increment(bucket);
            }
        }
    }

    debug!(
        reviews = result.reviews,
        matched = result.bucket_counts.total(),
        distinct_words = result.word_frequency.len(),
        "Classified reviews"
    );

    result
}
