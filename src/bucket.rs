//! The fixed complaint taxonomy.
//!
//! Every review, score and concept is keyed by one of five buckets. The
//! keyword lists drive the upload classifier and are matched as plain
//! substrings of the lowercased review.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Complaint category. Declaration order is the canonical iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Bucket {
    Reaction,
    Ineffectiveness,
    Texture,
    Pricing,
    Packaging,
}

impl Bucket {
    /// All buckets, in canonical order.
    pub const ALL: [Bucket; 5] = [
        Bucket::Reaction,
        Bucket::Ineffectiveness,
        Bucket::Texture,
        Bucket::Pricing,
        Bucket::Packaging,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Reaction => "Reaction",
            Bucket::Ineffectiveness => "Ineffectiveness",
            Bucket::Texture => "Texture",
            Bucket::Pricing => "Pricing",
            Bucket::Packaging => "Packaging",
        }
    }

    /// Keyword substrings that mark a review as a complaint in this bucket.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Bucket::Reaction => &[
                "burn", "sting", "rash", "redness", "itch", "allergy", "irritation", "breakout",
            ],
            Bucket::Ineffectiveness => &[
                "no result", "didn't work", "ineffective", "useless", "no change", "waste",
            ],
            Bucket::Texture => &[
                "sticky", "greasy", "thick", "oily", "watery", "residue", "smell",
            ],
            Bucket::Pricing => &[
                "expensive", "overpriced", "price", "cost", "cheap", "value",
            ],
            Bucket::Packaging => &[
                "leak", "broken", "pump", "bottle", "cap", "packaging", "damaged",
            ],
        }
    }

    /// True when the (already lowercased) review contains any keyword.
    /// Substring semantics: "overpriced" and "priceless" both hit "price".
    pub fn matches(&self, review: &str) -> bool {
        self.keywords().iter().any(|kw| review.contains(kw))
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let mut sorted = Bucket::ALL;
        sorted.sort();
        assert_eq!(sorted, Bucket::ALL);
        assert_eq!(Bucket::ALL[0], Bucket::Reaction);
        assert_eq!(Bucket::ALL[4], Bucket::Packaging);
    }

    #[test]
    fn test_substring_matching() {
        assert!(Bucket::Pricing.matches("way overpriced for what it is"));
        assert!(Bucket::Pricing.matches("priceless results"));
        assert!(Bucket::Packaging.matches("the capsule cracked"));
        assert!(Bucket::Reaction.matches("it burns"));
        assert!(!Bucket::Reaction.matches("lovely glow"));
    }

    #[test]
    fn test_multi_word_keywords() {
        assert!(Bucket::Ineffectiveness.matches("honestly it didn't work at all"));
        assert!(Bucket::Ineffectiveness.matches("no results after a month"));
        assert!(!Bucket::Ineffectiveness.matches("didnt work"));
    }

    #[test]
    fn test_display_and_serde_names() {
        assert_eq!(Bucket::Texture.to_string(), "Texture");
        assert_eq!(serde_json::to_string(&Bucket::Packaging).unwrap(), "\"Packaging\"");
        let parsed: Bucket = serde_json::from_str("\"Ineffectiveness\"").unwrap();
        assert_eq!(parsed, Bucket::Ineffectiveness);
    }
}
