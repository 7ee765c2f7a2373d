use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::bucket::Bucket;

/// Per-bucket complaint metrics, each nominally on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BucketMetrics {
    #[schema(example = 78.0)]
    pub complaint_frequency: f64,
    #[schema(example = 84.0)]
    pub severity_score: f64,
    #[schema(example = 76.0)]
    pub unmet_score: f64,
}

/// Metrics for every bucket. One field per bucket, so a dataset that omits a
/// bucket fails to deserialize instead of being zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ComplaintMetrics {
    #[serde(rename = "Reaction")]
    pub reaction: BucketMetrics,
    #[serde(rename = "Ineffectiveness")]
    pub ineffectiveness: BucketMetrics,
    #[serde(rename = "Texture")]
    pub texture: BucketMetrics,
    #[serde(rename = "Pricing")]
    pub pricing: BucketMetrics,
    #[serde(rename = "Packaging")]
    pub packaging: BucketMetrics,
}

impl ComplaintMetrics {
    pub fn from_fn(mut f: impl FnMut(Bucket) -> BucketMetrics) -> Self {
        Self {
            reaction: f(Bucket::Reaction),
            ineffectiveness: f(Bucket::Ineffectiveness),
            texture: f(Bucket::Texture),
            pricing: f(Bucket::Pricing),
            packaging: f(Bucket::Packaging),
        }
    }

    pub fn get(&self, bucket: Bucket) -> &BucketMetrics {
        match bucket {
            Bucket::Reaction => &self.reaction,
            Bucket::Ineffectiveness => &self.ineffectiveness,
            Bucket::Texture => &self.texture,
            Bucket::Pricing => &self.pricing,
            Bucket::Packaging => &self.packaging,
        }
    }

    /// Buckets with their metrics, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &BucketMetrics)> + '_ {
        Bucket::ALL.into_iter().map(move |b| (b, self.get(b)))
    }
}

/// Review counts per bucket, as produced by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BucketCounts {
    #[serde(rename = "Reaction")]
    pub reaction: usize,
    #[serde(rename = "Ineffectiveness")]
    pub ineffectiveness: usize,
    #[serde(rename = "Texture")]
    pub texture: usize,
    #[serde(rename = "Pricing")]
    pub pricing: usize,
    #[serde(rename = "Packaging")]
    pub packaging: usize,
}

impl BucketCounts {
    pub fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Reaction => self.reaction,
            Bucket::Ineffectiveness => self.ineffectiveness,
            Bucket::Texture => self.texture,
            Bucket::Pricing => self.pricing,
            Bucket::Packaging => self.packaging,
        }
    }

    pub fn increment(&mut self, bucket: Bucket) {
        let slot = match bucket {
            Bucket::Reaction => &mut self.reaction,
            Bucket::Ineffectiveness => &mut self.ineffectiveness,
            Bucket::Texture => &mut self.texture,
            Bucket::Pricing => &mut self.pricing,
            Bucket::Packaging => &mut self.packaging,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.get(*b)).sum()
    }
}

/// A product category's review statistics plus market signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dataset {
    #[schema(example = "Vitamin C")]
    pub title: String,
    #[schema(example = 18420)]
    pub total_reviews: u64,
    /// Percentage growth; may exceed 100.
    #[schema(example = 34.0)]
    pub trend_growth_percent: f64,
    /// 0 = no competition, 1 = saturated market.
    #[schema(example = 0.61)]
    pub competition_proxy: f64,
    pub complaints: ComplaintMetrics,
}

/// One bucket after scoring. Produced by ranking, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RankedEntry {
    pub bucket: Bucket,
    #[schema(example = 27.42)]
    pub score: f64,
    pub complaint_frequency: f64,
    pub severity_score: f64,
    pub unmet_score: f64,
}

impl RankedEntry {
    pub fn metrics(&self) -> BucketMetrics {
        BucketMetrics {
            complaint_frequency: self.complaint_frequency,
            severity_score: self.severity_score,
            unmet_score: self.unmet_score,
        }
    }
}

/// A templated product recommendation derived from one ranked bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductConcept {
    #[schema(example = "Vitamin C Reaction Reset 1")]
    pub name: String,
    pub persona: String,
    pub problem: String,
    pub ingredient_logic: String,
    pub format: String,
    #[schema(example = "₹699–₹999")]
    pub price_band: String,
    pub competitive_gap: String,
    pub data_points: String,
    pub score: f64,
}
