//! Turns classifier counts into dataset metrics.
//!
//! Review text alone says how often a bucket comes up, not how severe or
//! unmet the need is. Severity and unmet scores are therefore fixed linear
//! functions of frequency, a heuristic stand-in for survey data.

use crate::models::{BucketCounts, BucketMetrics, ComplaintMetrics, Dataset};
use crate::scoring::round_to;

pub const UPLOADED_TITLE: &str = "Uploaded Dataset";
/// Placeholder market signals; neither is derivable from review text.
pub const UPLOADED_TREND_GROWTH_PERCENT: f64 = 26.0;
pub const UPLOADED_COMPETITION_PROXY: f64 = 0.52;

const SEVERITY_BASE: f64 = 35.0;
const SEVERITY_SLOPE: f64 = 0.7;
const UNMET_BASE: f64 = 40.0;
const UNMET_SLOPE: f64 = 0.65;

fn capped(value: f64) -> f64 {
    round_to(value, 1).min(100.0)
}

/// Derive metrics for one bucket from its share of reviews.
pub fn metrics_for_count(count: usize, total_reviews: usize) -> BucketMetrics {
    // zero reviews: divide by one so every frequency is 0
    let divisor = total_reviews.max(1) as f64;
    let complaint_frequency = capped(count as f64 / divisor * 100.0);
    BucketMetrics {
        complaint_frequency,
        severity_score: capped(SEVERITY_BASE + complaint_frequency * SEVERITY_SLOPE),
        unmet_score: capped(UNMET_BASE + complaint_frequency * UNMET_SLOPE),
    }
}

pub fn synthesize_metrics(counts: &BucketCounts, total_reviews: usize) -> ComplaintMetrics {
    ComplaintMetrics::from_fn(|bucket| metrics_for_count(counts.get(bucket), total_reviews))
}

/// Wrap synthesized metrics in a dataset with the placeholder market signals.
pub fn uploaded_dataset(counts: &BucketCounts, total_reviews: usize) -> Dataset {
    Dataset {
        title: UPLOADED_TITLE.to_string(),
        total_reviews: total_reviews as u64,
        trend_growth_percent: UPLOADED_TREND_GROWTH_PERCENT,
        competition_proxy: UPLOADED_COMPETITION_PROXY,
        complaints: synthesize_metrics(counts, total_reviews),
    }
}
