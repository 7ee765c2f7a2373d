//! Assembles everything a dashboard view needs from one dataset.
//!
//! The result is plain data; formatting, localization and markup are left
//! to whoever consumes it.

use serde::Serialize;
use utoipa::ToSchema;

use crate::bucket::Bucket;
use crate::concepts::generate_concepts;
use crate::models::{Dataset, ProductConcept, RankedEntry};
use crate::scoring::rank_complaints;

/// Headline numbers for the top of a dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Overview {
    pub title: String,
    pub total_reviews: u64,
    pub trend_growth_percent: f64,
    pub top_bucket: Bucket,
    pub top_score: f64,
}

/// One bar of the complaint-strength chart, scaled against the top score.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BarRow {
    pub bucket: Bucket,
    pub score: f64,
    #[schema(example = 100.0)]
    pub width_percent: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RankingRow {
    /// 1-based position.
    pub rank: usize,
    #[serde(flatten)]
    pub entry: RankedEntry,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Dashboard {
    pub overview: Overview,
    pub bars: Vec<BarRow>,
    pub ranking: Vec<RankingRow>,
    pub concepts: Vec<ProductConcept>,
}

/// Rank a dataset and derive the overview, bar chart, table and concepts.
///
/// `title` heads the overview; `concept_title` prefixes concept names. They
/// differ for uploads, where the dashboard and the concept grid are labelled
/// separately.
pub fn build_dashboard(
    dataset: &Dataset,
    title: &str,
    concept_title: &str,
    concept_count: usize,
) -> Dashboard {
    let ranked = rank_complaints(dataset);
    // every dataset carries all five buckets, so the ranking is never empty
    let top = ranked[0];

    let max_score = if top.score == 0.0 { 1.0 } else { top.score };
    let bars = ranked
        .iter()
        .map(|entry| BarRow {
            bucket: entry.bucket,
            score: entry.score,
            width_percent: entry.score / max_score * 100.0,
        })
        .collect();

    let ranking = ranked
        .iter()
        .enumerate()
        .map(|(i, entry)| RankingRow {
            rank: i + 1,
            entry: *entry,
        })
        .collect();

    Dashboard {
        overview: Overview {
            title: title.to_string(),
            total_reviews: dataset.total_reviews,
            trend_growth_percent: dataset.trend_growth_percent,
            top_bucket: top.bucket,
            top_score: top.score,
        },
        bars,
        ranking,
        concepts: generate_concepts(concept_title, &ranked, concept_count),
    }
}

/// Dashboard for a catalog dataset: its own title heads both the overview
/// and the concept names.
pub fn dataset_dashboard(dataset: &Dataset, concept_count: usize) -> Dashboard {
    build_dashboard(dataset, &dataset.title, &dataset.title, concept_count)
}
