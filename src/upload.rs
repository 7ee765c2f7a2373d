//! End-to-end analysis of an uploaded review export.
//!
//! CSV text is parsed, classified, converted into a synthesized dataset and
//! fed through the same ranking and concept pipeline as the built-in
//! datasets. Every upload produces a fresh report; nothing carries over.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::bucket::Bucket;
use crate::classifier::{classify, WordCount};
use crate::csv_input::parse_review_csv;
use crate::dashboard::{build_dashboard, Dashboard};
use crate::error::AnalysisError;
use crate::models::{BucketCounts, Dataset};
use crate::synthesis::uploaded_dataset;

pub const UPLOAD_DASHBOARD_TITLE: &str = "Upload & Analyze";
pub const UPLOAD_CONCEPT_TITLE: &str = "Custom Insight";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub review_count: usize,
    pub bucket_counts: BucketCounts,
    /// Most frequent words, count descending.
    pub top_words: Vec<WordCount>,
    pub mapped_buckets: Vec<Bucket>,
    pub dataset: Dataset,
    pub dashboard: Dashboard,
}

impl UploadReport {
    /// Top words as `word (count)` labels.
    pub fn top_word_labels(&self) -> Vec<String> {
        self.top_words.iter().map(WordCount::label).collect()
    }
}

/// Limits applied to an upload analysis.
#[derive(Debug, Clone, Copy)]
pub struct UploadOptions {
    pub top_words: usize,
    pub concept_count: usize,
}

/// Analyze already-extracted review strings.
pub fn analyze_reviews<S: AsRef<str>>(reviews: &[S], options: UploadOptions) -> UploadReport {
    let classification = classify(reviews);
    let dataset = uploaded_dataset(&classification.bucket_counts, classification.reviews);
    let dashboard = build_dashboard(
        &dataset,
        UPLOAD_DASHBOARD_TITLE,
        UPLOAD_CONCEPT_TITLE,
        options.concept_count,
    );

    let report = UploadReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        review_count: classification.reviews,
        bucket_counts: classification.bucket_counts,
        top_words: classification.word_frequency.top(options.top_words),
        mapped_buckets: Bucket::ALL.to_vec(),
        dataset,
        dashboard,
    };

    info!(
        report_id = %report.report_id,
        reviews = report.review_count,
        top_bucket = %report.dashboard.overview.top_bucket,
        top_score = report.dashboard.overview.top_score,
        "Upload analyzed"
    );

    report
}

/// Parse a CSV blob and analyze its `review_text` column.
pub fn analyze_upload(csv: &str, options: UploadOptions) -> Result<UploadReport, AnalysisError> {
    let reviews = parse_review_csv(csv)?;
    Ok(analyze_reviews(&reviews, options))
}
