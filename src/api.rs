//! HTTP handlers. Each one is a thin adapter: decode the request, call the
//! pure pipeline, return JSON.

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use crate::catalog::{DatasetCatalog, DatasetSummary};
use crate::classifier::{classify, WordCount};
use crate::config::AppConfig;
use crate::dashboard::{dataset_dashboard, Dashboard};
use crate::error::AnalysisError;
use crate::models::{BucketCounts, Dataset};
use crate::scoring::opportunity_score;
use crate::upload::{analyze_upload, UploadOptions, UploadReport};

/// Shared, read-only state.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: DatasetCatalog,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: DatasetCatalog) -> Self {
        Self { config, catalog }
    }

    fn upload_options(&self) -> UploadOptions {
        UploadOptions {
            top_words: self.config.top_words,
            concept_count: self.config.upload_concepts,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub datasets: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreRequest {
    #[schema(example = 78.0)]
    pub complaint_frequency: f64,
    #[schema(example = 84.0)]
    pub severity_score: f64,
    #[schema(example = 76.0)]
    pub unmet_score: f64,
    #[schema(example = 34.0)]
    pub trend_growth_percent: f64,
    #[schema(example = 0.61)]
    pub competition_proxy: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreResponse {
    #[schema(example = 27.42)]
    pub score: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClassifyRequest {
    pub reviews: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassifyResponse {
    pub review_count: usize,
    pub bucket_counts: BucketCounts,
    pub top_words: Vec<WordCount>,
}

/// Service liveness
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "radar"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        datasets: state.catalog.len(),
    })
}

/// List the datasets available for dashboards
#[utoipa::path(
    get,
    path = "/datasets",
    responses((status = 200, description = "Available datasets", body = [DatasetSummary])),
    tag = "dashboard"
)]
pub async fn list_datasets(State(state): State<Arc<AppState>>) -> Json<Vec<DatasetSummary>> {
    Json(state.catalog.summaries())
}

/// Ranked dashboard for a catalog dataset
#[utoipa::path(
    get,
    path = "/datasets/{slug}",
    params(("slug" = String, Path, description = "Dataset slug, e.g. vitamin-c")),
    responses(
        (status = 200, description = "Dashboard data", body = Dashboard),
        (status = 404, description = "Unknown dataset", body = ErrorResponse)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Dashboard>, AnalysisError> {
    let dataset = state.catalog.get(&slug)?;
    info!(slug = %slug, "Building dashboard");
    Ok(Json(dataset_dashboard(dataset, state.config.dashboard_concepts)))
}

/// Ranked dashboard for a client-supplied dataset
#[utoipa::path(
    post,
    path = "/dashboard",
    request_body = Dataset,
    responses(
        (status = 200, description = "Dashboard data", body = Dashboard),
        (status = 422, description = "Dataset is missing a bucket or field")
    ),
    tag = "dashboard"
)]
pub async fn custom_dashboard(
    State(state): State<Arc<AppState>>,
    Json(dataset): Json<Dataset>,
) -> Json<Dashboard> {
    info!(title = %dataset.title, "Building dashboard for supplied dataset");
    Json(dataset_dashboard(&dataset, state.config.dashboard_concepts))
}

/// Opportunity score for a single set of metrics
#[utoipa::path(
    post,
    path = "/score",
    request_body = ScoreRequest,
    responses((status = 200, description = "Rounded opportunity score", body = ScoreResponse)),
    tag = "radar"
)]
pub async fn score(Json(req): Json<ScoreRequest>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: opportunity_score(
            req.complaint_frequency,
            req.severity_score,
            req.unmet_score,
            req.trend_growth_percent,
            req.competition_proxy,
        ),
    })
}

/// Bucket counts and frequent words for a list of reviews
#[utoipa::path(
    post,
    path = "/classify",
    request_body = ClassifyRequest,
    responses((status = 200, description = "Classification summary", body = ClassifyResponse)),
    tag = "radar"
)]
pub async fn classify_reviews(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let result = classify(&req.reviews);
    Json(ClassifyResponse {
        review_count: result.reviews,
        bucket_counts: result.bucket_counts,
        top_words: result.word_frequency.top(state.config.top_words),
    })
}

/// Analyze an uploaded CSV of reviews
#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = String, content_type = "text/csv", description = "CSV with a review_text column"),
    responses(
        (status = 200, description = "Upload report", body = UploadReport),
        (status = 422, description = "CSV has no review_text column", body = ErrorResponse)
    ),
    tag = "upload"
)]
pub async fn upload_reviews(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<UploadReport>, AnalysisError> {
    info!(bytes = body.len(), "Received upload");
    let report = analyze_upload(&body, state.upload_options())?;
    Ok(Json(report))
}

pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health))
        .route("/datasets", get(list_datasets))
        .route("/datasets/:slug", get(get_dashboard))
        .route("/dashboard", post(custom_dashboard))
        .route("/score", post(score))
        .route("/classify", post(classify_reviews))
        .route("/upload", post(upload_reviews))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
