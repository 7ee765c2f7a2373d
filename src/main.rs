use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use opportunity_radar::api::{self, AppState};
use opportunity_radar::catalog::DatasetCatalog;
use opportunity_radar::config::AppConfig;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health,
        api::list_datasets,
        api::get_dashboard,
        api::custom_dashboard,
        api::score,
        api::classify_reviews,
        api::upload_reviews
    ),
    components(
        schemas(
            api::HealthResponse,
            api::ScoreRequest,
            api::ScoreResponse,
            api::ClassifyRequest,
            api::ClassifyResponse,
            opportunity_radar::bucket::Bucket,
            opportunity_radar::models::BucketMetrics,
            opportunity_radar::models::ComplaintMetrics,
            opportunity_radar::models::BucketCounts,
            opportunity_radar::models::Dataset,
            opportunity_radar::models::RankedEntry,
            opportunity_radar::models::ProductConcept,
            opportunity_radar::catalog::DatasetSummary,
            opportunity_radar::classifier::WordCount,
            opportunity_radar::dashboard::Overview,
            opportunity_radar::dashboard::BarRow,
            opportunity_radar::dashboard::RankingRow,
            opportunity_radar::dashboard::Dashboard,
            opportunity_radar::upload::UploadReport,
            opportunity_radar::error::ErrorResponse
        )
    ),
    tags(
        (name = "dashboard", description = "Ranked complaint dashboards"),
        (name = "upload", description = "Review upload analysis"),
        (name = "radar", description = "Scoring and classification primitives")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    let catalog = match &config.datasets_file {
        Some(path) => DatasetCatalog::from_json_file(path)
            .with_context(|| format!("loading datasets from {}", path.display()))?,
        None => DatasetCatalog::builtin(),
    };
    info!(datasets = catalog.len(), "Dataset catalog ready");

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config, catalog));

    let app = api::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
