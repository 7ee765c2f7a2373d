//! Named datasets served by the dashboard.
//!
//! The catalog is built once at startup and shared read-only. The two
//! built-in datasets can be replaced wholesale by a JSON file so alternate
//! fixtures never touch the scoring code.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use utoipa::ToSchema;

use crate::error::AnalysisError;
use crate::models::{BucketMetrics, ComplaintMetrics, Dataset};

fn metrics(complaint_frequency: f64, severity_score: f64, unmet_score: f64) -> BucketMetrics {
    BucketMetrics {
        complaint_frequency,
        severity_score,
        unmet_score,
    }
}

pub fn vitamin_c() -> Dataset {
    Dataset {
        title: "Vitamin C".to_string(),
        total_reviews: 18420,
        trend_growth_percent: 34.0,
        competition_proxy: 0.61,
        complaints: ComplaintMetrics {
            reaction: metrics(78.0, 84.0, 76.0),
            ineffectiveness: metrics(69.0, 72.0, 79.0),
            texture: metrics(62.0, 58.0, 66.0),
            pricing: metrics(54.0, 48.0, 63.0),
            packaging: metrics(39.0, 44.0, 57.0),
        },
    }
}

pub fn hair_serum() -> Dataset {
    Dataset {
        title: "Hair Serum".to_string(),
        total_reviews: 23150,
        trend_growth_percent: 41.0,
        competition_proxy: 0.56,
        complaints: ComplaintMetrics {
            reaction: metrics(58.0, 77.0, 70.0),
            ineffectiveness: metrics(82.0, 80.0, 85.0),
            texture: metrics(64.0, 61.0, 69.0),
            pricing: metrics(47.0, 50.0, 60.0),
            packaging: metrics(42.0, 46.0, 54.0),
        },
    }
}

/// A dataset addressed by a URL-safe slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub slug: String,
    #[serde(flatten)]
    pub dataset: Dataset,
}

/// Listing view of a catalog entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DatasetSummary {
    #[schema(example = "vitamin-c")]
    pub slug: String,
    #[schema(example = "Vitamin C")]
    pub title: String,
    pub total_reviews: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DatasetCatalog {
    entries: Vec<CatalogEntry>,
}

impl DatasetCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            CatalogEntry {
                slug: "vitamin-c".to_string(),
                dataset: vitamin_c(),
            },
            CatalogEntry {
                slug: "hair-serum".to_string(),
                dataset: hair_serum(),
            },
        ])
    }

    /// Parse a JSON array of `{ "slug": ..., <dataset fields> }`.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AnalysisError::DatasetFile {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(path = %path.display(), datasets = catalog.len(), "Loaded dataset catalog");
        Ok(catalog)
    }

    pub fn get(&self, slug: &str) -> Result<&Dataset, AnalysisError> {
        self.entries
            .iter()
            .find(|e| e.slug == slug)
            .map(|e| &e.dataset)
            .ok_or_else(|| AnalysisError::UnknownDataset(slug.to_string()))
    }

    pub fn summaries(&self) -> Vec<DatasetSummary> {
        self.entries
            .iter()
            .map(|e| DatasetSummary {
                slug: e.slug.clone(),
                title: e.dataset.title.clone(),
                total_reviews: e.dataset.total_reviews,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = DatasetCatalog::builtin();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("vitamin-c").unwrap().title, "Vitamin C");
        assert_eq!(catalog.get("hair-serum").unwrap().total_reviews, 23150);

        let slugs: Vec<String> = catalog.summaries().into_iter().map(|s| s.slug).collect();
        assert_eq!(slugs, vec!["vitamin-c", "hair-serum"]);
    }

    #[test]
    fn test_unknown_slug() {
        let catalog = DatasetCatalog::builtin();
        match catalog.get("sunscreen") {
            Err(AnalysisError::UnknownDataset(slug)) => assert_eq!(slug, "sunscreen"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "slug": "retinol",
            "title": "Retinol",
            "total_reviews": 900,
            "trend_growth_percent": 120,
            "competition_proxy": 0.3,
            "complaints": {
                "Reaction": {"complaint_frequency": 70, "severity_score": 80, "unmet_score": 60},
                "Ineffectiveness": {"complaint_frequency": 30, "severity_score": 40, "unmet_score": 50},
                "Texture": {"complaint_frequency": 20, "severity_score": 20, "unmet_score": 20},
                "Pricing": {"complaint_frequency": 10, "severity_score": 10, "unmet_score": 10},
                "Packaging": {"complaint_frequency": 5, "severity_score": 5, "unmet_score": 5}
            }
        }]"#;
        let catalog = DatasetCatalog::from_json(json).unwrap();
        let retinol = catalog.get("retinol").unwrap();
        assert_eq!(retinol.trend_growth_percent, 120.0);
        assert_eq!(retinol.complaints.reaction.severity_score, 80.0);
    }

    #[test]
    fn test_from_json_rejects_incomplete_dataset() {
        let json = r#"[{
            "slug": "broken",
            "title": "Broken",
            "total_reviews": 1,
            "trend_growth_percent": 1,
            "competition_proxy": 0.1,
            "complaints": {}
        }]"#;
        assert!(matches!(
            DatasetCatalog::from_json(json),
            Err(AnalysisError::DatasetFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = DatasetCatalog::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, AnalysisError::DatasetFile { .. }));
    }
}
