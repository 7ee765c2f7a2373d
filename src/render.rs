//! Output adapters for upload reports.
//!
//! The pipeline returns data only; a renderer decides how it is shown.

use std::fmt::Write;

use crate::upload::UploadReport;

pub trait ReportRenderer {
    fn render(&self, report: &UploadReport) -> anyhow::Result<String>;
}

/// Pretty-printed JSON, the same shape the HTTP API returns.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &UploadReport) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Terminal-friendly summary.
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &UploadReport) -> anyhow::Result<String> {
        let mut out = String::new();
        let overview = &report.dashboard.overview;

        writeln!(out, "{} ({} reviews)", overview.title, overview.total_reviews)?;
        writeln!(
            out,
            "Top bucket: {} (score {})",
            overview.top_bucket, overview.top_score
        )?;

        let words = report.top_word_labels();
        if words.is_empty() {
            writeln!(out, "Frequent words: none")?;
        } else {
            writeln!(out, "Frequent words: {}", words.join(", "))?;
        }

        writeln!(out)?;
        writeln!(out, "{:<5}{:<17}{:>8}{:>8}{:>8}{:>8}", "Rank", "Bucket", "Score", "CF", "SEV", "UM")?;
        for row in &report.dashboard.ranking {
            let e = &row.entry;
            writeln!(
                out,
                "{:<5}{:<17}{:>8}{:>8}{:>8}{:>8}",
                row.rank,
                e.bucket.as_str(),
                e.score,
                e.complaint_frequency,
                e.severity_score,
                e.unmet_score
            )?;
        }

        for concept in &report.dashboard.concepts {
            writeln!(out)?;
            writeln!(out, "{}", concept.name)?;
            writeln!(out, "  Persona: {}", concept.persona)?;
            writeln!(out, "  Problem: {}", concept.problem)?;
            writeln!(out, "  Formulation: {}", concept.ingredient_logic)?;
            writeln!(out, "  Format: {}", concept.format)?;
            writeln!(out, "  Price band: {}", concept.price_band)?;
            writeln!(out, "  Gap: {}", concept.competitive_gap)?;
            writeln!(out, "  Data: {}", concept.data_points)?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{analyze_reviews, UploadOptions};

    fn report() -> UploadReport {
        analyze_reviews(
            &["sticky and greasy", "leaky pump"],
            UploadOptions {
                top_words: 5,
                concept_count: 2,
            },
        )
    }

    #[test]
    fn test_json_renderer_round_trips_fields() {
        let rendered = JsonRenderer.render(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["review_count"], 2);
        assert_eq!(value["dashboard"]["concepts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_text_renderer() {
        let rendered = TextRenderer.render(&report()).unwrap();
        assert!(rendered.starts_with("Upload & Analyze (2 reviews)"));
        assert!(rendered.contains("Top bucket: Texture"));
        assert!(rendered.contains("Frequent words: sticky (1)"));
        assert!(rendered.contains("Custom Insight Texture Reset 1"));
        assert!(rendered.contains("Price band: ₹799–₹1099"));
    }

    #[test]
    fn test_text_renderer_without_words() {
        let empty: Vec<String> = Vec::new();
        let report = analyze_reviews(
            &empty,
            UploadOptions {
                top_words: 5,
                concept_count: 0,
            },
        );
        let rendered = TextRenderer.render(&report).unwrap();
        assert!(rendered.contains("Frequent words: none"));
    }
}
