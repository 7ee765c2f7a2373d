//! Opportunity scoring and bucket ranking.

use crate::models::{Dataset, RankedEntry};

const FREQUENCY_WEIGHT: f64 = 0.35;
const SEVERITY_WEIGHT: f64 = 0.25;
const UNMET_WEIGHT: f64 = 0.20;
const TREND_WEIGHT: f64 = 0.20;

/// Round to `places` decimals, half away from zero.
///
/// Every score and synthesized metric goes through this so results do not
/// depend on how a consumer formats numbers. Negative zero comes back as 0.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor + 0.0
}

/// Weighted opportunity score for one bucket, damped by competition.
///
/// Trend growth is normalized to a fraction and scaled back to 0-100 so it
/// sits on the same scale as the complaint metrics. Inputs are not
/// validated; a competition proxy above 1 yields a negative score.
pub fn opportunity_score(
    complaint_frequency: f64,
    severity: f64,
    unmet: f64,
    trend_growth_percent: f64,
    competition_proxy: f64,
) -> f64 {
    let trend_normalized = trend_growth_percent / 100.0;
    let raw = complaint_frequency * FREQUENCY_WEIGHT
        + severity * SEVERITY_WEIGHT
        + unmet * UNMET_WEIGHT
        + trend_normalized * 100.0 * TREND_WEIGHT;
    round_to(raw * (1.0 - competition_proxy), 2)
}

/// Score every bucket and sort descending. The sort is stable, so equal
/// scores keep canonical bucket order.
pub fn rank_complaints(dataset: &Dataset) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = dataset
        .complaints
        .iter()
        .map(|(bucket, m)| RankedEntry {
            bucket,
            score: opportunity_score(
                m.complaint_frequency,
                m.severity_score,
                m.unmet_score,
                dataset.trend_growth_percent,
                dataset.competition_proxy,
            ),
            complaint_frequency: m.complaint_frequency,
            severity_score: m.severity_score,
            unmet_score: m.unmet_score,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
