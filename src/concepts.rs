//! Product concept templating.
//!
//! Concepts rotate through the top-ranked buckets while personas cycle on
//! their own, so the same bucket can come back with a different audience.
//! Output is fully determined by the title, the ranking and the count.

use crate::bucket::Bucket;
use crate::models::{ProductConcept, RankedEntry};

/// How many of the top-ranked buckets concepts rotate through.
pub const FOCUS_POOL_SIZE: usize = 4;

pub const DASHBOARD_CONCEPTS: usize = 6;
pub const UPLOAD_CONCEPTS: usize = 4;

const BASE_PRICE: u64 = 699;
const PRICE_STEP: u64 = 100;
const PRICE_SPREAD: u64 = 300;

pub const PERSONAS: [&str; 8] = [
    "Results-driven urban professionals",
    "Sensitive-skin skincare minimalists",
    "Ingredient-aware beauty enthusiasts",
    "Value-seeking Gen Z shoppers",
    "Time-starved premium routine users",
    "Postpartum and stress-hairfall consumers",
    "Salon-familiar experimental buyers",
    "Early adopters in tier-1 D2C markets",
];

/// Formulation recommendation addressing a bucket's complaints.
pub fn ingredient_logic(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Reaction => "Use barrier-first actives (panthenol + ectoin + madecassoside) to lower irritation risk while preserving visible performance.",
        Bucket::Ineffectiveness => "Increase bioavailable active concentration with encapsulation and add a clinically validated booster to speed perceived results.",
        Bucket::Texture => "Adopt light ester systems, fast-break emulsifiers, and dry-touch polymers to improve sensorial acceptance.",
        Bucket::Pricing => "Create a high-value formula stack using proven hero ingredients at optimized percentages for cost-effective outcomes.",
        Bucket::Packaging => "Move to oxygen-safe, dosage-controlled packaging with low contamination risk and premium usability.",
    }
}

pub fn product_format(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Texture => "Feather-light gel serum in airless pump",
        _ => "Stabilized serum with controlled dispensing",
    }
}

/// Rupee price band for the concept at `index`; each concept steps up by 100.
pub fn price_band(index: usize) -> String {
    let low = BASE_PRICE + index as u64 * PRICE_STEP;
    format!("₹{}–₹{}", low, low + PRICE_SPREAD)
}

fn build_concept(title: &str, focus: &RankedEntry, index: usize) -> ProductConcept {
    let bucket = focus.bucket;
    ProductConcept {
        name: format!("{} {} Reset {}", title, bucket, index + 1),
        persona: PERSONAS[index % PERSONAS.len()].to_string(),
        problem: format!(
            "{} concerns are blocking repeat purchase and reducing trust in efficacy claims.",
            bucket
        ),
        ingredient_logic: ingredient_logic(bucket).to_string(),
        format: product_format(bucket).to_string(),
        price_band: price_band(index),
        competitive_gap: format!(
            "Most incumbents over-index on claims but under-address {} friction in reviews at scale.",
            bucket.as_str().to_lowercase()
        ),
        data_points: format!(
            "CF {}, SEV {}, UM {}, Growth {}",
            focus.complaint_frequency, focus.severity_score, focus.unmet_score, focus.score
        ),
        score: focus.score,
    }
}

/// Generate `count` concepts from a ranking. An empty ranking gives no concepts.
pub fn generate_concepts(title: &str, ranked: &[RankedEntry], count: usize) -> Vec<ProductConcept> {
    let pool = &ranked[..ranked.len().min(FOCUS_POOL_SIZE)];
    if pool.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|i| build_concept(title, &pool[i % pool.len()], i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::vitamin_c;
    use crate::scoring::rank_complaints;

    #[test]
    fn test_count_and_score_rotation() {
        let ranked = rank_complaints(&vitamin_c());
        for count in [0, 1, 4, 6, 11] {
            let concepts = generate_concepts("Vitamin C", &ranked, count);
            assert_eq!(concepts.len(), count);
            for (i, concept) in concepts.iter().enumerate() {
                assert_eq!(concept.score, ranked[i % 4].score);
            }
        }
    }

    #[test]
    fn test_short_ranking_pool() {
        let ranked = rank_complaints(&vitamin_c());
        let concepts = generate_concepts("Tiny", &ranked[..2], 5);
        assert_eq!(concepts.len(), 5);
        assert_eq!(concepts[2].score, ranked[0].score);
        assert_eq!(concepts[3].score, ranked[1].score);
        assert!(generate_concepts("None", &[], 3).is_empty());
    }

    #[test]
    fn test_first_concept_fields() {
        let ranked = rank_complaints(&vitamin_c());
        let concept = &generate_concepts("Vitamin C", &ranked, 6)[0];
        assert_eq!(concept.name, "Vitamin C Reaction Reset 1");
        assert_eq!(concept.persona, "Results-driven urban professionals");
        assert_eq!(
            concept.problem,
            "Reaction concerns are blocking repeat purchase and reducing trust in efficacy claims."
        );
        assert!(concept.ingredient_logic.starts_with("Use barrier-first actives"));
        assert_eq!(concept.format, "Stabilized serum with controlled dispensing");
        assert_eq!(concept.price_band, "₹699–₹999");
        assert_eq!(
            concept.competitive_gap,
            "Most incumbents over-index on claims but under-address reaction friction in reviews at scale."
        );
        assert_eq!(concept.data_points, "CF 78, SEV 84, UM 76, Growth 27.42");
    }

    #[test]
    fn test_texture_format_and_price_steps() {
        let ranked = rank_complaints(&vitamin_c());
        let concepts = generate_concepts("Vitamin C", &ranked, 6);
        // ranking: Reaction, Ineffectiveness, Texture, Pricing
        assert_eq!(concepts[2].name, "Vitamin C Texture Reset 3");
        assert_eq!(concepts[2].format, "Feather-light gel serum in airless pump");
        assert_eq!(concepts[2].price_band, "₹899–₹1199");
        assert_eq!(concepts[5].price_band, "₹1199–₹1499");
        assert_eq!(concepts[4].name, "Vitamin C Reaction Reset 5");
    }

    #[test]
    fn test_price_band_large_index() {
        assert_eq!(price_band(50_000_000), "₹5000000699–₹5000000999");
    }

    #[test]
    fn test_zero_score_data_points() {
        let entry = RankedEntry {
            bucket: Bucket::Reaction,
            score: crate::scoring::opportunity_score(-10.0, 0.0, 0.0, 0.0, 1.0),
            complaint_frequency: -10.0,
            severity_score: 0.0,
            unmet_score: 0.0,
        };
        let concept = build_concept("Edge", &entry, 0);
        assert!(concept.data_points.ends_with("Growth 0"));
    }

    #[test]
    fn test_personas_cycle_every_eight() {
        let ranked = rank_complaints(&vitamin_c());
        let concepts = generate_concepts("X", &ranked, 9);
        assert_eq!(concepts[8].persona, concepts[0].persona);
        assert_eq!(concepts[7].persona, "Early adopters in tier-1 D2C markets");
    }

    #[test]
    fn test_every_bucket_has_distinct_logic() {
        let mut seen: Vec<&str> = Bucket::ALL.iter().map(|b| ingredient_logic(*b)).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_fractional_data_points() {
        let entry = RankedEntry {
            bucket: Bucket::Packaging,
            score: 19.6,
            complaint_frequency: 33.3,
            severity_score: 58.3,
            unmet_score: 61.6,
        };
        let concept = build_concept("Custom Insight", &entry, 0);
        assert_eq!(concept.data_points, "CF 33.3, SEV 58.3, UM 61.6, Growth 19.6");
        assert!(concept.ingredient_logic.starts_with("Move to oxygen-safe"));
    }
}
