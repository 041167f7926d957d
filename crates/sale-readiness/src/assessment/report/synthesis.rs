use super::super::catalog::QuestionCatalog;
use super::super::domain::{CategoryId, ReadinessTier};
use super::super::scoring::{CategoryScores, ScoreMap};
use super::content::{category_recommendations, GENERIC_RECOMMENDATIONS, READY_RECOMMENDATIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overall score below this adds the generic recommendations.
pub const HIGH_TIER_THRESHOLD: u8 = 80;
/// Category means strictly below this add that category's recommendations.
pub const CATEGORY_RECOMMENDATION_GATE: f64 = 3.5;

/// Outcome of one completed questionnaire. Never mutated after synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub overall_score: u8,
    pub category_scores: CategoryScores,
    pub verbal_assessment: String,
    pub readiness_level: String,
    pub tier: ReadinessTier,
    pub category_analysis: BTreeMap<CategoryId, String>,
    pub recommendations: Vec<String>,
}

/// Maps the 1–5 composite onto 0–100 (1 → 0, 5 → 100).
pub fn overall_score(categories: &CategoryScores) -> u8 {
    let scaled = ((categories.composite() - 1.0) * 25.0).round();
    scaled.clamp(0.0, 100.0) as u8
}

/// One sentence per member question, joined line by line.
pub fn category_analysis(
    catalog: &QuestionCatalog,
    scores: &ScoreMap,
) -> BTreeMap<CategoryId, String> {
    CategoryId::ordered()
        .into_iter()
        .map(|category| {
            let lines: Vec<&str> = catalog
                .questions_for(category)
                .into_iter()
                .map(|question| question.narrative.for_score(scores.get(question.key)))
                .collect();
            (category, lines.join("\n"))
        })
        .collect()
}

/// Ordered, not deduplicated: generic block first, then category blocks in
/// fixed category order.
///
/// The ready messages only appear when the overall score reaches the high tier
/// and no category mean is below the gate.
pub fn recommendations(overall: u8, categories: &CategoryScores) -> Vec<String> {
    let mut recommendations = Vec::new();

    if overall < HIGH_TIER_THRESHOLD {
        recommendations.extend(GENERIC_RECOMMENDATIONS.iter().map(|text| text.to_string()));
    }

    for (category, mean) in categories.iter() {
        if mean < CATEGORY_RECOMMENDATION_GATE {
            recommendations.extend(
                category_recommendations(category)
                    .iter()
                    .map(|text| text.to_string()),
            );
        }
    }

    if recommendations.is_empty() {
        recommendations.extend(READY_RECOMMENDATIONS.iter().map(|text| text.to_string()));
    }

    recommendations
}

pub fn synthesize(
    catalog: &QuestionCatalog,
    scores: &ScoreMap,
    categories: &CategoryScores,
) -> Report {
    let overall = overall_score(categories);
    let tier = ReadinessTier::for_score(overall);

    Report {
        overall_score: overall,
        category_scores: categories.clone(),
        verbal_assessment: tier.verbal_assessment().to_string(),
        readiness_level: tier.readiness_level().to_string(),
        tier,
        category_analysis: category_analysis(catalog, scores),
        recommendations: recommendations(overall, categories),
    }
}
