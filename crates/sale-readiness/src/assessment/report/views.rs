use super::super::catalog::{AnswerOption, QuestionCatalog};
use super::super::domain::{AnswerDomain, CategoryId, QuestionKey, ReadinessTier};
use super::Report;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub category: CategoryId,
    pub category_label: &'static str,
    pub score: f64,
    pub percent: u8,
    pub analysis: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub overall_score: u8,
    pub tier: ReadinessTier,
    pub tier_label: &'static str,
    pub verbal_assessment: String,
    pub readiness_level: String,
    pub categories: Vec<CategoryScoreEntry>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub position: usize,
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub category: CategoryId,
    pub category_label: &'static str,
    pub domain: AnswerDomain,
    pub options: Vec<AnswerOption>,
}

impl Report {
    pub fn to_view(&self) -> ReportView {
        let categories = self
            .category_scores
            .iter()
            .map(|(category, mean)| CategoryScoreEntry {
                category,
                category_label: category.label(),
                score: round_tenths(mean),
                percent: mean_to_percent(mean),
                analysis: self
                    .category_analysis
                    .get(&category)
                    .map(|text| text.lines().map(str::to_string).collect())
                    .unwrap_or_default(),
            })
            .collect();

        ReportView {
            overall_score: self.overall_score,
            tier: self.tier,
            tier_label: self.tier.label(),
            verbal_assessment: self.verbal_assessment.clone(),
            readiness_level: self.readiness_level.clone(),
            categories,
            recommendations: self.recommendations.clone(),
        }
    }
}

pub fn question_views(catalog: &QuestionCatalog) -> Vec<QuestionView> {
    catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionView {
            position: index + 1,
            key: question.key,
            prompt: question.prompt,
            category: question.category,
            category_label: question.category.label(),
            domain: question.domain,
            options: question.options.clone(),
        })
        .collect()
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Category mean as a share of the 5-point maximum.
fn mean_to_percent(mean: f64) -> u8 {
    (mean / 5.0 * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_tracks_share_of_maximum() {
        assert_eq!(mean_to_percent(5.0), 100);
        assert_eq!(mean_to_percent(3.5), 70);
        assert_eq!(mean_to_percent(0.0), 0);
        assert_eq!(round_tenths(10.0 / 3.0), 3.3);
    }

    #[test]
    fn question_views_are_numbered_from_one() {
        let catalog = QuestionCatalog::standard();
        let views = question_views(&catalog);
        assert_eq!(views.len(), 19);
        assert_eq!(views[0].position, 1);
        assert_eq!(views[0].key, QuestionKey::FinancialStatements);
        assert_eq!(views[18].key, QuestionKey::KpisAvailable);
    }
}
