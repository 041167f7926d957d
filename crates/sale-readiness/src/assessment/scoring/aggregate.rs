use super::super::catalog::QuestionCatalog;
use super::super::domain::CategoryId;
use super::ScoreMap;

/// Arithmetic mean over the category's fixed question count. Unanswered
/// questions contribute 0 rather than being left out of the divisor.
pub fn aggregate(catalog: &QuestionCatalog, scores: &ScoreMap, category: CategoryId) -> f64 {
    let total: u32 = catalog
        .questions_for(category)
        .iter()
        .map(|question| u32::from(scores.get(question.key)))
        .sum();

    f64::from(total) / category.question_count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::QuestionKey;

    fn scores(entries: &[(QuestionKey, u8)]) -> ScoreMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn financial_divides_by_four() {
        let catalog = QuestionCatalog::standard();
        let map = scores(&[
            (QuestionKey::FinancialStatements, 5),
            (QuestionKey::ExpenseSeparation, 4),
            (QuestionKey::CashFlow, 3),
            (QuestionKey::FinancingReady, 2),
        ]);
        assert_eq!(aggregate(&catalog, &map, CategoryId::Financial), 3.5);
    }

    #[test]
    fn unanswered_questions_pull_the_mean_down() {
        let catalog = QuestionCatalog::standard();
        let map = scores(&[(QuestionKey::ContractsUpdated, 5), (QuestionKey::Licenses, 5)]);
        let mean = aggregate(&catalog, &map, CategoryId::Legal);
        assert!((mean - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_category_is_zero_and_full_category_is_five() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(
            aggregate(&catalog, &ScoreMap::default(), CategoryId::Presentation),
            0.0
        );

        let map = scores(&[
            (QuestionKey::ReadyToShow, 5),
            (QuestionKey::TeaserReady, 5),
            (QuestionKey::KpisAvailable, 5),
        ]);
        assert_eq!(aggregate(&catalog, &map, CategoryId::Presentation), 5.0);
    }
}
