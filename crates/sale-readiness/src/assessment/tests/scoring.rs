use super::common::*;
use crate::assessment::domain::{AnswerDomain, CategoryId, QuestionKey};
use crate::assessment::scoring::score;

#[test]
fn score_map_holds_every_question_and_matches_domain_lookup() {
    let engine = engine();
    let catalog = engine.catalog();
    let answers = answers_with(catalog, |question| match question.key {
        QuestionKey::CashFlow => "average",
        QuestionKey::Licenses => "dont_know",
        QuestionKey::LoyalCustomers => "good",
        _ => most_positive(question),
    });

    let scores = engine.score_answers(&answers);

    assert_eq!(scores.len(), 19);
    for question in catalog.questions() {
        let token = answers.get(question.key).expect("answered");
        assert_eq!(scores.get(question.key), score(question.domain, token));
    }
    assert_eq!(scores.get(QuestionKey::CashFlow), 3);
    assert_eq!(scores.get(QuestionKey::Licenses), 2);
    assert_eq!(scores.get(QuestionKey::LoyalCustomers), 4);
}

#[test]
fn tokens_from_the_wrong_domain_score_zero() {
    let engine = engine();
    let catalog = engine.catalog();
    let mut answers = all_positive(catalog);
    answers.record(QuestionKey::CashFlow, "yes");
    answers.record(QuestionKey::TeaserReady, "excellent");

    let scores = engine.score_answers(&answers);

    assert_eq!(scores.get(QuestionKey::CashFlow), 0);
    assert_eq!(scores.get(QuestionKey::TeaserReady), 0);
}

#[test]
fn owner_dependency_scores_on_the_full_five_point_scale() {
    let engine = engine();
    let question = engine
        .catalog()
        .question(QuestionKey::OwnerDependency)
        .expect("present");
    assert_eq!(question.domain, AnswerDomain::FivePoint);
    assert_eq!(score(question.domain, "average"), 3);
}

#[test]
fn category_means_stay_within_bounds() {
    let engine = engine();
    let catalog = engine.catalog();

    let mixed = answers_with(catalog, |question| match question.domain {
        AnswerDomain::Ternary => "dont_know",
        AnswerDomain::FivePoint => "good",
    });
    let blank = crate::assessment::AnswerSet::new();

    for answers in [all_positive(catalog), all_negative(catalog), mixed, blank] {
        let categories = engine.aggregate(&engine.score_answers(&answers));
        for (_, mean) in categories.iter() {
            assert!((0.0..=5.0).contains(&mean), "mean {mean} out of range");
        }
    }
}

#[test]
fn extreme_answer_sets_hit_category_bounds() {
    let engine = engine();
    let catalog = engine.catalog();

    let best = engine.aggregate(&engine.score_answers(&all_positive(catalog)));
    let worst = engine.aggregate(&engine.score_answers(&all_negative(catalog)));
    let empty = engine.aggregate(&engine.score_answers(&crate::assessment::AnswerSet::new()));

    for category in CategoryId::ordered() {
        assert_eq!(best.get(category), 5.0);
        assert_eq!(worst.get(category), 1.0);
        assert_eq!(empty.get(category), 0.0);
    }
}

#[test]
fn mixed_financial_answers_average_over_four() {
    let engine = engine();
    let catalog = engine.catalog();
    let answers = answers_with(catalog, |question| match question.key {
        QuestionKey::FinancialStatements => "yes",
        QuestionKey::ExpenseSeparation => "dont_know",
        QuestionKey::CashFlow => "good",
        QuestionKey::FinancingReady => "no",
        _ => most_positive(question),
    });

    let categories = engine.aggregate(&engine.score_answers(&answers));

    assert_eq!(categories.get(CategoryId::Financial), 3.0);
}
