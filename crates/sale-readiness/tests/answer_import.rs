use sale_readiness::assessment::{
    AnswerImportError, AnswerImporter, AssessmentConfig, AssessmentEngine, AssessmentError,
    CategoryId, PartialAnswerPolicy, QuestionKey, ReadinessTier,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

#[test]
fn csv_export_scores_a_medium_business() {
    let answers = AnswerImporter::from_path(fixture("owner_answers.csv")).expect("csv imports");
    let engine = AssessmentEngine::standard(AssessmentConfig::default()).expect("catalog valid");

    assert_eq!(answers.len(), 19);
    assert!(answers.is_complete(engine.catalog()));

    let report = engine.assess(&answers).expect("complete answers");
    let categories = &report.category_scores;
    assert_eq!(categories.get(CategoryId::Financial), 12.0 / 4.0);
    assert_eq!(categories.get(CategoryId::OwnerDependency), 8.0 / 3.0);
    assert_eq!(categories.get(CategoryId::Assets), 12.0 / 3.0);
    assert_eq!(categories.get(CategoryId::Legal), 12.0 / 3.0);
    assert_eq!(categories.get(CategoryId::Marketing), 5.0 / 3.0);
    assert_eq!(categories.get(CategoryId::Presentation), 8.0 / 3.0);

    assert_eq!(report.overall_score, 50);
    assert_eq!(report.tier, ReadinessTier::Low);
    assert_eq!(report.readiness_level, "low – requires preparation");
    // Generic block plus financial, owner dependency, marketing and presentation.
    assert_eq!(report.recommendations.len(), 15);
}

#[test]
fn json_export_respects_partial_answer_policy() {
    let answers =
        AnswerImporter::from_path(fixture("partial_answers.json")).expect("json imports");
    assert_eq!(answers.get(QuestionKey::CashFlow), Some("excellent"));

    let rejecting = AssessmentEngine::standard(AssessmentConfig {
        partial_answers: PartialAnswerPolicy::Reject,
    })
    .expect("catalog valid");
    match rejecting.assess(&answers) {
        Err(AssessmentError::Incomplete { missing }) => assert_eq!(missing.len(), 15),
        other => panic!("expected incomplete assessment, got {other:?}"),
    }

    let zero_filling =
        AssessmentEngine::standard(AssessmentConfig::default()).expect("catalog valid");
    let report = zero_filling.assess(&answers).expect("zero-filled report");
    assert_eq!(report.overall_score, 0);
    assert_eq!(report.tier, ReadinessTier::VeryLow);
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = AnswerImporter::from_path(fixture("does_not_exist.csv")).expect_err("missing file");
    assert!(matches!(err, AnswerImportError::Io(_)));
    assert!(err.to_string().starts_with("failed to read answers file"));
}
