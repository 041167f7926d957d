mod config;
mod policy;

pub use config::{AssessmentConfig, PartialAnswerPolicy};

use super::answers::AnswerSet;
use super::catalog::{CatalogError, QuestionCatalog};
use super::domain::QuestionKey;
use super::report::{self, Report};
use super::scoring::{self, CategoryScores, ScoreMap};
use policy::check_completeness;
use tracing::info;

/// Stateless pipeline: answers → scores → category means → report.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: QuestionCatalog,
    config: AssessmentConfig,
}

impl AssessmentEngine {
    /// Refuses a catalog that fails its consistency check.
    pub fn new(catalog: QuestionCatalog, config: AssessmentConfig) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn standard(config: AssessmentConfig) -> Result<Self, CatalogError> {
        Self::new(QuestionCatalog::standard(), config)
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    pub fn score_answers(&self, answers: &AnswerSet) -> ScoreMap {
        scoring::score_answers(&self.catalog, answers)
    }

    pub fn aggregate(&self, scores: &ScoreMap) -> CategoryScores {
        scoring::aggregate_all(&self.catalog, scores)
    }

    pub fn synthesize(&self, scores: &ScoreMap, categories: &CategoryScores) -> Report {
        report::synthesize(&self.catalog, scores, categories)
    }

    /// Runs the full pipeline under the configured partial-answer policy.
    pub fn assess(&self, answers: &AnswerSet) -> Result<Report, AssessmentError> {
        check_completeness(self.config.partial_answers, &self.catalog, answers)
            .map_err(|missing| AssessmentError::Incomplete { missing })?;
        Ok(self.run(answers))
    }

    /// Produces a report regardless of policy; unanswered questions score 0.
    /// Used when the owner abandons the questionnaire and asks for results.
    pub fn assess_forced(&self, answers: &AnswerSet) -> Report {
        self.run(answers)
    }

    fn run(&self, answers: &AnswerSet) -> Report {
        let scores = self.score_answers(answers);
        let categories = self.aggregate(&scores);
        let report = self.synthesize(&scores, &categories);

        info!(
            answered = answers.len(),
            overall = report.overall_score,
            tier = ?report.tier,
            "readiness report generated"
        );

        report
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("assessment incomplete: {} question(s) unanswered", .missing.len())]
    Incomplete { missing: Vec<QuestionKey> },
    #[error("no question at position {0}")]
    OutOfRange(usize),
    #[error("question '{0}' is not in the catalog")]
    UnknownQuestion(QuestionKey),
    #[error("assessment already finished; restart to answer again")]
    AlreadyFinished,
}
