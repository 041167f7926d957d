//! Business sale-readiness questionnaire: catalog, scoring, and reporting.
//!
//! Answers flow strictly forward: an [`AnswerSet`] is scored per question,
//! averaged per category, and synthesized into an immutable [`Report`].
//! Partial answer sets are accepted by default and unanswered questions score
//! zero, which produces a deliberately low report rather than an error. Set
//! [`PartialAnswerPolicy::Reject`] to refuse them instead.

pub mod answers;
pub mod catalog;
pub mod contact;
pub mod domain;
pub mod engine;
pub mod import;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use catalog::{AnswerOption, CatalogError, Narrative, QuestionCatalog, QuestionTemplate};
pub use contact::{ContactChannel, ContactError, ContactReceipt, ContactSubmission};
pub use domain::{
    AnswerDomain, CategoryId, FivePointAnswer, QuestionKey, ReadinessTier, TernaryAnswer,
};
pub use engine::{AssessmentConfig, AssessmentEngine, AssessmentError, PartialAnswerPolicy};
pub use import::{AnswerImportError, AnswerImporter};
pub use report::Report;
pub use router::{assessment_router, ReportRequest};
pub use scoring::{CategoryScores, ScoreMap};
pub use service::{AssessmentService, ServiceError};
pub use state::AssessmentState;
