use serde::{Deserialize, Serialize};

/// How the engine treats an answer set with unanswered questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialAnswerPolicy {
    /// Unanswered questions score 0 and the report is produced anyway.
    #[default]
    ZeroFill,
    /// Unanswered questions abort report generation.
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub partial_answers: PartialAnswerPolicy,
}
