use super::super::answers::AnswerSet;
use super::super::catalog::QuestionCatalog;
use super::super::domain::QuestionKey;
use super::config::PartialAnswerPolicy;
use tracing::debug;

/// Returns the missing keys when the policy forbids scoring this answer set.
pub(crate) fn check_completeness(
    policy: PartialAnswerPolicy,
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
) -> Result<(), Vec<QuestionKey>> {
    let missing = answers.missing(catalog);
    if missing.is_empty() {
        return Ok(());
    }

    match policy {
        PartialAnswerPolicy::Reject => Err(missing),
        PartialAnswerPolicy::ZeroFill => {
            debug!(
                missing = missing.len(),
                "scoring partial answer set; unanswered questions count as zero"
            );
            Ok(())
        }
    }
}
