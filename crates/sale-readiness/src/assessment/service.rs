use std::sync::Arc;

use super::answers::AnswerSet;
use super::contact::{ContactChannel, ContactError, ContactReceipt, ContactSubmission};
use super::engine::{AssessmentEngine, AssessmentError};
use super::report::views::{question_views, QuestionView};
use super::report::Report;
use tracing::{info, warn};

/// Service composing the scoring engine and the contact hand-off.
pub struct AssessmentService<C> {
    engine: Arc<AssessmentEngine>,
    contacts: Arc<C>,
}

impl<C> AssessmentService<C>
where
    C: ContactChannel + 'static,
{
    pub fn new(engine: Arc<AssessmentEngine>, contacts: Arc<C>) -> Self {
        Self { engine, contacts }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub fn questions(&self) -> Vec<QuestionView> {
        question_views(self.engine.catalog())
    }

    /// Scores an answer set. `force` bypasses the partial-answer policy.
    pub fn assess(&self, answers: &AnswerSet, force: bool) -> Result<Report, ServiceError> {
        if force {
            return Ok(self.engine.assess_forced(answers));
        }
        Ok(self.engine.assess(answers)?)
    }

    /// Validates and forwards a contact submission to the outbound channel.
    pub fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactReceipt, ServiceError> {
        submission.validate()?;
        let score = submission.assessment_score;
        match self.contacts.deliver(submission) {
            Ok(receipt) => {
                info!(assessment_score = score, "contact submission forwarded");
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "contact submission failed");
                Err(err.into())
            }
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Contact(#[from] ContactError),
}
