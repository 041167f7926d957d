//! Questionnaire stepper state.
//!
//! Every transition borrows the current state and returns the next one, so a
//! caller can keep the previous state around (undo, retries) and the scoring
//! pipeline never reads ambient state. The UI's short auto-advance delay after
//! an answer is presentation pacing and has no counterpart here.

use super::answers::AnswerSet;
use super::catalog::QuestionTemplate;
use super::domain::QuestionKey;
use super::engine::{AssessmentEngine, AssessmentError};
use super::report::Report;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentState {
    answers: AnswerSet,
    cursor: usize,
    report: Option<Report>,
    unanswered: Vec<QuestionKey>,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    /// Questions the engine refused to score without, from the last attempt
    /// to finish. Entries drop out as they are answered.
    pub fn unanswered(&self) -> &[QuestionKey] {
        &self.unanswered
    }

    pub fn current_question<'a>(&self, engine: &'a AssessmentEngine) -> Option<&'a QuestionTemplate> {
        if self.is_finished() {
            return None;
        }
        engine.catalog().questions().get(self.cursor)
    }

    /// Share of catalog questions answered, rounded to a whole percent.
    pub fn progress_pct(&self, engine: &AssessmentEngine) -> u8 {
        let catalog = engine.catalog();
        if catalog.is_empty() {
            return 0;
        }
        let answered = catalog.len() - self.answers.missing(catalog).len();
        ((answered as f64 / catalog.len() as f64) * 100.0).round() as u8
    }

    /// Records `token` for the current question and moves to the next
    /// unanswered question after it. Once the answer set is complete, or no
    /// unanswered question follows, the assessment is scored. When the engine
    /// rejects a partial answer set the refused keys are kept in
    /// [`unanswered`](Self::unanswered) and the cursor moves to the first.
    pub fn answer(
        &self,
        engine: &AssessmentEngine,
        token: &str,
    ) -> Result<Self, AssessmentError> {
        if self.is_finished() {
            return Err(AssessmentError::AlreadyFinished);
        }
        let catalog = engine.catalog();
        let question = catalog
            .questions()
            .get(self.cursor)
            .ok_or(AssessmentError::OutOfRange(self.cursor))?;

        let mut answers = self.answers.clone();
        answers.record(question.key, token);

        let next = catalog
            .questions()
            .iter()
            .enumerate()
            .skip(self.cursor + 1)
            .find(|(_, candidate)| !answers.is_answered(candidate.key))
            .map(|(index, _)| index);

        if let Some(cursor) = next.filter(|_| !answers.is_complete(catalog)) {
            let unanswered = self
                .unanswered
                .iter()
                .copied()
                .filter(|key| !answers.is_answered(*key))
                .collect();
            return Ok(Self {
                answers,
                cursor,
                report: None,
                unanswered,
            });
        }

        match engine.assess(&answers) {
            Ok(report) => Ok(Self {
                answers,
                cursor: catalog.len(),
                report: Some(report),
                unanswered: Vec::new(),
            }),
            Err(AssessmentError::Incomplete { missing }) => {
                let cursor = missing
                    .first()
                    .and_then(|key| catalog.position(*key))
                    .unwrap_or(self.cursor);
                Ok(Self {
                    answers,
                    cursor,
                    report: None,
                    unanswered: missing,
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Steps back one question, discarding any finished report.
    pub fn back(&self) -> Self {
        Self {
            answers: self.answers.clone(),
            cursor: self.cursor.saturating_sub(1),
            report: None,
            unanswered: self.unanswered.clone(),
        }
    }

    pub fn jump_to(
        &self,
        engine: &AssessmentEngine,
        key: QuestionKey,
    ) -> Result<Self, AssessmentError> {
        let cursor = engine
            .catalog()
            .position(key)
            .ok_or(AssessmentError::UnknownQuestion(key))?;
        Ok(Self {
            answers: self.answers.clone(),
            cursor,
            report: None,
            unanswered: self.unanswered.clone(),
        })
    }

    /// Forces a report from wherever the owner stopped. Unanswered questions
    /// score 0 whatever the configured policy, so the result can be much
    /// lower than a completed questionnaire would give.
    pub fn finish(&self, engine: &AssessmentEngine) -> Self {
        let report = engine.assess_forced(&self.answers);
        Self {
            answers: self.answers.clone(),
            cursor: engine.catalog().len(),
            report: Some(report),
            unanswered: Vec::new(),
        }
    }

    pub fn restart(&self) -> Self {
        Self::new()
    }
}
