use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::AnswerSet;
use crate::assessment::catalog::{QuestionCatalog, QuestionTemplate};
use crate::assessment::contact::{ContactChannel, ContactError, ContactReceipt, ContactSubmission};
use crate::assessment::domain::{AnswerDomain, CategoryId};
use crate::assessment::engine::{AssessmentConfig, AssessmentEngine, PartialAnswerPolicy};
use crate::assessment::{assessment_router, AssessmentService};

pub(super) fn engine() -> AssessmentEngine {
    engine_with(PartialAnswerPolicy::ZeroFill)
}

pub(super) fn engine_with(policy: PartialAnswerPolicy) -> AssessmentEngine {
    AssessmentEngine::standard(AssessmentConfig {
        partial_answers: policy,
    })
    .expect("standard catalog is consistent")
}

pub(super) fn most_positive(question: &QuestionTemplate) -> &'static str {
    match question.domain {
        AnswerDomain::Ternary => "yes",
        AnswerDomain::FivePoint => "excellent",
    }
}

pub(super) fn most_negative(question: &QuestionTemplate) -> &'static str {
    match question.domain {
        AnswerDomain::Ternary => "no",
        AnswerDomain::FivePoint => "very_poor",
    }
}

pub(super) fn answers_with<F>(catalog: &QuestionCatalog, pick: F) -> AnswerSet
where
    F: Fn(&QuestionTemplate) -> &'static str,
{
    catalog
        .questions()
        .iter()
        .map(|question| (question.key, pick(question).to_string()))
        .collect()
}

pub(super) fn all_positive(catalog: &QuestionCatalog) -> AnswerSet {
    answers_with(catalog, most_positive)
}

pub(super) fn all_negative(catalog: &QuestionCatalog) -> AnswerSet {
    answers_with(catalog, most_negative)
}

/// Every category at its best except `weak`, which gets the worst answers.
pub(super) fn weak_category(catalog: &QuestionCatalog, weak: CategoryId) -> AnswerSet {
    answers_with(catalog, |question| {
        if question.category == weak {
            most_negative(question)
        } else {
            most_positive(question)
        }
    })
}

pub(super) fn contact_submission() -> ContactSubmission {
    ContactSubmission {
        full_name: "Noa Cohen".to_string(),
        mobile: "+972-52-555-0101".to_string(),
        email: "noa@example.com".to_string(),
        assessment_score: 83,
        assessment_result: "business ready at a high level for sale".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryContacts {
    deliveries: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl MemoryContacts {
    pub(super) fn deliveries(&self) -> Vec<ContactSubmission> {
        self.deliveries
            .lock()
            .expect("contact mutex poisoned")
            .clone()
    }
}

impl ContactChannel for MemoryContacts {
    fn deliver(&self, submission: ContactSubmission) -> Result<ContactReceipt, ContactError> {
        self.deliveries
            .lock()
            .expect("contact mutex poisoned")
            .push(submission);
        Ok(ContactReceipt {
            message: "Thanks, we will be in touch shortly".to_string(),
        })
    }
}

pub(super) struct OfflineContacts;

impl ContactChannel for OfflineContacts {
    fn deliver(&self, _submission: ContactSubmission) -> Result<ContactReceipt, ContactError> {
        Err(ContactError::Transport("mail relay offline".to_string()))
    }
}

pub(super) fn build_service(
    policy: PartialAnswerPolicy,
) -> (AssessmentService<MemoryContacts>, Arc<MemoryContacts>) {
    let contacts = Arc::new(MemoryContacts::default());
    let service = AssessmentService::new(Arc::new(engine_with(policy)), contacts.clone());
    (service, contacts)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryContacts>) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
