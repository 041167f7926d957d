use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::answers::AnswerSet;
use super::contact::{ContactChannel, ContactError, ContactSubmission};
use super::engine::AssessmentError;
use super::service::{AssessmentService, ServiceError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub force: bool,
}

/// Router builder exposing the questionnaire, scoring, and contact endpoints.
pub fn assessment_router<C>(service: Arc<AssessmentService<C>>) -> Router
where
    C: ContactChannel + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<C>))
        .route("/api/v1/assessment/report", post(report_handler::<C>))
        .route("/api/v1/assessment/contact", post(contact_handler::<C>))
        .with_state(service)
}

pub(crate) async fn questions_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
) -> Response
where
    C: ContactChannel + 'static,
{
    (StatusCode::OK, axum::Json(service.questions())).into_response()
}

pub(crate) async fn report_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response
where
    C: ContactChannel + 'static,
{
    match service.assess(&request.answers, request.force) {
        Ok(report) => (StatusCode::OK, axum::Json(report.to_view())).into_response(),
        Err(ServiceError::Assessment(AssessmentError::Incomplete { missing })) => {
            let payload = json!({
                "error": "assessment incomplete",
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn contact_handler<C>(
    State(service): State<Arc<AssessmentService<C>>>,
    axum::Json(submission): axum::Json<ContactSubmission>,
) -> Response
where
    C: ContactChannel + 'static,
{
    match service.submit_contact(submission) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(ServiceError::Contact(ContactError::Invalid(reason))) => {
            let payload = json!({ "error": reason });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ServiceError::Contact(error @ ContactError::Transport(_))) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
