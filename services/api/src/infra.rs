use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use sale_readiness::assessment::{
    AssessmentConfig, AssessmentEngine, CatalogError, ContactChannel, ContactError,
    ContactReceipt, ContactSubmission,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, Clone)]
pub(crate) struct ReceivedContact {
    pub(crate) submission: ContactSubmission,
    pub(crate) received_at: DateTime<Utc>,
}

/// Keeps contact requests in memory and logs each one. Stands in for the
/// e-mail relay until a real transport is wired up.
#[derive(Default, Clone)]
pub(crate) struct InMemoryContactChannel {
    received: Arc<Mutex<Vec<ReceivedContact>>>,
}

impl ContactChannel for InMemoryContactChannel {
    fn deliver(&self, submission: ContactSubmission) -> Result<ContactReceipt, ContactError> {
        let mut guard = self
            .received
            .lock()
            .map_err(|_| ContactError::Transport("contact inbox unavailable".to_string()))?;

        let received_at = Utc::now();
        info!(
            email = %submission.email,
            assessment_score = submission.assessment_score,
            %received_at,
            "contact request received"
        );
        guard.push(ReceivedContact {
            submission,
            received_at,
        });

        Ok(ContactReceipt {
            message: "Thank you, an advisor will contact you shortly".to_string(),
        })
    }
}

impl InMemoryContactChannel {
    pub(crate) fn received(&self) -> Vec<ReceivedContact> {
        self.received
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn build_engine(config: &AssessmentConfig) -> Result<AssessmentEngine, CatalogError> {
    AssessmentEngine::standard(config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_channel_stamps_submissions() {
        let channel = InMemoryContactChannel::default();
        let before = Utc::now();

        let receipt = channel
            .deliver(ContactSubmission {
                full_name: "Avi Mizrahi".to_string(),
                mobile: "054-0000000".to_string(),
                email: "avi@example.com".to_string(),
                assessment_score: 58,
                assessment_result: "business requires further preparation before sale"
                    .to_string(),
            })
            .expect("delivery succeeds");

        assert!(receipt.message.contains("advisor"));
        let received = channel.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].submission.assessment_score, 58);
        assert!(received[0].received_at >= before);
    }
}
