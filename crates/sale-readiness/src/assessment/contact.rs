use super::report::Report;
use serde::{Deserialize, Serialize};

/// Contact-form payload forwarded to the outbound channel. The score and
/// verbal result are copied from a report and passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    #[serde(rename = "assessmentScore")]
    pub assessment_score: u8,
    #[serde(rename = "assessmentResult")]
    pub assessment_result: String,
}

impl ContactSubmission {
    pub fn for_report(
        full_name: impl Into<String>,
        mobile: impl Into<String>,
        email: impl Into<String>,
        report: &Report,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            mobile: mobile.into(),
            email: email.into(),
            assessment_score: report.overall_score,
            assessment_result: report.verbal_assessment.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            ("full_name", &self.full_name),
            ("mobile", &self.mobile),
            ("email", &self.email),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactError::Invalid(format!("{field} is required")));
        }
        if !self.email.contains('@') {
            return Err(ContactError::Invalid("email must contain '@'".to_string()));
        }
        if self.assessment_score > 100 {
            return Err(ContactError::Invalid(
                "assessmentScore must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub message: String,
}

/// Outbound hand-off (e-mail or webhook adapters) kept behind a trait so the
/// service can be exercised without a transport.
pub trait ContactChannel: Send + Sync {
    fn deliver(&self, submission: ContactSubmission) -> Result<ContactReceipt, ContactError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("invalid contact submission: {0}")]
    Invalid(String),
    #[error("contact transport unavailable: {0}")]
    Transport(String),
}
