use super::catalog::QuestionCatalog;
use super::domain::QuestionKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected option token per question. Tokens are kept verbatim; an unknown
/// token is not rejected here, it simply scores zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionKey, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: QuestionKey, token: impl Into<String>) {
        self.answers.insert(key, token.into());
    }

    pub fn with(mut self, key: QuestionKey, token: impl Into<String>) -> Self {
        self.record(key, token);
        self
    }

    pub fn clear(&mut self, key: QuestionKey) -> Option<String> {
        self.answers.remove(&key)
    }

    pub fn get(&self, key: QuestionKey) -> Option<&str> {
        self.answers.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &str)> {
        self.answers.iter().map(|(key, token)| (*key, token.as_str()))
    }

    /// Blank tokens count as unanswered.
    pub fn is_answered(&self, key: QuestionKey) -> bool {
        self.get(key).is_some_and(|token| !token.trim().is_empty())
    }

    /// Questions without an answer, in questionnaire order.
    pub fn missing(&self, catalog: &QuestionCatalog) -> Vec<QuestionKey> {
        catalog
            .questions()
            .iter()
            .map(|question| question.key)
            .filter(|key| !self.is_answered(*key))
            .collect()
    }

    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        self.missing(catalog).is_empty()
    }
}

impl FromIterator<(QuestionKey, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionKey, String)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_unanswered_in_catalog_order() {
        let catalog = QuestionCatalog::standard();
        let answers = AnswerSet::new()
            .with(QuestionKey::KpisAvailable, "yes")
            .with(QuestionKey::FinancialStatements, "no")
            .with(QuestionKey::CashFlow, "");

        let missing = answers.missing(&catalog);
        assert_eq!(missing.len(), 17);
        assert_eq!(missing[0], QuestionKey::ExpenseSeparation);
        assert_eq!(missing[1], QuestionKey::CashFlow);
        assert!(!missing.contains(&QuestionKey::KpisAvailable));
        assert!(!answers.is_complete(&catalog));
    }

    #[test]
    fn deserializes_from_question_keyed_object() {
        let answers: AnswerSet = serde_json::from_str(
            r#"{ "cash_flow": "good", "licenses": "dont_know" }"#,
        )
        .expect("answers parse");
        assert_eq!(answers.get(QuestionKey::CashFlow), Some("good"));
        assert_eq!(answers.get(QuestionKey::Licenses), Some("dont_know"));
        assert_eq!(answers.len(), 2);

        let err = serde_json::from_str::<AnswerSet>(r#"{ "revenue": "yes" }"#);
        assert!(err.is_err());
    }

    #[test]
    fn later_answers_replace_earlier_ones() {
        let mut answers = AnswerSet::new();
        answers.record(QuestionKey::CrmData, "no");
        answers.record(QuestionKey::CrmData, "yes");
        assert_eq!(answers.get(QuestionKey::CrmData), Some("yes"));
        assert_eq!(answers.clear(QuestionKey::CrmData), Some("yes".to_string()));
        assert!(answers.is_empty());
    }
}
