mod aggregate;
mod rules;

pub use aggregate::aggregate;
pub use rules::score;

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{CategoryId, QuestionKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Per-question scores in `0..=5`, one entry for every catalog question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap {
    scores: BTreeMap<QuestionKey, u8>,
}

impl ScoreMap {
    pub fn get(&self, key: QuestionKey) -> u8 {
        self.scores.get(&key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, u8)> + '_ {
        self.scores.iter().map(|(key, score)| (*key, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(QuestionKey, u8)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (QuestionKey, u8)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Mean score per category. Means sit in `[1, 5]` for complete answer sets
/// and may drop toward 0 when questions are left unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores {
    means: BTreeMap<CategoryId, f64>,
}

impl CategoryScores {
    pub fn from_means<I>(means: I) -> Self
    where
        I: IntoIterator<Item = (CategoryId, f64)>,
    {
        Self {
            means: means.into_iter().collect(),
        }
    }

    /// Same mean for every category; handy for boundary checks.
    pub fn uniform(mean: f64) -> Self {
        Self::from_means(CategoryId::ordered().into_iter().map(|id| (id, mean)))
    }

    pub fn get(&self, category: CategoryId) -> f64 {
        self.means.get(&category).copied().unwrap_or(0.0)
    }

    /// Entries in fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, f64)> + '_ {
        CategoryId::ordered()
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Unweighted mean of the six category means.
    pub fn composite(&self) -> f64 {
        let categories = CategoryId::ordered();
        let total: f64 = categories.iter().map(|category| self.get(*category)).sum();
        total / categories.len() as f64
    }
}

/// Scores every catalog question against the recorded answers.
pub fn score_answers(catalog: &QuestionCatalog, answers: &AnswerSet) -> ScoreMap {
    catalog
        .questions()
        .iter()
        .map(|question| {
            let token = answers.get(question.key).unwrap_or("");
            let value = score(question.domain, token);
            if value == 0 && !token.trim().is_empty() {
                warn!(
                    question = %question.key,
                    token,
                    "unrecognized answer token scored as zero"
                );
            }
            (question.key, value)
        })
        .collect()
}

/// Category means for all six categories.
pub fn aggregate_all(catalog: &QuestionCatalog, scores: &ScoreMap) -> CategoryScores {
    CategoryScores::from_means(
        CategoryId::ordered()
            .into_iter()
            .map(|category| (category, aggregate(catalog, scores, category))),
    )
}
