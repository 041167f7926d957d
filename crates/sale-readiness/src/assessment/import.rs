use super::answers::AnswerSet;
use super::domain::QuestionKey;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownQuestion { row: usize, key: String },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answers file: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answers CSV: {}", err),
            AnswerImportError::Json(err) => write!(f, "invalid answers JSON: {}", err),
            AnswerImportError::UnknownQuestion { row, key } => {
                write!(f, "row {}: unknown question key '{}'", row, key)
            }
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Json(err) => Some(err),
            AnswerImportError::UnknownQuestion { .. } => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for AnswerImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question: String,
    #[serde(default)]
    answer: Option<String>,
}

/// Loads saved answers from a `question,answer` CSV export or a JSON object.
pub struct AnswerImporter;

impl AnswerImporter {
    /// Picks the format from the extension; anything other than `.json` is read as CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSet, AnswerImportError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let raw = std::fs::read_to_string(path)?;
            Self::from_json_str(&raw)
        } else {
            let file = std::fs::File::open(path)?;
            Self::from_reader(file)
        }
    }

    /// A repeated question keeps its last row; a blank answer leaves the question unanswered.
    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerSet, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut answers = AnswerSet::new();

        for (index, record) in csv_reader.deserialize::<AnswerRow>().enumerate() {
            let row = record?;
            let key: QuestionKey =
                row.question
                    .parse()
                    .map_err(|_| AnswerImportError::UnknownQuestion {
                        row: index + 2,
                        key: row.question.clone(),
                    })?;

            match row.answer.filter(|value| !value.is_empty()) {
                Some(token) => answers.record(key, token),
                None => {
                    answers.clear(key);
                }
            }
        }

        Ok(answers)
    }

    pub fn from_json_str(raw: &str) -> Result<AnswerSet, AnswerImportError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_csv_rows() {
        let csv = "question,answer\n cash_flow , good \nlicenses,dont_know\ncrm_data,\n";
        let answers = AnswerImporter::from_reader(Cursor::new(csv)).expect("csv parses");
        assert_eq!(answers.get(QuestionKey::CashFlow), Some("good"));
        assert_eq!(answers.get(QuestionKey::Licenses), Some("dont_know"));
        assert_eq!(answers.get(QuestionKey::CrmData), None);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn last_duplicate_row_wins() {
        let csv = "question,answer\nteaser_ready,no\nteaser_ready,yes\n";
        let answers = AnswerImporter::from_reader(Cursor::new(csv)).expect("csv parses");
        assert_eq!(answers.get(QuestionKey::TeaserReady), Some("yes"));
    }

    #[test]
    fn trailing_blank_row_clears_earlier_answer() {
        let csv = "question,answer\nlicenses,yes\nlicenses,\ncash_flow,good\n";
        let answers = AnswerImporter::from_reader(Cursor::new(csv)).expect("csv parses");
        assert_eq!(answers.get(QuestionKey::Licenses), None);
        assert_eq!(answers.get(QuestionKey::CashFlow), Some("good"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn unknown_question_reports_row_number() {
        let csv = "question,answer\nlicenses,yes\nrevenue,yes\n";
        let err = AnswerImporter::from_reader(Cursor::new(csv)).expect_err("unknown key");
        match err {
            AnswerImportError::UnknownQuestion { row, key } => {
                assert_eq!(row, 3);
                assert_eq!(key, "revenue");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_json_objects() {
        let answers = AnswerImporter::from_json_str(r#"{"legal_risks": "no"}"#).expect("json");
        assert_eq!(answers.get(QuestionKey::LegalRisks), Some("no"));
    }
}
