use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::answer::Answer;

/// One row of gold-standard configuration as stored upstream. Both fields are
/// kept raw; coercion happens in the key builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerKeyRow {
    #[serde(default)]
    pub question_number: Value,
    #[serde(default)]
    pub expected_answer: Value,
}

impl AnswerKeyRow {
    pub fn new(question_number: impl Into<Value>, expected_answer: impl Into<Value>) -> Self {
        Self {
            question_number: question_number.into(),
            expected_answer: expected_answer.into(),
        }
    }
}

/// Complete gold-standard key. Index 0 holds question 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerKey {
    answers: Vec<Answer>,
}

impl AnswerKey {
    pub(crate) fn from_complete(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// 1-based lookup.
    pub fn question(&self, number: usize) -> Option<Answer> {
        number
            .checked_sub(1)
            .and_then(|idx| self.answers.get(idx).copied())
    }

    pub fn positive_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_positive()).count()
    }
}
