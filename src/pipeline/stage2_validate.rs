use serde_json::Value;

use crate::error::KappaError;
use crate::model::answer::{Answer, coerce_binary};

/// Validates a candidate answer sheet. Stops at the first bad value so the
/// caller can point at that exact question.
pub fn validate_answers(answers: &Value, expected_count: usize) -> Result<Vec<Answer>, KappaError> {
    let items = answers.as_array().ok_or(KappaError::NotASequence)?;
    if items.len() != expected_count {
        return Err(KappaError::WrongLength {
            expected: expected_count,
            actual: items.len(),
        });
    }
    items
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            coerce_binary(value).ok_or(KappaError::InvalidAnswerAtPosition { question: idx + 1 })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_validate.rs"]
mod tests;
