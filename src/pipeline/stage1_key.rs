use std::collections::BTreeMap;

use tracing::debug;

use crate::error::KappaError;
use crate::model::answer::{Answer, coerce_binary, coerce_integer};
use crate::model::key::{AnswerKey, AnswerKeyRow};

/// Builds the gold-standard key. Malformed rows are skipped; coverage of
/// every question in `1..=total_questions` is mandatory.
pub fn build_answer_key(
    rows: &[AnswerKeyRow],
    total_questions: usize,
) -> Result<AnswerKey, KappaError> {
    let mut by_question: BTreeMap<usize, Answer> = BTreeMap::new();
    let mut skipped = 0usize;

    for (row_idx, row) in rows.iter().enumerate() {
        let question = coerce_integer(&row.question_number)
            .and_then(|q| usize::try_from(q).ok())
            .filter(|q| (1..=total_questions).contains(q));
        let Some(question) = question else {
            debug!(
                row = row_idx,
                question_number = %row.question_number,
                "skipping answer key row with unusable question number"
            );
            skipped += 1;
            continue;
        };
        let Some(answer) = coerce_binary(&row.expected_answer) else {
            debug!(
                row = row_idx,
                question,
                expected_answer = %row.expected_answer,
                "skipping answer key row with non-binary answer"
            );
            skipped += 1;
            continue;
        };
        if by_question.insert(question, answer).is_some() {
            debug!(row = row_idx, question, "answer key row overrides an earlier row");
        }
    }

    // Keys are distinct and in range, so a gap shows up within len + 1 steps.
    if let Some(question) = (1..=total_questions).find(|q| !by_question.contains_key(q)) {
        return Err(KappaError::IncompleteAnswerKey { question });
    }
    let answers: Vec<Answer> = by_question.into_values().collect();

    debug!(
        rows = rows.len(),
        skipped,
        total_questions,
        "answer key built"
    );
    Ok(AnswerKey::from_complete(answers))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_key.rs"]
mod tests;
