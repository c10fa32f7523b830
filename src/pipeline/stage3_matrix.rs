use crate::model::answer::Answer;
use crate::model::confusion::{ConfusionMatrix, Disagreements};

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub matrix: ConfusionMatrix,
    pub disagreements: Disagreements,
}

/// Single pass over paired answers. Both slices must have the same length.
pub fn run_stage3(key: &[Answer], candidate: &[Answer]) -> Stage3Output {
    debug_assert_eq!(key.len(), candidate.len());
    let mut matrix = ConfusionMatrix::default();
    let mut disagreements = Disagreements::default();

    for (idx, (&k, &c)) in key.iter().zip(candidate.iter()).enumerate() {
        let question = idx + 1;
        match (k, c) {
            (Answer::Positive, Answer::Positive) => matrix.a += 1,
            (Answer::Negative, Answer::Positive) => {
                matrix.b += 1;
                disagreements.false_positives.push(question);
            }
            (Answer::Positive, Answer::Negative) => {
                matrix.c += 1;
                disagreements.false_negatives.push(question);
            }
            (Answer::Negative, Answer::Negative) => matrix.d += 1,
        }
    }

    Stage3Output {
        matrix,
        disagreements,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_matrix.rs"]
mod tests;
