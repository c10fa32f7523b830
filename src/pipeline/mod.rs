pub mod cohort;
pub mod stage1_key;
pub mod stage2_validate;
pub mod stage3_matrix;
pub mod stage4_kappa;
pub mod stage5_classify;
pub mod stage6_report;

use serde::Serialize;
use serde_json::Value;

use crate::error::KappaError;
use crate::model::confusion::Disagreements;
use crate::model::key::{AnswerKey, AnswerKeyRow};
use crate::model::metrics::{KappaMetrics, RoundedMetrics};
use crate::pipeline::stage1_key::build_answer_key;
use crate::pipeline::stage2_validate::validate_answers;
use crate::pipeline::stage3_matrix::run_stage3;
use crate::pipeline::stage4_kappa::run_stage4;
use crate::pipeline::stage5_classify::run_stage5;

/// One scored answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAttempt {
    pub metrics: KappaMetrics,
    pub disagreements: Disagreements,
}

/// Scores a candidate's raw answers against raw gold-standard rows.
pub fn compute_kappa_metrics(
    answer_key: &[AnswerKeyRow],
    candidate_answers: &Value,
    total_questions: usize,
) -> Result<KappaMetrics, KappaError> {
    let key = build_answer_key(answer_key, total_questions)?;
    score_against_key(&key, candidate_answers).map(|scored| scored.metrics)
}

/// Scores raw answers against an already built key. Useful when one key is
/// reused for many candidates or retries.
pub fn score_against_key(
    key: &AnswerKey,
    candidate_answers: &Value,
) -> Result<ScoredAttempt, KappaError> {
    let candidate = validate_answers(candidate_answers, key.len())?;
    let stage3 = run_stage3(key.answers(), &candidate);
    let stats = run_stage4(&stage3.matrix)?;
    let class = run_stage5(stats.kappa);

    let rounded = RoundedMetrics::from_raw(
        stats.po,
        stats.pe,
        stats.kappa,
        stats.confidence_interval,
        stats.sensitivity,
        stats.specificity,
    );

    Ok(ScoredAttempt {
        metrics: KappaMetrics {
            total_questions: key.len(),
            matrix: stage3.matrix,
            po: stats.po,
            pe: stats.pe,
            kappa: stats.kappa,
            confidence_interval: stats.confidence_interval,
            sensitivity: stats.sensitivity,
            specificity: stats.specificity,
            interpretation: class.band,
            verdict: class.verdict,
            rounded,
        },
        disagreements: stage3.disagreements,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
