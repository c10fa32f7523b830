use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::KappaError;
use crate::model::key::AnswerKeyRow;
use crate::pipeline::stage1_key::build_answer_key;
use crate::pipeline::{ScoredAttempt, score_against_key};
use crate::report::median;

/// One answer sheet submitted by a trainee. The same candidate may appear
/// several times (retries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortEntry {
    pub candidate: String,
    #[serde(default)]
    pub attempt: Option<u32>,
    #[serde(default)]
    pub answers: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AttemptOutcome {
    Scored(ScoredAttempt),
    Failed {
        kind: &'static str,
        message: String,
        #[serde(skip)]
        error: KappaError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortAttempt {
    pub candidate: String,
    pub attempt: Option<u32>,
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub entries: usize,
    pub scored: usize,
    pub qualified: usize,
    pub requires_retraining: usize,
    pub failed: usize,
    pub pass_rate: Option<f64>,
    pub median_kappa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortReport {
    pub total_questions: usize,
    pub attempts: Vec<CohortAttempt>,
    pub summary: CohortSummary,
}

impl CohortAttempt {
    pub fn scored(&self) -> Option<&ScoredAttempt> {
        match &self.outcome {
            AttemptOutcome::Scored(s) => Some(s),
            AttemptOutcome::Failed { .. } => None,
        }
    }
}

/// Scores every entry against one key. The key must be complete; a bad
/// answer sheet only fails its own entry.
pub fn score_cohort(
    answer_key: &[AnswerKeyRow],
    entries: &[CohortEntry],
    total_questions: usize,
) -> Result<CohortReport, KappaError> {
    let key = build_answer_key(answer_key, total_questions)?;

    let mut attempts = Vec::with_capacity(entries.len());
    for entry in entries {
        let outcome = match score_against_key(&key, &entry.answers) {
            Ok(scored) => {
                info!(
                    candidate = %entry.candidate,
                    attempt = ?entry.attempt,
                    kappa = scored.metrics.kappa,
                    verdict = scored.metrics.verdict.label(),
                    "scored attempt"
                );
                AttemptOutcome::Scored(scored)
            }
            Err(error) => {
                warn!(
                    candidate = %entry.candidate,
                    attempt = ?entry.attempt,
                    kind = error.kind(),
                    "attempt could not be scored: {error}"
                );
                AttemptOutcome::Failed {
                    kind: error.kind(),
                    message: error.to_string(),
                    error,
                }
            }
        };
        attempts.push(CohortAttempt {
            candidate: entry.candidate.clone(),
            attempt: entry.attempt,
            outcome,
        });
    }

    let summary = summarize(&attempts);
    Ok(CohortReport {
        total_questions,
        attempts,
        summary,
    })
}

pub fn summarize(attempts: &[CohortAttempt]) -> CohortSummary {
    let kappas: Vec<f64> = attempts
        .iter()
        .filter_map(|a| a.scored())
        .map(|s| s.metrics.kappa)
        .collect();
    let qualified = attempts
        .iter()
        .filter_map(|a| a.scored())
        .filter(|s| s.metrics.verdict.is_qualified())
        .count();
    let scored = kappas.len();

    CohortSummary {
        entries: attempts.len(),
        scored,
        qualified,
        requires_retraining: scored - qualified,
        failed: attempts.len() - scored,
        pass_rate: if scored > 0 {
            Some(qualified as f64 / scored as f64)
        } else {
            None
        },
        median_kappa: if scored > 0 { Some(median(&kappas)) } else { None },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/cohort.rs"]
mod tests;
