//! Cohen's Kappa certification scoring for binary visual-diagnosis exams.
//!
//! A gold-standard answer key is compared with a candidate's answer sheet;
//! the result carries observed and chance agreement, Kappa with a 95%
//! confidence interval, sensitivity, specificity, a Landis & Koch band and a
//! pass/retrain verdict.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::KappaError;
pub use model::{
    AgreementBand, Answer, AnswerKey, AnswerKeyRow, ConfidenceInterval, ConfusionMatrix,
    KappaMetrics, ScoringPolicy, Verdict,
};
pub use pipeline::cohort::{CohortEntry, CohortReport, score_cohort};
pub use pipeline::stage1_key::build_answer_key;
pub use pipeline::stage2_validate::validate_answers;
pub use pipeline::{ScoredAttempt, compute_kappa_metrics, score_against_key};
