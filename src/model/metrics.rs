use serde::Serialize;

use crate::model::bands::{AgreementBand, Verdict};
use crate::model::confusion::ConfusionMatrix;
use crate::model::thresholds::ScoringPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Display values. Derived from the raw statistics once and never fed back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundedMetrics {
    pub po: f64,
    pub po_percent: f64,
    pub pe: f64,
    pub kappa: f64,
    pub ci_lower: Option<f64>,
    pub ci_upper: Option<f64>,
    pub sensitivity: Option<f64>,
    pub specificity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KappaMetrics {
    pub total_questions: usize,
    pub matrix: ConfusionMatrix,
    pub po: f64,
    pub pe: f64,
    pub kappa: f64,
    pub confidence_interval: Option<ConfidenceInterval>,
    pub sensitivity: Option<f64>,
    pub specificity: Option<f64>,
    pub interpretation: AgreementBand,
    pub verdict: Verdict,
    pub rounded: RoundedMetrics,
}

impl RoundedMetrics {
    pub fn from_raw(
        po: f64,
        pe: f64,
        kappa: f64,
        ci: Option<ConfidenceInterval>,
        sensitivity: Option<f64>,
        specificity: Option<f64>,
    ) -> Self {
        let digits = ScoringPolicy::RATIO_DIGITS;
        Self {
            po: round_to(po, digits),
            po_percent: round_to(po * 100.0, ScoringPolicy::PERCENT_DIGITS),
            pe: round_to(pe, digits),
            kappa: round_kappa(kappa),
            ci_lower: ci.map(|c| round_to(c.lower, digits)),
            ci_upper: ci.map(|c| round_to(c.upper, digits)),
            sensitivity: sensitivity.map(|v| round_to(v, digits)),
            specificity: specificity.map(|v| round_to(v, digits)),
        }
    }
}

pub fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (x * scale).round() / scale
}

/// Rounds kappa for display while keeping it on the same side of zero and of
/// the pass threshold as the raw value.
pub fn round_kappa(kappa: f64) -> f64 {
    let digits = ScoringPolicy::RATIO_DIGITS;
    let step = 10f64.powi(-digits);
    let pass = ScoringPolicy::PASS_KAPPA;
    let mut r = round_to(kappa, digits);
    if kappa < pass && r >= pass {
        r = round_to(pass - step, digits);
    } else if kappa >= pass && r < pass {
        r = pass;
    }
    if kappa < 0.0 && r >= 0.0 {
        r = -step;
    }
    r
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/metrics.rs"]
mod tests;
