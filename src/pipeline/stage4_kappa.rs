use crate::error::KappaError;
use crate::model::confusion::ConfusionMatrix;
use crate::model::metrics::ConfidenceInterval;
use crate::model::thresholds::ScoringPolicy;

/// Unrounded agreement statistics for one confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgreementStats {
    pub po: f64,
    pub pe: f64,
    pub kappa: f64,
    pub confidence_interval: Option<ConfidenceInterval>,
    pub sensitivity: Option<f64>,
    pub specificity: Option<f64>,
}

pub fn run_stage4(matrix: &ConfusionMatrix) -> Result<AgreementStats, KappaError> {
    let n = matrix.total() as f64;

    let po = observed_agreement(matrix);
    let pe = expected_agreement(matrix);
    if !pe.is_finite() || (1.0 - pe).abs() < ScoringPolicy::DEGENERATE_EPS {
        return Err(KappaError::DegenerateKappa { pe });
    }

    let kappa = (po - pe) / (1.0 - pe);
    let confidence_interval = standard_error(po, pe, n).map(|se| ConfidenceInterval {
        lower: clamp_unit(kappa - ScoringPolicy::Z_95 * se),
        upper: clamp_unit(kappa + ScoringPolicy::Z_95 * se),
    });

    Ok(AgreementStats {
        po,
        pe,
        kappa,
        confidence_interval,
        sensitivity: ratio(matrix.a, matrix.key_positive()),
        specificity: ratio(matrix.d, matrix.key_negative()),
    })
}

pub fn observed_agreement(matrix: &ConfusionMatrix) -> f64 {
    matrix.agreements() as f64 / matrix.total() as f64
}

/// Chance agreement under independent marginals.
pub fn expected_agreement(matrix: &ConfusionMatrix) -> f64 {
    let n = matrix.total() as f64;
    let positive = matrix.candidate_positive() as f64 * matrix.key_positive() as f64;
    let negative = matrix.candidate_negative() as f64 * matrix.key_negative() as f64;
    (positive + negative) / (n * n)
}

/// Normal approximation; `None` when the radicand is not a finite non-negative number.
pub fn standard_error(po: f64, pe: f64, n: f64) -> Option<f64> {
    let radicand = po * (1.0 - po) / (n * (1.0 - pe).powi(2));
    if radicand.is_finite() && radicand >= 0.0 {
        Some(radicand.sqrt())
    } else {
        None
    }
}

fn ratio(num: usize, den: usize) -> Option<f64> {
    if den > 0 {
        Some(num as f64 / den as f64)
    } else {
        None
    }
}

fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_kappa.rs"]
mod tests;
