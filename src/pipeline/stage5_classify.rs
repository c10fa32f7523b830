use crate::model::bands::{AgreementBand, Verdict};
use crate::model::thresholds::{
    BAND_FAIR_MAX, BAND_MODERATE_MAX, BAND_SLIGHT_MAX, BAND_SUBSTANTIAL_MAX, ScoringPolicy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub band: AgreementBand,
    pub verdict: Verdict,
}

pub fn run_stage5(kappa: f64) -> Classification {
    Classification {
        band: interpret_kappa(kappa),
        verdict: aptitude_verdict(kappa),
    }
}

pub fn interpret_kappa(kappa: f64) -> AgreementBand {
    if !kappa.is_finite() {
        return AgreementBand::Uninterpretable;
    }

    if kappa < 0.0 {
        return AgreementBand::WorseThanChance;
    }
    if kappa <= BAND_SLIGHT_MAX {
        return AgreementBand::Slight;
    }
    if kappa <= BAND_FAIR_MAX {
        return AgreementBand::Fair;
    }
    if kappa <= BAND_MODERATE_MAX {
        return AgreementBand::Moderate;
    }
    if kappa <= BAND_SUBSTANTIAL_MAX {
        return AgreementBand::Substantial;
    }

    AgreementBand::AlmostPerfect
}

pub fn aptitude_verdict(kappa: f64) -> Verdict {
    if kappa.is_finite() && kappa >= ScoringPolicy::PASS_KAPPA {
        Verdict::Qualified
    } else {
        Verdict::RequiresRetraining
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_classify.rs"]
mod tests;
