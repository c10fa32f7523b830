use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgreementBand {
    #[serde(rename = "cannot be interpreted")]
    Uninterpretable,
    #[serde(rename = "worse than chance")]
    WorseThanChance,
    #[serde(rename = "slight")]
    Slight,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "substantial")]
    Substantial,
    #[serde(rename = "almost perfect")]
    AlmostPerfect,
}

impl AgreementBand {
    pub fn label(self) -> &'static str {
        match self {
            AgreementBand::Uninterpretable => "cannot be interpreted",
            AgreementBand::WorseThanChance => "worse than chance",
            AgreementBand::Slight => "slight",
            AgreementBand::Fair => "fair",
            AgreementBand::Moderate => "moderate",
            AgreementBand::Substantial => "substantial",
            AgreementBand::AlmostPerfect => "almost perfect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "qualified")]
    Qualified,
    #[serde(rename = "requires retraining")]
    RequiresRetraining,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Qualified => "qualified",
            Verdict::RequiresRetraining => "requires retraining",
        }
    }

    pub fn is_qualified(self) -> bool {
        self == Verdict::Qualified
    }
}
