pub mod answer;
pub mod bands;
pub mod confusion;
pub mod key;
pub mod metrics;
pub mod thresholds;

pub use answer::{Answer, coerce_binary, coerce_integer};
pub use bands::{AgreementBand, Verdict};
pub use confusion::{ConfusionMatrix, Disagreements};
pub use key::{AnswerKey, AnswerKeyRow};
pub use metrics::{ConfidenceInterval, KappaMetrics, RoundedMetrics};
pub use thresholds::ScoringPolicy;
