/// Fixed scoring policy. None of these are configurable per call.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy;

impl ScoringPolicy {
    pub const DEFAULT_TOTAL_QUESTIONS: usize = 50;
    pub const PASS_KAPPA: f64 = 0.7;
    pub const Z_95: f64 = 1.96;
    pub const DEGENERATE_EPS: f64 = 1e-12;
    pub const RATIO_DIGITS: i32 = 3;
    pub const PERCENT_DIGITS: i32 = 2;
}

/// Upper bounds (inclusive) of the Landis & Koch bands, checked in order
/// after the negative case.
pub const BAND_SLIGHT_MAX: f64 = 0.2;
pub const BAND_FAIR_MAX: f64 = 0.4;
pub const BAND_MODERATE_MAX: f64 = 0.6;
pub const BAND_SUBSTANTIAL_MAX: f64 = 0.8;
