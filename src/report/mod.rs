pub mod json;
pub mod text;

pub const TOOL_NAME: &str = "kappa-cert";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_opt_3(v: Option<f64>) -> String {
    match v {
        Some(x) => format_f64_3(x),
        None => "n/a".to_string(),
    }
}

pub fn format_questions(questions: &[usize]) -> String {
    if questions.is_empty() {
        return "none".to_string();
    }
    questions
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
