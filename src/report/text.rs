use crate::model::metrics::KappaMetrics;
use crate::model::thresholds::ScoringPolicy;
use crate::pipeline::ScoredAttempt;
use crate::pipeline::cohort::{AttemptOutcome, CohortReport};
use crate::report::{format_f64_3, format_opt_3, format_questions};

pub fn render_score_text(scored: &ScoredAttempt, candidate: Option<&str>) -> String {
    let m = &scored.metrics;
    let mut out = String::new();

    out.push_str("Grading Agreement Report\n");
    out.push_str("========================\n\n");
    if let Some(name) = candidate {
        out.push_str(&format!("Candidate: {}\n", name));
    }
    out.push_str(&format!("Questions: {}\n\n", m.total_questions));

    out.push_str("1. Confusion matrix (key x candidate)\n");
    out.push_str("              cand=1  cand=0\n");
    out.push_str(&format!("  key=1      {:>7} {:>7}\n", m.matrix.a, m.matrix.c));
    out.push_str(&format!("  key=0      {:>7} {:>7}\n\n", m.matrix.b, m.matrix.d));

    out.push_str("2. Agreement\n");
    push_statistics(&mut out, m);
    out.push('\n');

    out.push_str("3. Result\n");
    out.push_str(&format!("Interpretation: {}\n", m.interpretation.label()));
    out.push_str(&format!(
        "Verdict: {} (pass at kappa >= {})\n\n",
        m.verdict.label(),
        ScoringPolicy::PASS_KAPPA
    ));

    out.push_str("4. Questions to review\n");
    out.push_str(&format!(
        "All: {}\n",
        format_questions(&scored.disagreements.questions())
    ));
    out.push_str(&format!(
        "Marked present, key absent: {}\n",
        format_questions(&scored.disagreements.false_positives)
    ));
    out.push_str(&format!(
        "Marked absent, key present: {}\n",
        format_questions(&scored.disagreements.false_negatives)
    ));

    out
}

fn push_statistics(out: &mut String, m: &KappaMetrics) {
    let r = &m.rounded;
    out.push_str(&format!(
        "Observed agreement (po): {} ({:.2}%)\n",
        format_f64_3(r.po),
        r.po_percent
    ));
    out.push_str(&format!("Expected agreement (pe): {}\n", format_f64_3(r.pe)));
    out.push_str(&format!("Kappa: {}\n", format_f64_3(r.kappa)));
    match (r.ci_lower, r.ci_upper) {
        (Some(lo), Some(hi)) => out.push_str(&format!(
            "95% CI: [{}, {}]\n",
            format_f64_3(lo),
            format_f64_3(hi)
        )),
        _ => out.push_str("95% CI: n/a\n"),
    }
    out.push_str(&format!("Sensitivity: {}\n", format_opt_3(r.sensitivity)));
    out.push_str(&format!("Specificity: {}\n", format_opt_3(r.specificity)));
}

pub fn render_cohort_text(report: &CohortReport) -> String {
    let s = &report.summary;
    let mut out = String::new();

    out.push_str("Cohort Grading Report\n");
    out.push_str("=====================\n\n");
    out.push_str(&format!("Questions per sheet: {}\n", report.total_questions));
    out.push_str(&format!(
        "Entries: {}  scored: {}  failed: {}\n",
        s.entries, s.scored, s.failed
    ));
    out.push_str(&format!(
        "Qualified: {}  requires retraining: {}\n",
        s.qualified, s.requires_retraining
    ));
    out.push_str(&format!(
        "Pass rate: {}\n",
        match s.pass_rate {
            Some(rate) => format!("{:.2}%", rate * 100.0),
            None => "n/a".to_string(),
        }
    ));
    out.push_str(&format!("Median kappa: {}\n\n", format_opt_3(s.median_kappa)));

    out.push_str("Attempts\n");
    for attempt in &report.attempts {
        let label = match attempt.attempt {
            Some(n) => format!("{} (attempt {})", attempt.candidate, n),
            None => attempt.candidate.clone(),
        };
        match &attempt.outcome {
            AttemptOutcome::Scored(scored) => {
                let m = &scored.metrics;
                out.push_str(&format!(
                    "- {}: kappa {} ({}), {}\n",
                    label,
                    format_f64_3(m.rounded.kappa),
                    m.interpretation.label(),
                    m.verdict.label()
                ));
            }
            AttemptOutcome::Failed { message, .. } => {
                out.push_str(&format!("- {}: not scored: {}\n", label, message));
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
