use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::pipeline::ScoredAttempt;
use crate::pipeline::cohort::{AttemptOutcome, CohortReport};
use crate::report::json::{render_cohort_json, render_score_json};
use crate::report::text::{render_cohort_text, render_score_text};
use crate::report::{format_f64_3, format_opt_3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn render_score(
    scored: &ScoredAttempt,
    candidate: Option<&str>,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_score_text(scored, candidate)),
        ReportFormat::Json => render_score_json(scored, candidate),
    }
}

pub fn render_cohort(
    report: &CohortReport,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_cohort_text(report)),
        ReportFormat::Json => render_cohort_json(report),
    }
}

pub fn write_score_reports(
    scored: &ScoredAttempt,
    candidate: Option<&str>,
    out_dir: &Path,
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join("kappa_report.json");
    write_text(&json_path, &render_score_json(scored, candidate)?)?;

    let text_path = out_dir.join("kappa_report.txt");
    write_text(&text_path, &render_score_text(scored, candidate))?;

    info!(out_dir = %out_dir.display(), "score reports written");
    Ok(vec![json_path, text_path])
}

pub fn write_cohort_reports(report: &CohortReport, out_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join("cohort_summary.json");
    write_text(&json_path, &render_cohort_json(report)?)?;

    let text_path = out_dir.join("cohort_report.txt");
    write_text(&text_path, &render_cohort_text(report))?;

    let tsv_path = out_dir.join("cohort.tsv");
    write_cohort_tsv(report, &tsv_path)?;

    info!(
        out_dir = %out_dir.display(),
        attempts = report.attempts.len(),
        "cohort reports written"
    );
    Ok(vec![json_path, text_path, tsv_path])
}

fn write_cohort_tsv(report: &CohortReport, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "candidate",
        "attempt",
        "outcome",
        "a",
        "b",
        "c",
        "d",
        "po",
        "pe",
        "kappa",
        "ci_lower",
        "ci_upper",
        "sensitivity",
        "specificity",
        "interpretation",
        "verdict",
        "error",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for attempt in &report.attempts {
        let attempt_no = attempt.attempt.map(|n| n.to_string()).unwrap_or_default();
        let row = match &attempt.outcome {
            AttemptOutcome::Scored(scored) => {
                let m = &scored.metrics;
                let r = &m.rounded;
                vec![
                    sanitize(&attempt.candidate),
                    attempt_no,
                    "scored".to_string(),
                    m.matrix.a.to_string(),
                    m.matrix.b.to_string(),
                    m.matrix.c.to_string(),
                    m.matrix.d.to_string(),
                    format_f64_3(r.po),
                    format_f64_3(r.pe),
                    format_f64_3(r.kappa),
                    format_opt_3(r.ci_lower),
                    format_opt_3(r.ci_upper),
                    format_opt_3(r.sensitivity),
                    format_opt_3(r.specificity),
                    m.interpretation.label().to_string(),
                    m.verdict.label().to_string(),
                    String::new(),
                ]
            }
            AttemptOutcome::Failed { kind, .. } => {
                let mut row = vec![
                    sanitize(&attempt.candidate),
                    attempt_no,
                    "failed".to_string(),
                ];
                row.extend(std::iter::repeat_n(String::new(), 13));
                row.push((*kind).to_string());
                row
            }
        };
        writeln!(w, "{}", row.join("\t"))?;
    }

    w.flush()?;
    Ok(())
}

fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
