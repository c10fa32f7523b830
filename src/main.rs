use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;

use kappa_cert::KappaError;
use kappa_cert::input::{InputError, load_answer_key, load_candidate_answers, load_cohort};
use kappa_cert::logging::init_tracing;
use kappa_cert::model::ScoringPolicy;
use kappa_cert::pipeline::cohort::score_cohort;
use kappa_cert::pipeline::stage1_key::build_answer_key;
use kappa_cert::pipeline::stage6_report::{
    ReportFormat, render_cohort, render_score, write_cohort_reports, write_score_reports,
};
use kappa_cert::pipeline::score_against_key;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("scoring failed: {0}")]
    Scoring(#[from] KappaError),
    #[error("report output failed: {0}")]
    Report(#[from] std::io::Error),
    #[error("report rendering failed: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum FormatArg {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "kappa-cert")]
#[command(about = "Cohen's Kappa certification scorer for binary grading exams")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct KeyArgs {
    /// Answer key file: JSON array of {question_number, expected_answer}
    #[arg(short, long)]
    key: PathBuf,

    /// Number of questions in the exam
    #[arg(short = 'n', long, default_value_t = ScoringPolicy::DEFAULT_TOTAL_QUESTIONS, value_parser = parse_question_count)]
    questions: usize,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Format printed to stdout
    #[arg(short, long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Directory to also write report files into
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score one candidate answer sheet against the key
    Score {
        #[command(flatten)]
        key: KeyArgs,

        /// Candidate answers file: JSON array of 0/1 values
        #[arg(short, long)]
        answers: PathBuf,

        /// Candidate name shown in reports
        #[arg(short, long)]
        candidate: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score every attempt in a cohort file against the key
    Batch {
        #[command(flatten)]
        key: KeyArgs,

        /// Cohort file: JSON array of {candidate, attempt?, answers}
        #[arg(long)]
        cohort: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check that an answer key covers every question
    CheckKey {
        #[command(flatten)]
        key: KeyArgs,
    },
}

fn parse_question_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("invalid question count: {s}"))?;
    if n == 0 {
        return Err("question count must be at least 1".to_string());
    }
    Ok(n)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Score {
            key,
            answers,
            candidate,
            output,
        } => run_score(&key, &answers, candidate.as_deref(), &output),
        Commands::Batch {
            key,
            cohort,
            output,
        } => run_batch(&key, &cohort, &output),
        Commands::CheckKey { key } => run_check_key(&key),
    }
}

fn run_score(
    key_args: &KeyArgs,
    answers_path: &Path,
    candidate: Option<&str>,
    output: &OutputArgs,
) -> Result<(), AppError> {
    let rows = load_answer_key(&key_args.key)?;
    let key = build_answer_key(&rows, key_args.questions)?;
    let answers = load_candidate_answers(answers_path)?;
    let scored = score_against_key(&key, &answers)?;

    info!(
        kappa = scored.metrics.kappa,
        verdict = scored.metrics.verdict.label(),
        "candidate scored"
    );

    println!("{}", render_score(&scored, candidate, output.format.into())?);
    if let Some(dir) = &output.out {
        write_score_reports(&scored, candidate, dir)?;
    }
    Ok(())
}

fn run_batch(key_args: &KeyArgs, cohort_path: &Path, output: &OutputArgs) -> Result<(), AppError> {
    let rows = load_answer_key(&key_args.key)?;
    let entries = load_cohort(cohort_path)?;
    let report = score_cohort(&rows, &entries, key_args.questions)?;

    println!("{}", render_cohort(&report, output.format.into())?);
    if let Some(dir) = &output.out {
        write_cohort_reports(&report, dir)?;
    }
    Ok(())
}

fn run_check_key(key_args: &KeyArgs) -> Result<(), AppError> {
    let rows = load_answer_key(&key_args.key)?;
    let key = build_answer_key(&rows, key_args.questions)?;
    let positive = key.positive_count();
    println!(
        "answer key OK: {} questions ({} present, {} absent) from {} rows",
        key.len(),
        positive,
        key.len() - positive,
        rows.len()
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
