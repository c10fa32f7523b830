use serde::Serialize;

use crate::pipeline::ScoredAttempt;
use crate::pipeline::cohort::CohortReport;
use crate::report::{TOOL_NAME, TOOL_VERSION};

#[derive(Debug, Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ToolInfo {
    fn current() -> Self {
        Self {
            name: TOOL_NAME,
            version: TOOL_VERSION,
        }
    }
}

#[derive(Debug, Serialize)]
struct ScoreDocument<'a> {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate: Option<&'a str>,
    #[serde(flatten)]
    scored: &'a ScoredAttempt,
}

#[derive(Debug, Serialize)]
struct CohortDocument<'a> {
    tool: ToolInfo,
    #[serde(flatten)]
    report: &'a CohortReport,
}

pub fn render_score_json(
    scored: &ScoredAttempt,
    candidate: Option<&str>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ScoreDocument {
        tool: ToolInfo::current(),
        candidate,
        scored,
    })
}

pub fn render_cohort_json(report: &CohortReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CohortDocument {
        tool: ToolInfo::current(),
        report,
    })
}
