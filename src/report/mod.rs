pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::context::ContextSummary;
use crate::model::thresholds::{JudgeThresholds, MoodThresholds};
use crate::pipeline::stage4_history::HistoryOutput;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct ReportData<'a> {
    pub tool: ToolMeta,
    pub athlete: &'a str,
    pub category: Option<&'a str>,
    pub floor: f64,
    pub judge_thresholds: JudgeThresholds,
    pub mood_thresholds: MoodThresholds,
    pub history: &'a HistoryOutput,
    pub events: &'a [ContextSummary],
}

pub fn format_score(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_index(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_rank(rank: Option<u32>) -> String {
    rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One-line caption under an event range, e.g.
/// `Top 12.5% of 40 Level 4s | Judge Profile: Textbook Judging (JSI: 0.02 | IQR: 0.31)`.
pub fn event_caption(summary: &ContextSummary) -> String {
    format!(
        "Top {:.1}% of {} Level {}s | Judge Profile: {} (JSI: {} | IQR: {})",
        summary.standing.percentile,
        summary.standing.count,
        summary.level,
        summary.judge.verdict,
        format_index(summary.judge.jsi),
        format_index(summary.judge.iqr)
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
