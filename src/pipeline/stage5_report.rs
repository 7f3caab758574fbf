use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::context::{ContextSummary, Tier};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ReportData, format_index, format_score};

pub fn write_reports(data: &ReportData<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let context_path = out_dir.join("context.tsv");
    write_context_tsv(data.events, &context_path)?;

    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(data)?;
    write_text(&summary_path, &json)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(data))?;

    tracing::info!(out_dir = %out_dir.display(), events = data.events.len(), "reports written");
    Ok(())
}

/// Tabs and line breaks inside a value would shift or split TSV columns.
pub fn tsv_field(value: &str) -> String {
    value
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect()
}

fn optional_score(v: Option<f64>) -> String {
    v.map(format_score).unwrap_or_default()
}

fn write_context_tsv(events: &[ContextSummary], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "meet",
        "level",
        "event",
        "score",
        "floor",
        "ceiling",
        "level_max",
        "level_median",
        "div_max",
        "div_median",
        "percentile",
        "count",
        "standing",
        "judge_profile",
        "judge_mood",
        "jsi",
        "iqr",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for s in events {
        let level = s.tier(Tier::Level);
        let division = s.tier(Tier::Division);
        let row = [
            tsv_field(&s.meet),
            tsv_field(&s.level),
            tsv_field(&s.event),
            format_score(s.score),
            optional_score(level.map(|t| t.floor)),
            optional_score(level.map(|t| t.ceiling)),
            optional_score(level.map(|t| t.max)),
            optional_score(level.map(|t| t.median)),
            optional_score(division.map(|t| t.max)),
            optional_score(division.map(|t| t.median)),
            format!("{:.1}", s.standing.percentile),
            s.standing.count.to_string(),
            s.standing.label(),
            s.judge.verdict.to_string(),
            s.judge.mood.map(|m| m.to_string()).unwrap_or_default(),
            format_index(s.judge.jsi),
            format_index(s.judge.iqr),
        ];
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
