use std::path::Path;

use chrono::NaiveDate;

use crate::input::InputError;
use crate::input::reader::CsvTable;
use crate::model::records::ScoreRecord;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // pandas exports timestamps as "2024-02-10 00:00:00"
    let date_part = raw.split([' ', 'T']).next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

pub fn load_score_records(path: &Path) -> Result<Vec<ScoreRecord>, InputError> {
    let table = CsvTable::read(path)?;
    score_records_from_table(&table)
}

pub fn score_records_from_table(table: &CsvTable) -> Result<Vec<ScoreRecord>, InputError> {
    let athlete_col = table.require("Gymnast")?;
    let meet_col = table.require("Meet")?;
    let date_col = table.require("Date")?;
    let event_col = table.require("Event")?;
    let score_col = table.require("Score")?;
    let rank_col = table.column("Rank");
    let total_col = table.column("Rank_Total");
    let division_col = table.column("Division");

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let (Some(athlete), Some(meet), Some(event)) = (
            row.text(athlete_col),
            row.text(meet_col),
            row.text(event_col),
        ) else {
            tracing::warn!(file = %table.name, line = row.line_no, "score row missing athlete, meet or event; skipping");
            continue;
        };
        let Some(date) = row.text(date_col).and_then(parse_date) else {
            tracing::warn!(file = %table.name, line = row.line_no, "score row has no parseable date; skipping");
            continue;
        };
        let Some(score) = row.number(Some(score_col)) else {
            tracing::warn!(file = %table.name, line = row.line_no, "score row has no parseable score; skipping");
            continue;
        };
        out.push(ScoreRecord {
            athlete: athlete.to_string(),
            meet: meet.to_string(),
            date,
            event: event.to_string(),
            score,
            rank: row.count(rank_col),
            rank_total: row.count(total_col),
            division: row.get(division_col).map(str::to_string),
        });
    }
    Ok(out)
}
