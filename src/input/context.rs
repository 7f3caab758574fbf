use std::path::Path;

use crate::input::InputError;
use crate::input::reader::{CsvRow, CsvTable};
use crate::model::records::{ContextRow, PopulationStats};

struct TierColumns {
    max: Option<usize>,
    median: Option<usize>,
    percentile: Option<usize>,
    count: Option<usize>,
}

impl TierColumns {
    fn read(&self, row: &CsvRow) -> Option<PopulationStats> {
        Some(PopulationStats {
            max: row.number(self.max)?,
            median: row.number(self.median)?,
            percentile: row.number(self.percentile)?,
            count: row.count(self.count)?,
        })
    }
}

fn valid_stats(stats: &PopulationStats) -> bool {
    (0.0..=100.0).contains(&stats.percentile) && stats.count >= 1
}

pub fn load_context_rows(path: &Path) -> Result<Vec<ContextRow>, InputError> {
    let table = CsvTable::read(path)?;
    context_rows_from_table(&table)
}

pub fn context_rows_from_table(table: &CsvTable) -> Result<Vec<ContextRow>, InputError> {
    let athlete_col = table.require("Gymnast")?;
    let meet_col = table.require("Meet")?;
    let level_col = table.require("Level")?;
    let event_col = table.require("Event")?;
    let score_col = table.require("Score")?;
    let level_cols = TierColumns {
        max: Some(table.require("Level_Max")?),
        median: Some(table.require("Level_Median")?),
        percentile: Some(table.require("Percentile")?),
        count: Some(table.require("Count")?),
    };
    let div_max = table.column("Div_Max");
    // Division percentile/count fall back to the level columns when absent;
    // max and median have no fallback.
    let div_cols = TierColumns {
        max: div_max,
        median: table.column("Div_Median"),
        percentile: table.column("Div_Percentile").or(level_cols.percentile),
        count: table.column("Div_Count").or(level_cols.count),
    };

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let (Some(athlete), Some(meet), Some(level), Some(event)) = (
            row.text(athlete_col),
            row.text(meet_col),
            row.text(level_col),
            row.text(event_col),
        ) else {
            tracing::warn!(file = %table.name, line = row.line_no, "context row missing key columns; skipping");
            continue;
        };
        let Some(score) = row.number(Some(score_col)) else {
            tracing::warn!(file = %table.name, line = row.line_no, "context row has no parseable score; skipping");
            continue;
        };
        let Some(level_stats) = level_cols.read(row) else {
            tracing::warn!(file = %table.name, line = row.line_no, "context row has incomplete level statistics; skipping");
            continue;
        };
        if !valid_stats(&level_stats) {
            tracing::warn!(
                file = %table.name,
                line = row.line_no,
                percentile = level_stats.percentile,
                count = level_stats.count,
                "level statistics out of range; skipping"
            );
            continue;
        }
        let division_stats = match div_cols.read(row) {
            Some(stats) if valid_stats(&stats) => Some(stats),
            Some(stats) => {
                tracing::warn!(
                    file = %table.name,
                    line = row.line_no,
                    percentile = stats.percentile,
                    count = stats.count,
                    "division statistics out of range; dropping division tier"
                );
                None
            }
            None => None,
        };
        out.push(ContextRow {
            athlete: athlete.to_string(),
            meet: meet.to_string(),
            level: normalize_level(level),
            event: event.to_string(),
            score,
            level_stats,
            division_stats,
        });
    }
    Ok(out)
}

/// Levels are exported as `4` or `4.0` depending on the upstream dtype; the
/// judge table keys them as `4`.
pub fn normalize_level(raw: &str) -> String {
    match raw.strip_suffix(".0") {
        Some(stem) if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) => {
            stem.to_string()
        }
        _ => raw.to_string(),
    }
}
