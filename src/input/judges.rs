use std::path::Path;

use crate::input::InputError;
use crate::input::context::normalize_level;
use crate::input::reader::CsvTable;
use crate::model::records::{JudgeKey, JudgeStat, JudgeTable};

pub fn load_judge_table(path: &Path) -> Result<JudgeTable, InputError> {
    let table = CsvTable::read(path)?;
    judge_table_from_table(&table)
}

pub fn judge_table_from_table(table: &CsvTable) -> Result<JudgeTable, InputError> {
    let meet_col = table.require("Meet")?;
    let level_col = table.require("Level")?;
    let event_col = table.require("Event")?;
    let jsi_col = table.require("JSI_Standard")?;
    let iqr_col = table.require("IQR")?;

    let mut out = JudgeTable::default();
    for row in &table.rows {
        let (Some(meet), Some(level), Some(event)) = (
            row.text(meet_col),
            row.text(level_col),
            row.text(event_col),
        ) else {
            tracing::warn!(file = %table.name, line = row.line_no, "judge row missing meet, level or event; skipping");
            continue;
        };
        let (Some(jsi), Some(iqr)) = (row.number(Some(jsi_col)), row.number(Some(iqr_col))) else {
            tracing::warn!(file = %table.name, line = row.line_no, "judge row has no parseable JSI/IQR; skipping");
            continue;
        };
        if iqr < 0.0 {
            tracing::warn!(file = %table.name, line = row.line_no, iqr, "negative IQR; skipping");
            continue;
        }
        let key = JudgeKey::new(meet, &normalize_level(level), event);
        if !out.insert(key, JudgeStat { jsi, iqr }) {
            tracing::warn!(
                file = %table.name,
                line = row.line_no,
                meet,
                level,
                event,
                "duplicate judge key; keeping first"
            );
        }
    }
    Ok(out)
}
