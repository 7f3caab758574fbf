use chrono::NaiveDate;

use crate::input::InputError;
use crate::model::records::{ContextRow, DataContext, ScoreRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct MeetEntry {
    pub meet: String,
    pub last_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub athlete: String,
    pub meet: MeetEntry,
    /// All meets of the athlete, most recent first.
    pub meets: Vec<MeetEntry>,
    pub records: Vec<&'a ScoreRecord>,
    /// Per-event context rows of the selected meet, all-around excluded.
    pub context_rows: Vec<&'a ContextRow>,
}

/// Orders meets by the latest date seen for each, most recent first. Ties
/// keep name order.
pub fn order_meets<'a, I>(records: I) -> Vec<MeetEntry>
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    let mut meets: Vec<MeetEntry> = Vec::new();
    for record in records {
        match meets.iter_mut().find(|m| m.meet == record.meet) {
            Some(entry) => {
                if record.date > entry.last_date {
                    entry.last_date = record.date;
                }
            }
            None => meets.push(MeetEntry {
                meet: record.meet.clone(),
                last_date: record.date,
            }),
        }
    }
    meets.sort_by(|a, b| {
        b.last_date
            .cmp(&a.last_date)
            .then_with(|| a.meet.cmp(&b.meet))
    });
    meets
}

pub fn run_stage1<'a>(
    ctx: &'a DataContext,
    athlete: &str,
    meet: Option<&str>,
) -> Result<Selection<'a>, InputError> {
    let records: Vec<&ScoreRecord> = ctx.scores_for(athlete).collect();
    if records.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "no score records for athlete {athlete}"
        )));
    }
    let meets = order_meets(records.iter().copied());

    let selected = match meet {
        Some(name) => meets
            .iter()
            .find(|m| m.meet == name)
            .cloned()
            .ok_or_else(|| {
                InputError::InvalidInput(format!("athlete {athlete} has no results at meet {name}"))
            })?,
        None => meets[0].clone(),
    };

    let context_rows: Vec<&ContextRow> = ctx
        .contexts_for(athlete, &selected.meet)
        .filter(|r| !r.is_all_around())
        .collect();
    if context_rows.is_empty() {
        tracing::warn!(athlete, meet = %selected.meet, "no context rows for selected meet");
    }
    tracing::info!(
        athlete,
        meet = %selected.meet,
        meets = meets.len(),
        events = context_rows.len(),
        "selection resolved"
    );

    Ok(Selection {
        athlete: records[0].athlete.clone(),
        meet: selected,
        meets,
        records,
        context_rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_select.rs"]
mod tests;
