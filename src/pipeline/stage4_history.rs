use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::records::{ALL_AROUND, ScoreRecord};
use crate::model::thresholds::CategoryProfile;
use crate::pipeline::stage1_select::MeetEntry;

/// Competition season months, January through April.
pub const SEASON_MONTHS: std::ops::RangeInclusive<u32> = 1..=4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetHeadline {
    pub meet: String,
    pub date: NaiveDate,
    pub all_around: f64,
    pub rank: u32,
    pub rank_total: u32,
    pub division: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLine {
    pub event: String,
    pub score: f64,
    pub rank: Option<u32>,
    pub season_pb: f64,
    pub is_pb: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonTable {
    pub year: i32,
    pub lines: Vec<EventLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub meet: String,
    pub all_around: f64,
    pub meets_goal: bool,
    pub is_pb: bool,
}

impl ProgressPoint {
    pub fn label(&self) -> String {
        format!("{} {}", self.date.format("%Y-%m-%d"), self.meet)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonSeries {
    pub year: i32,
    pub points: Vec<ProgressPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonProgress {
    pub goal: f64,
    pub axis: (f64, f64),
    pub seasons: Vec<SeasonSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryOutput {
    pub headline: MeetHeadline,
    pub table: SeasonTable,
    pub progress: SeasonProgress,
}

/// Event codes in first-seen order with the all-around always last.
pub fn event_order(records: &[&ScoreRecord]) -> Vec<String> {
    let mut events: Vec<String> = Vec::new();
    for r in records {
        if !r.is_all_around() && !events.contains(&r.event) {
            events.push(r.event.clone());
        }
    }
    events.push(ALL_AROUND.to_string());
    events
}

fn at_meet<'a>(records: &[&'a ScoreRecord], meet: &str, event: &str) -> Option<&'a ScoreRecord> {
    records
        .iter()
        .copied()
        .filter(|r| r.meet == meet && r.event.eq_ignore_ascii_case(event))
        .max_by_key(|r| r.date)
}

pub fn meet_headline(records: &[&ScoreRecord], meet: &MeetEntry) -> MeetHeadline {
    let aa = at_meet(records, &meet.meet, ALL_AROUND);
    let division = records
        .iter()
        .filter(|r| r.meet == meet.meet)
        .find_map(|r| r.division.clone());
    MeetHeadline {
        meet: meet.meet.clone(),
        date: meet.last_date,
        all_around: aa.map(|r| r.score).unwrap_or(0.0),
        rank: aa.and_then(|r| r.rank).unwrap_or(0),
        rank_total: aa.and_then(|r| r.rank_total).unwrap_or(0),
        division,
    }
}

/// Score, rank and calendar-year personal best for every event at one meet.
/// Events without a result count as 0.
pub fn season_table(records: &[&ScoreRecord], meet: &MeetEntry) -> SeasonTable {
    let year = meet.last_date.year();
    let lines = event_order(records)
        .into_iter()
        .map(|event| {
            let current = at_meet(records, &meet.meet, &event);
            let score = current.map(|r| r.score).unwrap_or(0.0);
            let season_pb = records
                .iter()
                .filter(|r| r.date.year() == year && r.event.eq_ignore_ascii_case(&event))
                .map(|r| r.score)
                .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))))
                .unwrap_or(0.0);
            EventLine {
                score,
                rank: current.and_then(|r| r.rank),
                season_pb,
                is_pb: current.is_some() && score == season_pb,
                event,
            }
        })
        .collect();
    SeasonTable { year, lines }
}

/// All-around series per season year, in-season months only. Each year marks
/// its first highest score as the PB.
pub fn season_progress(records: &[&ScoreRecord], profile: &CategoryProfile) -> SeasonProgress {
    let mut aa: Vec<&ScoreRecord> = records
        .iter()
        .copied()
        .filter(|r| r.is_all_around() && SEASON_MONTHS.contains(&r.date.month()))
        .collect();
    aa.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.meet.cmp(&b.meet)));

    let mut seasons: Vec<SeasonSeries> = Vec::new();
    for r in aa {
        let point = ProgressPoint {
            date: r.date,
            meet: r.meet.clone(),
            all_around: r.score,
            meets_goal: r.score >= profile.aa_goal,
            is_pb: false,
        };
        match seasons.last_mut() {
            Some(series) if series.year == r.date.year() => series.points.push(point),
            _ => seasons.push(SeasonSeries {
                year: r.date.year(),
                points: vec![point],
            }),
        }
    }

    for series in &mut seasons {
        let mut best: Option<usize> = None;
        for (idx, p) in series.points.iter().enumerate() {
            match best {
                Some(b) if series.points[b].all_around >= p.all_around => {}
                _ => best = Some(idx),
            }
        }
        if let Some(idx) = best {
            series.points[idx].is_pb = true;
        }
    }

    SeasonProgress {
        goal: profile.aa_goal,
        axis: profile.aa_axis,
        seasons,
    }
}

pub fn run_stage4(
    records: &[&ScoreRecord],
    meet: &MeetEntry,
    profile: &CategoryProfile,
) -> HistoryOutput {
    HistoryOutput {
        headline: meet_headline(records, meet),
        table: season_table(records, meet),
        progress: season_progress(records, profile),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_history.rs"]
mod tests;
