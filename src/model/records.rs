//! Read-only tables produced by the upstream batch analytics step.
//!
//! Missing values follow one policy, applied by the loaders in `crate::input`:
//! a missing or unparseable score (or level-tier percentile/count) skips the
//! row with a warning; missing rank, rank total and division become `None`;
//! missing division-tier columns leave the division tier absent.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Event code of the all-around composite.
pub const ALL_AROUND: &str = "AA";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub athlete: String,
    pub meet: String,
    pub date: NaiveDate,
    pub event: String,
    pub score: f64,
    pub rank: Option<u32>,
    pub rank_total: Option<u32>,
    pub division: Option<String>,
}

impl ScoreRecord {
    pub fn is_all_around(&self) -> bool {
        self.event.eq_ignore_ascii_case(ALL_AROUND)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JudgeKey {
    pub meet: String,
    pub level: String,
    pub event: String,
}

impl JudgeKey {
    pub fn new(meet: &str, level: &str, event: &str) -> Self {
        Self {
            meet: meet.to_string(),
            level: level.to_string(),
            event: event.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JudgeStat {
    pub jsi: f64,
    pub iqr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopulationStats {
    pub max: f64,
    pub median: f64,
    pub percentile: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextRow {
    pub athlete: String,
    pub meet: String,
    pub level: String,
    pub event: String,
    pub score: f64,
    pub level_stats: PopulationStats,
    pub division_stats: Option<PopulationStats>,
}

impl ContextRow {
    pub fn judge_key(&self) -> JudgeKey {
        JudgeKey::new(&self.meet, &self.level, &self.event)
    }

    pub fn is_all_around(&self) -> bool {
        self.event.eq_ignore_ascii_case(ALL_AROUND)
    }
}

#[derive(Debug, Clone, Default)]
pub struct JudgeTable {
    rows: HashMap<JudgeKey, JudgeStat>,
}

impl JudgeTable {
    /// Inserts a row; an existing key keeps its first value and `false` is
    /// returned.
    pub fn insert(&mut self, key: JudgeKey, stat: JudgeStat) -> bool {
        if self.rows.contains_key(&key) {
            return false;
        }
        self.rows.insert(key, stat);
        true
    }

    pub fn get(&self, key: &JudgeKey) -> Option<&JudgeStat> {
        self.rows.get(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Immutable view over every loaded table, passed explicitly to each stage.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub scores: Vec<ScoreRecord>,
    pub contexts: Vec<ContextRow>,
    pub judges: JudgeTable,
}

pub fn athlete_matches(name: &str, query: &str) -> bool {
    name.trim().eq_ignore_ascii_case(query.trim())
}

impl DataContext {
    pub fn scores_for<'a>(&'a self, athlete: &str) -> impl Iterator<Item = &'a ScoreRecord> {
        self.scores
            .iter()
            .filter(move |r| athlete_matches(&r.athlete, athlete))
    }

    pub fn contexts_for<'a>(
        &'a self,
        athlete: &str,
        meet: &str,
    ) -> impl Iterator<Item = &'a ContextRow> {
        self.contexts
            .iter()
            .filter(move |r| athlete_matches(&r.athlete, athlete) && r.meet == meet)
    }
}
