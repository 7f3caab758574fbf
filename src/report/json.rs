use serde::Serialize;

use crate::model::context::{Tier, TierRange};
use crate::model::thresholds::{JudgeThresholds, MoodThresholds};
use crate::pipeline::stage4_history::HistoryOutput;
use crate::report::{ReportData, ToolMeta};

#[derive(Debug, Serialize)]
struct TierJson {
    tier: &'static str,
    floor: f64,
    ceiling: f64,
    max: f64,
    span: f64,
    median: f64,
    percentile: f64,
    count: u32,
}

impl From<&TierRange> for TierJson {
    fn from(t: &TierRange) -> Self {
        Self {
            tier: match t.tier {
                Tier::Level => "level",
                Tier::Division => "division",
            },
            floor: t.floor,
            ceiling: t.ceiling,
            max: t.max,
            span: t.span(),
            median: t.median,
            percentile: t.percentile,
            count: t.count,
        }
    }
}

#[derive(Debug, Serialize)]
struct JudgeJson {
    profile: &'static str,
    pending: bool,
    mood: Option<&'static str>,
    jsi: f64,
    iqr: f64,
}

#[derive(Debug, Serialize)]
struct EventJson {
    event: String,
    level: String,
    score: f64,
    standing: String,
    tiers: Vec<TierJson>,
    judge: JudgeJson,
}

#[derive(Debug, Serialize)]
struct ThresholdsJson {
    profile: JudgeThresholds,
    mood: MoodThresholds,
}

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: &'a ToolMeta,
    athlete: &'a str,
    category: Option<&'a str>,
    floor: f64,
    thresholds: ThresholdsJson,
    history: &'a HistoryOutput,
    events: Vec<EventJson>,
}

pub fn render_summary_json(data: &ReportData<'_>) -> serde_json::Result<String> {
    let events = data
        .events
        .iter()
        .map(|s| EventJson {
            event: s.event.clone(),
            level: s.level.clone(),
            score: s.score,
            standing: s.standing.label(),
            tiers: s.tiers.iter().map(TierJson::from).collect(),
            judge: JudgeJson {
                profile: s.judge.verdict.as_str(),
                pending: s.judge.verdict.is_pending(),
                mood: s.judge.mood.map(|m| m.as_str()),
                jsi: s.judge.jsi,
                iqr: s.judge.iqr,
            },
        })
        .collect();
    let summary = SummaryJson {
        tool: &data.tool,
        athlete: data.athlete,
        category: data.category,
        floor: data.floor,
        thresholds: ThresholdsJson {
            profile: data.judge_thresholds,
            mood: data.mood_thresholds,
        },
        history: data.history,
        events,
    };
    serde_json::to_string_pretty(&summary)
}
