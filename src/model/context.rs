use std::fmt;

use serde::Serialize;

use crate::model::moods::MoodLabel;
use crate::model::profiles::JudgeVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Level,
    Division,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Level => "Whole Level",
            Tier::Division => "Age Division",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded range `[floor, max]` for one population tier plus its median
/// marker, drawn on a `[floor, ceiling]` scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierRange {
    pub tier: Tier,
    pub floor: f64,
    pub ceiling: f64,
    pub max: f64,
    pub median: f64,
    pub percentile: f64,
    pub count: u32,
}

impl TierRange {
    pub fn span(&self) -> f64 {
        (self.max - self.floor).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Standing {
    pub percentile: f64,
    pub count: u32,
}

impl Standing {
    pub fn label(&self) -> String {
        format!("top {:.1}% of {}", self.percentile, self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JudgeContext {
    pub verdict: JudgeVerdict,
    pub mood: Option<MoodLabel>,
    pub jsi: f64,
    pub iqr: f64,
}

impl JudgeContext {
    pub fn pending() -> Self {
        Self {
            verdict: JudgeVerdict::Pending,
            mood: None,
            jsi: 0.0,
            iqr: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextSummary {
    pub meet: String,
    pub level: String,
    pub event: String,
    pub score: f64,
    pub tiers: Vec<TierRange>,
    pub standing: Standing,
    pub judge: JudgeContext,
}

impl ContextSummary {
    pub fn tier(&self, tier: Tier) -> Option<&TierRange> {
        self.tiers.iter().find(|t| t.tier == tier)
    }
}
