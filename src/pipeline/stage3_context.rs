use crate::model::context::{ContextSummary, Standing, Tier, TierRange};
use crate::model::records::{ContextRow, JudgeTable, PopulationStats};
use crate::model::thresholds::RANGE_CEILING;
use crate::pipeline::stage2_judges::{JudgeRules, judge_context};

fn tier_range(tier: Tier, stats: &PopulationStats, floor: f64) -> TierRange {
    TierRange {
        tier,
        floor,
        ceiling: RANGE_CEILING,
        max: stats.max,
        median: stats.median,
        percentile: stats.percentile,
        count: stats.count,
    }
}

/// Builds the display summary for one event row with the default rules.
pub fn compute_context(row: &ContextRow, judges: &JudgeTable, floor: f64) -> ContextSummary {
    compute_context_with(row, judges, floor, &JudgeRules::default_v1())
}

pub fn compute_context_with(
    row: &ContextRow,
    judges: &JudgeTable,
    floor: f64,
    rules: &JudgeRules,
) -> ContextSummary {
    let level = tier_range(Tier::Level, &row.level_stats, floor);
    let mut tiers = vec![level];

    if let Some(div_stats) = &row.division_stats {
        let mut division = tier_range(Tier::Division, div_stats, floor);
        // NaN max compares false and is left as is.
        if division.max > level.max {
            tracing::warn!(
                athlete = %row.athlete,
                meet = %row.meet,
                event = %row.event,
                division_max = division.max,
                level_max = level.max,
                "division max exceeds level max; clamping"
            );
            division.max = level.max;
        }
        tiers.push(division);
    }

    ContextSummary {
        meet: row.meet.clone(),
        level: row.level.clone(),
        event: row.event.clone(),
        score: row.score,
        tiers,
        standing: Standing {
            percentile: row.level_stats.percentile,
            count: row.level_stats.count,
        },
        judge: judge_context(&row.judge_key(), judges, rules),
    }
}

pub fn run_stage3(
    rows: &[&ContextRow],
    judges: &JudgeTable,
    floor: f64,
    rules: &JudgeRules,
) -> Vec<ContextSummary> {
    let out: Vec<ContextSummary> = rows
        .iter()
        .map(|row| compute_context_with(row, judges, floor, rules))
        .collect();
    let pending = out.iter().filter(|s| s.judge.verdict.is_pending()).count();
    tracing::info!(events = out.len(), pending, floor, "context summaries computed");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_context.rs"]
mod tests;
