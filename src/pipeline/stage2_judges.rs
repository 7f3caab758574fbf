use crate::model::context::JudgeContext;
use crate::model::moods::classify_mood_with;
use crate::model::profiles::{JudgeVerdict, classify_judge_with};
use crate::model::records::{JudgeKey, JudgeTable};
use crate::model::thresholds::{JudgeThresholds, MoodThresholds};

#[derive(Debug, Clone, Copy)]
pub struct JudgeRules {
    pub profile: JudgeThresholds,
    pub mood: MoodThresholds,
}

impl JudgeRules {
    pub fn default_v1() -> Self {
        Self {
            profile: JudgeThresholds::default_v1(),
            mood: MoodThresholds::default_v1(),
        }
    }
}

impl Default for JudgeRules {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Looks up the panel statistics for one (meet, level, event) and classifies
/// them. A missing row is the normal first-appearance case and yields the
/// pending sentinel.
pub fn judge_context(key: &JudgeKey, judges: &JudgeTable, rules: &JudgeRules) -> JudgeContext {
    match judges.get(key) {
        Some(stat) => JudgeContext {
            verdict: JudgeVerdict::Classified(classify_judge_with(
                stat.jsi,
                stat.iqr,
                &rules.profile,
            )),
            mood: Some(classify_mood_with(stat.jsi, &rules.mood)),
            jsi: stat.jsi,
            iqr: stat.iqr,
        },
        None => {
            tracing::debug!(
                meet = %key.meet,
                level = %key.level,
                event = %key.event,
                "no judge statistics; pending"
            );
            JudgeContext::pending()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_judges.rs"]
mod tests;
