use std::fmt;

use serde::Serialize;

use crate::model::thresholds::JudgeThresholds;

/// Directional bias of a judging panel relative to its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strictness {
    Strict,
    Neutral,
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProfileLabel {
    FairButTough,
    StrictAndUnpredictable,
    TextbookJudging,
    AverageButErratic,
    GenerousButPrecise,
    GenerousButErratic,
}

impl ProfileLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileLabel::FairButTough => "Fair but Tough",
            ProfileLabel::StrictAndUnpredictable => "Strict & Unpredictable",
            ProfileLabel::TextbookJudging => "Textbook Judging",
            ProfileLabel::AverageButErratic => "Average but Erratic",
            ProfileLabel::GenerousButPrecise => "Generous but Precise",
            ProfileLabel::GenerousButErratic => "Generous but Erratic",
        }
    }

    pub fn strictness(self) -> Strictness {
        match self {
            ProfileLabel::FairButTough | ProfileLabel::StrictAndUnpredictable => {
                Strictness::Strict
            }
            ProfileLabel::TextbookJudging | ProfileLabel::AverageButErratic => Strictness::Neutral,
            ProfileLabel::GenerousButPrecise | ProfileLabel::GenerousButErratic => {
                Strictness::Lenient
            }
        }
    }

    pub fn is_consistent(self) -> bool {
        matches!(
            self,
            ProfileLabel::FairButTough
                | ProfileLabel::TextbookJudging
                | ProfileLabel::GenerousButPrecise
        )
    }

    fn from_axes(strictness: Strictness, consistent: bool) -> Self {
        match (strictness, consistent) {
            (Strictness::Strict, true) => ProfileLabel::FairButTough,
            (Strictness::Strict, false) => ProfileLabel::StrictAndUnpredictable,
            (Strictness::Neutral, true) => ProfileLabel::TextbookJudging,
            (Strictness::Neutral, false) => ProfileLabel::AverageButErratic,
            (Strictness::Lenient, true) => ProfileLabel::GenerousButPrecise,
            (Strictness::Lenient, false) => ProfileLabel::GenerousButErratic,
        }
    }
}

impl fmt::Display for ProfileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a judge lookup: either a classified panel or no statistics yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JudgeVerdict {
    Classified(ProfileLabel),
    Pending,
}

impl JudgeVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            JudgeVerdict::Classified(label) => label.as_str(),
            JudgeVerdict::Pending => "Pending",
        }
    }

    pub fn is_pending(self) -> bool {
        self == JudgeVerdict::Pending
    }
}

impl fmt::Display for JudgeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a judging panel on bias (JSI) and spread (IQR).
///
/// NaN JSI compares false on both sides and lands in the neutral row; NaN IQR
/// fails `iqr < erratic_iqr` and lands in the erratic column.
pub fn classify_judge(jsi: f64, iqr: f64) -> ProfileLabel {
    classify_judge_with(jsi, iqr, &JudgeThresholds::default_v1())
}

pub fn classify_judge_with(jsi: f64, iqr: f64, thresholds: &JudgeThresholds) -> ProfileLabel {
    let strictness = if jsi < thresholds.strict_jsi {
        Strictness::Strict
    } else if jsi > thresholds.lenient_jsi {
        Strictness::Lenient
    } else {
        Strictness::Neutral
    };
    let consistent = iqr < thresholds.erratic_iqr;
    ProfileLabel::from_axes(strictness, consistent)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profiles.rs"]
mod tests;
