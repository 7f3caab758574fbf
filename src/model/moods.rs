use std::fmt;

use serde::Serialize;

use crate::model::thresholds::MoodThresholds;

/// JSI-only scale, ordered strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MoodLabel {
    SignificantlyStricter,
    SlightlyStricter,
    AverageScoring,
    SlightlyLooser,
    SignificantlyLooser,
}

impl MoodLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            MoodLabel::SignificantlyStricter => "Significantly Stricter",
            MoodLabel::SlightlyStricter => "Slightly Stricter",
            MoodLabel::AverageScoring => "Average Scoring",
            MoodLabel::SlightlyLooser => "Slightly Looser",
            MoodLabel::SignificantlyLooser => "Significantly Looser",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five-bucket JSI scale. NaN falls through every comparison to
/// `AverageScoring`.
pub fn classify_mood(jsi: f64) -> MoodLabel {
    classify_mood_with(jsi, &MoodThresholds::default_v1())
}

pub fn classify_mood_with(jsi: f64, thresholds: &MoodThresholds) -> MoodLabel {
    if jsi <= thresholds.much_stricter {
        MoodLabel::SignificantlyStricter
    } else if jsi <= thresholds.stricter {
        MoodLabel::SlightlyStricter
    } else if jsi >= thresholds.much_looser {
        MoodLabel::SignificantlyLooser
    } else if jsi >= thresholds.looser {
        MoodLabel::SlightlyLooser
    } else {
        MoodLabel::AverageScoring
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/moods.rs"]
mod tests;
