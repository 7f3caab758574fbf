use std::collections::BTreeMap;

use serde::Serialize;

/// Cut points for the two-axis judge profile.
///
/// The strict side is exclusive (`jsi < strict_jsi`), the lenient side is
/// exclusive (`jsi > lenient_jsi`) and the erratic side is inclusive
/// (`iqr >= erratic_iqr`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JudgeThresholds {
    pub strict_jsi: f64,
    pub lenient_jsi: f64,
    pub erratic_iqr: f64,
}

impl JudgeThresholds {
    pub const STRICT_JSI: f64 = -0.10;
    pub const LENIENT_JSI: f64 = 0.10;
    pub const ERRATIC_IQR: f64 = 0.50;

    pub fn default_v1() -> Self {
        Self {
            strict_jsi: Self::STRICT_JSI,
            lenient_jsi: Self::LENIENT_JSI,
            erratic_iqr: Self::ERRATIC_IQR,
        }
    }
}

impl Default for JudgeThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Cut points for the single-axis mood scale. Every band is inclusive on its
/// extreme side (`<=` below zero, `>=` above zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodThresholds {
    pub much_stricter: f64,
    pub stricter: f64,
    pub looser: f64,
    pub much_looser: f64,
}

impl MoodThresholds {
    pub const MUCH_STRICTER: f64 = -0.15;
    pub const STRICTER: f64 = -0.05;
    pub const LOOSER: f64 = 0.05;
    pub const MUCH_LOOSER: f64 = 0.15;

    pub fn default_v1() -> Self {
        Self {
            much_stricter: Self::MUCH_STRICTER,
            stricter: Self::STRICTER,
            looser: Self::LOOSER,
            much_looser: Self::MUCH_LOOSER,
        }
    }
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Upper bound of every visual score range.
pub const RANGE_CEILING: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryProfile {
    /// Lower bound of the per-event visual range.
    pub floor: f64,
    /// All-around score that counts as a goal meet.
    pub aa_goal: f64,
    pub aa_axis: (f64, f64),
}

impl CategoryProfile {
    pub fn boys_v1() -> Self {
        Self {
            floor: 7.0,
            aa_goal: 52.0,
            aa_axis: (47.0, 56.0),
        }
    }

    pub fn girls_v1() -> Self {
        Self {
            floor: 8.0,
            aa_goal: 38.0,
            aa_axis: (35.0, 40.0),
        }
    }
}

/// Fixed category lookup with a fallback profile. Keys are lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    entries: BTreeMap<String, CategoryProfile>,
    fallback: CategoryProfile,
}

impl CategoryTable {
    pub fn default_v1() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("boys".to_string(), CategoryProfile::boys_v1());
        Self {
            entries,
            fallback: CategoryProfile::girls_v1(),
        }
    }

    pub fn profile(&self, category: Option<&str>) -> CategoryProfile {
        category
            .map(|c| c.trim().to_ascii_lowercase())
            .and_then(|c| self.entries.get(&c).copied())
            .unwrap_or(self.fallback)
    }

    pub fn floor(&self, category: Option<&str>) -> f64 {
        self.profile(category).floor
    }

    /// Overrides the floor of one category, creating it from the fallback
    /// profile when it is not known yet. `default` targets the fallback.
    pub fn set_floor(&mut self, category: &str, floor: f64) {
        let key = category.trim().to_ascii_lowercase();
        if key == "default" {
            self.fallback.floor = floor;
            return;
        }
        let fallback = self.fallback;
        self.entries.entry(key).or_insert(fallback).floor = floor;
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
