pub mod context;
pub mod moods;
pub mod profiles;
pub mod records;
pub mod thresholds;
