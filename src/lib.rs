//! Judge-bias profiles and relative standing for gymnastics meet results.
//!
//! The classifiers in [`model`] are pure functions; [`pipeline`] selects an
//! athlete's meet from a loaded [`model::records::DataContext`] and builds the
//! summaries that [`report`] writes out.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::context::{ContextSummary, JudgeContext, Standing, Tier, TierRange};
pub use model::moods::{MoodLabel, classify_mood};
pub use model::profiles::{JudgeVerdict, ProfileLabel, classify_judge};
pub use pipeline::stage3_context::compute_context;
