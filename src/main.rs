use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use gym_judgeqc::input::{InputError, InputPaths, load_data_context, require_file};
use gym_judgeqc::logging;
use gym_judgeqc::model::moods::classify_mood_with;
use gym_judgeqc::model::profiles::classify_judge_with;
use gym_judgeqc::model::thresholds::CategoryTable;
use gym_judgeqc::pipeline::stage1_select::run_stage1;
use gym_judgeqc::pipeline::stage2_judges::JudgeRules;
use gym_judgeqc::pipeline::stage3_context::run_stage3;
use gym_judgeqc::pipeline::stage4_history::run_stage4;
use gym_judgeqc::pipeline::stage5_report::write_reports;
use gym_judgeqc::report::{ReportData, ToolMeta};

#[derive(Debug, Parser)]
#[command(
    name = "gym-judgeqc",
    version,
    about = "Judge-bias profiles and relative standing from gymnastics meet tables"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the meet report for one athlete
    Report(ReportArgs),
    /// Classify a single JSI/IQR pair
    Classify(ClassifyArgs),
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Long-format score table (Gymnast,Meet,Date,Event,Score,...)
    #[arg(long)]
    scores: PathBuf,
    /// Per-event session context table
    #[arg(long)]
    context: PathBuf,
    /// Judge analytics table (Meet,Level,Event,JSI_Standard,IQR)
    #[arg(long)]
    judges: PathBuf,
    #[arg(long)]
    athlete: String,
    /// Meet to report; defaults to the most recent one
    #[arg(long)]
    meet: Option<String>,
    /// Athlete category used for the range floor and AA goal
    #[arg(long)]
    category: Option<String>,
    /// Floor override, CATEGORY=VALUE (use `default` for the fallback)
    #[arg(long = "floor", value_parser = parse_floor)]
    floors: Vec<(String, f64)>,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    #[arg(long, allow_hyphen_values = true)]
    jsi: f64,
    #[arg(long, allow_hyphen_values = true)]
    iqr: f64,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to write reports to {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn parse_floor(raw: &str) -> Result<(String, f64), String> {
    let (category, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=VALUE, got {raw}"))?;
    let category = category.trim();
    if category.is_empty() {
        return Err("empty category in --floor".to_string());
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid floor value {value}: {e}"))?;
    if !value.is_finite() {
        return Err(format!("floor must be finite, got {value}"));
    }
    Ok((category.to_string(), value))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let result = match cli.cmd {
        Command::Report(args) => run_report(&args),
        Command::Classify(args) => {
            print!("{}", run_classify(&args));
            Ok(())
        }
    };
    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run_classify(args: &ClassifyArgs) -> String {
    let rules = JudgeRules::default_v1();
    let profile = classify_judge_with(args.jsi, args.iqr, &rules.profile);
    let mood = classify_mood_with(args.jsi, &rules.mood);
    format!("profile: {profile}\nmood: {mood}\n")
}

fn category_table(floors: &[(String, f64)]) -> CategoryTable {
    let mut table = CategoryTable::default_v1();
    for (category, floor) in floors {
        table.set_floor(category, *floor);
    }
    table
}

fn run_report(args: &ReportArgs) -> Result<(), RunError> {
    let paths = InputPaths {
        scores: args.scores.clone(),
        context: args.context.clone(),
        judges: args.judges.clone(),
    };
    for path in [&paths.scores, &paths.context, &paths.judges] {
        require_file(path)?;
    }
    let data = load_data_context(&paths)?;

    let categories = category_table(&args.floors);
    let profile = categories.profile(args.category.as_deref());
    let rules = JudgeRules::default_v1();

    let selection = run_stage1(&data, &args.athlete, args.meet.as_deref())?;
    let events = run_stage3(&selection.context_rows, &data.judges, profile.floor, &rules);
    let history = run_stage4(&selection.records, &selection.meet, &profile);

    let report = ReportData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        athlete: &selection.athlete,
        category: args.category.as_deref(),
        floor: profile.floor,
        judge_thresholds: rules.profile,
        mood_thresholds: rules.mood,
        history: &history,
        events: &events,
    };
    write_reports(&report, &args.out).map_err(|source| RunError::Report {
        path: args.out.clone(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
