use crate::model::context::Tier;
use crate::report::{ReportData, event_caption, format_rank, format_score};

pub fn render_report_text(data: &ReportData<'_>) -> String {
    let mut out = String::new();
    let headline = &data.history.headline;

    out.push_str(&format!("Meet Report: {}\n", data.athlete));
    out.push_str("==========================\n\n");

    out.push_str("1. Meet\n");
    out.push_str(&format!(
        "Meet: {} ({})\n",
        headline.meet,
        headline.date.format("%Y-%m-%d")
    ));
    out.push_str(&format!(
        "All-Around (AA): {}\n",
        format_score(headline.all_around)
    ));
    out.push_str(&format!(
        "Meet Rank: {} / {}\n\n",
        headline.rank, headline.rank_total
    ));

    out.push_str(&format!("2. Scores ({} season)\n", data.history.table.year));
    let division = headline.division.as_deref().unwrap_or("Div");
    out.push_str(&format!("Event\tScore\t{division} Rank\tSeason PB\n"));
    for line in &data.history.table.lines {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}{}\n",
            line.event,
            format_score(line.score),
            format_rank(line.rank),
            format_score(line.season_pb),
            if line.is_pb { " *" } else { "" }
        ));
    }
    out.push('\n');

    out.push_str("3. Judge analysis\n");
    if let Some(range) = data.events.first().and_then(|s| s.tiers.first()) {
        out.push_str(&format!(
            "Scale: {}-{}\n",
            format_score(range.floor),
            format_score(range.ceiling)
        ));
    }
    if data.events.is_empty() {
        out.push_str("No event context for this meet.\n");
    }
    for summary in data.events {
        out.push_str(&format!("{}: {}", summary.event, format_score(summary.score)));
        for tier in [Tier::Division, Tier::Level] {
            if let Some(range) = summary.tier(tier) {
                out.push_str(&format!(
                    " | {} {}-{} (median {})",
                    tier,
                    format_score(range.floor),
                    format_score(range.max),
                    format_score(range.median)
                ));
            }
        }
        out.push('\n');
        out.push_str(&format!("  {}\n", event_caption(summary)));
        if let Some(mood) = summary.judge.mood {
            out.push_str(&format!("  Panel mood: {mood}\n"));
        }
    }
    out.push('\n');

    let progress = &data.history.progress;
    out.push_str("4. Season progress\n");
    out.push_str(&format!("AA goal: {}\n", format_score(progress.goal)));
    for series in &progress.seasons {
        out.push_str(&format!("{} Season\n", series.year));
        for p in &series.points {
            let mut marks = Vec::new();
            if p.meets_goal {
                marks.push("goal");
            }
            if p.is_pb {
                marks.push("PB");
            }
            out.push_str(&format!("  {}\t{}", p.label(), format_score(p.all_around)));
            if !marks.is_empty() {
                out.push_str(&format!("\t[{}]", marks.join(", ")));
            }
            out.push('\n');
        }
    }

    out
}
