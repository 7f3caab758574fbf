use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::context::{context_rows_from_table, normalize_level};
use super::judges::judge_table_from_table;
use super::reader::CsvTable;
use super::scores::{parse_date, score_records_from_table};
use super::*;
use crate::model::records::JudgeKey;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("gym_judgeqc_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn table(contents: &str) -> CsvTable {
    CsvTable::from_reader("test.csv", Cursor::new(contents.as_bytes().to_vec())).unwrap()
}

#[test]
fn test_quoted_fields() {
    let t = table("a,b,c,d,e\na ,\"b,c\",\"say \"\"hi\"\"\",,d\n");
    assert_eq!(t.rows.len(), 1);
    let row = &t.rows[0];
    assert_eq!(row.text(0), Some("a"));
    assert_eq!(row.text(1), Some("b,c"));
    assert_eq!(row.text(2), Some(r#"say "hi""#));
    assert_eq!(row.text(3), None);
    assert_eq!(row.text(4), Some("d"));
}

#[test]
fn test_quoted_newline_stays_in_one_record() {
    let t = table(
        "Gymnast,Meet,Date,Event,Score,Division\n\
         Anna,Winter Cup,2024-01-20,VT,9.125,\"Junior\nA\"\n\
         Anna,Winter Cup,2024-01-20,BB,8.9,Junior A\n",
    );
    assert_eq!(t.rows.len(), 2);
    assert_eq!(t.rows[0].line_no, 2);
    assert_eq!(t.rows[1].line_no, 4);
    let rows = score_records_from_table(&t).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].division.as_deref(), Some("Junior\nA"));
    assert_eq!(rows[1].event, "BB");
}

#[test]
fn test_columns_are_case_insensitive() {
    let t = table("Gymnast,MEET\nAnna,Spring Classic\n");
    assert_eq!(t.column("gymnast"), Some(0));
    assert_eq!(t.column("Meet"), Some(1));
    assert!(t.column("Score").is_none());
    assert!(matches!(
        t.require("Score"),
        Err(InputError::MissingColumn { .. })
    ));
}

#[test]
fn test_empty_file_is_error() {
    let err = CsvTable::from_reader("empty.csv", Cursor::new(Vec::new())).unwrap_err();
    assert!(matches!(err, InputError::Empty(_)));
}

#[test]
fn test_parse_date_formats() {
    let expected = chrono::NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    assert_eq!(parse_date("2024-02-10"), Some(expected));
    assert_eq!(parse_date("2024-02-10 00:00:00"), Some(expected));
    assert_eq!(parse_date("02/10/2024"), Some(expected));
    assert_eq!(parse_date("not a date"), None);
}

#[test]
fn test_score_rows_skip_invalid() {
    let t = table(
        "Gymnast,Meet,Date,Event,Score,Rank,Rank_Total,Division\n\
         Anna,Winter Cup,2024-01-20,VT,9.125,2.0,14,Junior A\n\
         Anna,Winter Cup,2024-01-20,BB,,3,14,Junior A\n\
         Anna,Winter Cup,someday,FX,9.0,1,14,Junior A\n\
         Anna,Winter Cup,2024-01-20,AA,36.5,,,\n",
    );
    let rows = score_records_from_table(&t).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rank, Some(2));
    assert_eq!(rows[0].rank_total, Some(14));
    assert_eq!(rows[0].division.as_deref(), Some("Junior A"));
    assert!(rows[1].is_all_around());
    assert_eq!(rows[1].rank, None);
    assert_eq!(rows[1].division, None);
}

#[test]
fn test_judge_rows_validate_and_dedupe() {
    let t = table(
        "Meet,Level,Event,JSI_Standard,IQR\n\
         Winter Cup,4.0,VT,-0.12,0.30\n\
         Winter Cup,4,VT,0.50,0.10\n\
         Winter Cup,4,BB,0.02,-0.1\n\
         Winter Cup,4,FX,nan,0.2\n",
    );
    let judges = judge_table_from_table(&t).unwrap();
    assert_eq!(judges.len(), 1);
    let stat = judges.get(&JudgeKey::new("Winter Cup", "4", "VT")).unwrap();
    assert_eq!(stat.jsi, -0.12);
    assert!(judges.get(&JudgeKey::new("Winter Cup", "4", "BB")).is_none());
}

#[test]
fn test_context_rows_with_and_without_division() {
    let t = table(
        "Gymnast,Meet,Level,Event,Score,Level_Max,Level_Median,Percentile,Count,Div_Max,Div_Median,Div_Percentile,Div_Count\n\
         Anna,Winter Cup,4.0,VT,9.1,9.5,8.9,20.0,40,9.3,9.0,,\n\
         Anna,Winter Cup,4,BB,8.7,9.4,8.8,55.0,40,,,,\n\
         Anna,Winter Cup,4,FX,8.7,9.4,8.8,120.0,40,9.0,8.9,,\n\
         Anna,Winter Cup,4,UB,8.7,9.4,8.8,10.0,0,9.0,8.9,,\n\
         Anna,Winter Cup,4,PB,8.7,9.4,8.8,10.0,40,9.0,8.9,140.0,12\n\
         Anna,Winter Cup,4,PH,8.7,9.4,8.8,10.0,40,9.0,8.9,30.0,0\n",
    );
    let rows = context_rows_from_table(&t).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].level, "4");
    let div = rows[0].division_stats.unwrap();
    assert_eq!(div.max, 9.3);
    assert_eq!(div.median, 9.0);
    assert_eq!(div.percentile, 20.0);
    assert_eq!(div.count, 40);
    assert!(rows[1].division_stats.is_none());
    // out-of-range division statistics drop only the division tier
    assert_eq!(rows[2].event, "PB");
    assert!(rows[2].division_stats.is_none());
    assert_eq!(rows[2].level_stats.percentile, 10.0);
    assert_eq!(rows[3].event, "PH");
    assert!(rows[3].division_stats.is_none());
}

#[test]
fn test_division_needs_its_own_median() {
    let t = table(
        "Gymnast,Meet,Level,Event,Score,Level_Max,Level_Median,Percentile,Count,Div_Max\n\
         Anna,Winter Cup,4,VT,9.1,9.5,8.9,20.0,40,9.3\n",
    );
    let rows = context_rows_from_table(&t).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].division_stats.is_none());
}

#[test]
fn test_context_requires_level_columns() {
    let t = table("Gymnast,Meet,Level,Event,Score\nAnna,Winter Cup,4,VT,9.1\n");
    assert!(matches!(
        context_rows_from_table(&t),
        Err(InputError::MissingColumn { column, .. }) if column == "Level_Max"
    ));
}

#[test]
fn test_normalize_level() {
    assert_eq!(normalize_level("4.0"), "4");
    assert_eq!(normalize_level("10"), "10");
    assert_eq!(normalize_level("Gold"), "Gold");
    assert_eq!(normalize_level(".0"), ".0");
}

#[test]
fn test_load_data_context_from_files() {
    let dir = make_temp_dir();
    let scores = dir.join("scores.csv.gz");
    let context = dir.join("context.csv");
    let judges = dir.join("judges.csv");
    write_gz(
        &scores,
        "Gymnast,Meet,Date,Event,Score\nAnna,Winter Cup,2024-01-20,VT,9.1\n",
    );
    write_file(
        &context,
        "Gymnast,Meet,Level,Event,Score,Level_Max,Level_Median,Percentile,Count\n\
         Anna,Winter Cup,4,VT,9.1,9.5,8.9,20,40\n",
    );
    write_file(&judges, "Meet,Level,Event,JSI_Standard,IQR\nWinter Cup,4,VT,0.2,0.3\n");

    let paths = InputPaths {
        scores,
        context,
        judges,
    };
    let ctx = load_data_context(&paths).unwrap();
    assert_eq!(ctx.scores.len(), 1);
    assert_eq!(ctx.contexts.len(), 1);
    assert_eq!(ctx.judges.len(), 1);
}

#[test]
fn test_require_file() {
    let dir = make_temp_dir();
    let missing = dir.join("nope.csv");
    assert!(matches!(
        require_file(&missing),
        Err(InputError::InvalidInput(_))
    ));
    let present = dir.join("present.csv");
    write_file(&present, "a\n");
    assert!(require_file(&present).is_ok());
}
