use super::*;

#[test]
fn test_default_floors() {
    let table = CategoryTable::default_v1();
    assert_eq!(table.floor(Some("boys")), 7.0);
    assert_eq!(table.floor(Some(" Boys ")), 7.0);
    assert_eq!(table.floor(Some("girls")), 8.0);
    assert_eq!(table.floor(None), 8.0);
    assert_eq!(table.profile(Some("boys")).aa_goal, 52.0);
    assert_eq!(table.profile(None).aa_goal, 38.0);
}

#[test]
fn test_floor_overrides() {
    let mut table = CategoryTable::default_v1();
    table.set_floor("default", 8.5);
    table.set_floor("xcel", 6.5);
    assert_eq!(table.floor(None), 8.5);
    assert_eq!(table.floor(Some("XCEL")), 6.5);
    assert_eq!(table.profile(Some("xcel")).aa_goal, 38.0);
    assert_eq!(table.floor(Some("boys")), 7.0);
}

#[test]
fn test_named_constants() {
    let j = JudgeThresholds::default();
    assert_eq!(j.strict_jsi, -0.10);
    assert_eq!(j.lenient_jsi, 0.10);
    assert_eq!(j.erratic_iqr, 0.50);
    let m = MoodThresholds::default();
    assert_eq!(
        [m.much_stricter, m.stricter, m.looser, m.much_looser],
        [-0.15, -0.05, 0.05, 0.15]
    );
}
