use super::*;

#[test]
fn test_concrete_profiles() {
    assert_eq!(classify_judge(-0.20, 0.30), ProfileLabel::FairButTough);
    assert_eq!(classify_judge(0.00, 0.60), ProfileLabel::AverageButErratic);
    assert_eq!(classify_judge(0.25, 0.10), ProfileLabel::GenerousButPrecise);
    assert_eq!(classify_judge(-0.30, 0.80), ProfileLabel::StrictAndUnpredictable);
    assert_eq!(classify_judge(0.30, 0.80), ProfileLabel::GenerousButErratic);
    assert_eq!(classify_judge(0.05, 0.20), ProfileLabel::TextbookJudging);
}

#[test]
fn test_strict_boundary_is_exclusive() {
    assert_eq!(classify_judge(-0.10, 0.10), ProfileLabel::TextbookJudging);
    assert_eq!(classify_judge(-0.1000001, 0.10), ProfileLabel::FairButTough);
}

#[test]
fn test_lenient_boundary_is_exclusive() {
    assert_eq!(classify_judge(0.10, 0.10), ProfileLabel::TextbookJudging);
    assert_eq!(classify_judge(0.1000001, 0.10), ProfileLabel::GenerousButPrecise);
}

#[test]
fn test_erratic_boundary_is_inclusive() {
    assert_eq!(classify_judge(0.20, 0.50), ProfileLabel::GenerousButErratic);
    assert_eq!(classify_judge(-0.20, 0.50), ProfileLabel::StrictAndUnpredictable);
    assert_eq!(classify_judge(0.0, 0.50), ProfileLabel::AverageButErratic);
    assert_eq!(classify_judge(0.0, 0.4999), ProfileLabel::TextbookJudging);
}

#[test]
fn test_mirror_symmetry() {
    for iqr in [0.0, 0.2, 0.49, 0.5, 1.5] {
        let strict = classify_judge(-0.20, iqr);
        let lenient = classify_judge(0.20, iqr);
        assert_eq!(strict.strictness(), Strictness::Strict);
        assert_eq!(lenient.strictness(), Strictness::Lenient);
        assert_eq!(strict.is_consistent(), lenient.is_consistent());
    }
}

#[test]
fn test_nan_falls_through() {
    assert_eq!(classify_judge(f64::NAN, 0.2), ProfileLabel::TextbookJudging);
    assert_eq!(classify_judge(f64::NAN, 0.8), ProfileLabel::AverageButErratic);
    assert_eq!(classify_judge(-0.5, f64::NAN), ProfileLabel::StrictAndUnpredictable);
}

#[test]
fn test_repeat_calls_agree() {
    let a = classify_judge(0.07, 0.51);
    let b = classify_judge(0.07, 0.51);
    assert_eq!(a, b);
}

#[test]
fn test_labels_and_pending() {
    assert_eq!(ProfileLabel::StrictAndUnpredictable.as_str(), "Strict & Unpredictable");
    assert_eq!(
        JudgeVerdict::Classified(ProfileLabel::FairButTough).to_string(),
        "Fair but Tough"
    );
    assert_eq!(JudgeVerdict::Pending.as_str(), "Pending");
    assert!(JudgeVerdict::Pending.is_pending());
}

#[test]
fn test_custom_thresholds() {
    let t = JudgeThresholds {
        strict_jsi: -0.05,
        lenient_jsi: 0.05,
        erratic_iqr: 1.0,
    };
    assert_eq!(classify_judge_with(-0.07, 0.9, &t), ProfileLabel::FairButTough);
    assert_eq!(classify_judge(-0.07, 0.9), ProfileLabel::AverageButErratic);
}
