use super::*;
use crate::config::{RoundingMode, TopTiePolicy};
use crate::model::{Anchor, Segment};

const DEMO_SAC: [Score; 25] = [
    95, 92, 85, 83, 78, 75, 68, 66, 65, 61, 60, 59, 58, 55, 52, 51, 50, 45, 41, 39, 36, 34, 32,
    31, 25,
];
const DEMO_EXAM: [Score; 25] = [
    96, 95, 91, 87, 83, 82, 77, 75, 74, 70, 68, 67, 66, 65, 63, 61, 60, 58, 57, 56, 54, 53, 52,
    51, 51,
];

#[test]
fn test_demo_cohort() {
    let out = moderate(&DEMO_SAC, &DEMO_EXAM).unwrap();
    assert_eq!(
        out,
        vec![
            96, 94, 89, 88, 84, 82, 77, 75, 74, 69, 68, 67, 66, 64, 63, 62, 62, 59, 57, 54, 50, 47,
            44, 43, 35
        ]
    );
}

#[test]
fn test_demo_anchors() {
    let (sac, exam, tie) =
        compute_anchors(&DEMO_SAC, &DEMO_EXAM, &ModerationConfig::default()).unwrap();
    assert_eq!(sac.values(), [0.0, 41.0, 58.0, 68.0, 95.0]);
    assert_eq!(exam.values(), [0.0, 57.0, 66.0, 77.0, 96.0]);
    assert_eq!(tie.occurrence, 1);
}

#[test]
fn test_two_student_cohort_hits_anchor_fixed_points() {
    let cohort = Cohort::from_scores(&[100, 0], &[80, 20]).unwrap();
    let m = moderate_cohort(&cohort, &ModerationConfig::default()).unwrap();
    assert_eq!(m.sac_anchors.values(), [0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(m.exam_anchors.values(), [0.0, 35.0, 50.0, 65.0, 80.0]);
    assert_eq!(m.moderated_scores(), vec![80, 0]);
    assert_eq!(
        m.placements,
        vec![
            Placement::Anchor(Anchor::Top),
            Placement::Anchor(Anchor::Zero)
        ]
    );
}

#[test]
fn test_tied_top_collapsing_onto_median() {
    // q3 and median collapse onto the tied maximum; the median match wins.
    let m = moderate_cohort(
        &Cohort::from_scores(&[90, 90, 90, 80, 70], &[60, 55, 40, 50, 45]).unwrap(),
        &ModerationConfig::default(),
    )
    .unwrap();
    assert!((m.tie.exam_top - 55.0).abs() < 1e-9);
    assert_eq!(m.moderated_scores(), vec![50, 50, 50, 45, 39]);
    assert_eq!(m.placements[0], Placement::Anchor(Anchor::Median));
    assert_eq!(m.placements[4], Placement::Segment(Segment::ZeroQ1));
}

#[test]
fn test_all_equal_scores() {
    let out = moderate(&[50, 50, 50], &[70, 60, 80]).unwrap();
    assert_eq!(out, vec![65, 65, 65]);
}

#[test]
fn test_reversed_exam_order_is_irrelevant() {
    let out = moderate(&[10, 20, 30, 40], &[40, 30, 20, 10]).unwrap();
    assert_eq!(out, vec![10, 20, 30, 40]);
}

#[test]
fn test_anchor_values_are_rounded_with_config() {
    // sac sorted [0, 5, 5, 6, 7, 8, 9]: q1 = 5 is held by two students.
    // exam sorted [0, 4, 5, 6, 7, 8, 9]: q1 = 4 + 0.5 * 1 = 4.5
    let cohort = Cohort::from_scores(&[9, 5, 0, 6, 5, 7, 8], &[9, 4, 0, 6, 5, 7, 8]).unwrap();
    let even = moderate_cohort(&cohort, &ModerationConfig::default()).unwrap();
    assert_eq!(even.sac_anchors.q1, 5.0);
    assert_eq!(even.exam_anchors.q1, 4.5);
    assert_eq!(even.placements[1], Placement::Anchor(Anchor::Q1));
    assert_eq!(even.moderated_scores(), vec![9, 4, 0, 6, 4, 7, 8]);

    let up = moderate_cohort(
        &cohort,
        &ModerationConfig::new(RoundingMode::HalfUp, TopTiePolicy::TopExamOverall),
    )
    .unwrap();
    assert_eq!(up.moderated_scores(), vec![9, 5, 0, 6, 5, 7, 8]);
}

#[test]
fn test_tied_students_policy_changes_top_anchor() {
    let cohort = Cohort::from_scores(&[95, 95, 60, 50, 40], &[60, 70, 90, 80, 30]).unwrap();
    let overall = moderate_cohort(&cohort, &ModerationConfig::default()).unwrap();
    let tied = moderate_cohort(
        &cohort,
        &ModerationConfig::new(RoundingMode::HalfEven, TopTiePolicy::TiedStudents),
    )
    .unwrap();
    assert_eq!(overall.tie.exam_top, 85.0);
    assert_eq!(overall.exam_anchors.top, 85.0);
    // exam q3 is 80, so the tied students' mean of 65 is raised to it
    assert_eq!(tied.tie.exam_top, 65.0);
    assert_eq!(tied.exam_anchors.top, 80.0);
}

#[test]
fn test_tied_students_top_below_q3_keeps_rank() {
    let cohort = Cohort::from_scores(&[95, 90, 80, 70, 60], &[10, 90, 80, 70, 60]).unwrap();
    let m = moderate_cohort(
        &cohort,
        &ModerationConfig::new(RoundingMode::HalfEven, TopTiePolicy::TiedStudents),
    )
    .unwrap();
    assert_eq!(m.tie.exam_top, 10.0);
    assert_eq!(m.exam_anchors.top, m.exam_anchors.q3);
    assert_eq!(m.moderated_scores(), vec![80, 80, 70, 60, 51]);
}

#[test]
fn test_moderate_rejects_invalid_input() {
    assert!(matches!(
        moderate(&[1, 2, 3], &[1, 2]),
        Err(ModerationError::InvalidInput(_))
    ));
    assert!(matches!(
        moderate(&[5], &[5]),
        Err(ModerationError::InvalidInput(_))
    ));
}

#[test]
fn test_unclassified_score_is_an_error() {
    let sac = AnchorSet {
        zero: 0.0,
        q1: 10.0,
        median: 20.0,
        q3: 30.0,
        top: 40.0,
    };
    let err = moderate_score(3, 41, &sac, &sac).unwrap_err();
    assert_eq!(err, ModerationError::UnclassifiedScore { index: 3, score: 41 });
}

#[test]
fn test_moderation_does_not_touch_input_order() {
    let cohort = Cohort::from_scores(&[30, 10, 20], &[60, 40, 50]).unwrap();
    let m = moderate_cohort(&cohort, &ModerationConfig::default()).unwrap();
    assert_eq!(m.cohort.sac_scores(), vec![30, 10, 20]);
    assert_eq!(m.cohort.exam_scores(), vec![60, 40, 50]);
    assert_eq!(m.moderated_scores().len(), 3);
}

#[test]
fn test_batch_keeps_order_and_isolates_failures() {
    let good = Cohort::from_scores(&DEMO_SAC, &DEMO_EXAM).unwrap();
    let small = Cohort::from_scores(&[100, 0], &[80, 20]).unwrap();
    let results = moderate_batch(
        &[good.clone(), small, good],
        &ModerationConfig::default(),
    );
    assert_eq!(results.len(), 3);
    assert_eq!(results[1].as_ref().unwrap().moderated_scores(), vec![80, 0]);
    assert_eq!(
        results[0].as_ref().unwrap().moderated_scores(),
        results[2].as_ref().unwrap().moderated_scores()
    );
}
