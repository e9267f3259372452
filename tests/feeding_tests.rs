mod common;
use babylog::core::feeding::{FeedingTracker, clamp_amount, clamp_minutes};
use babylog::core::timer::TimerStatus;
use babylog::errors::AppError;
use babylog::models::Channel;
use common::ts;
use std::time::{Duration, Instant};

#[test]
fn test_commit_adds_manual_minutes_to_timed_seconds() {
    let t0 = Instant::now();
    let mut tracker = FeedingTracker::default();

    tracker.timer_mut().start(Channel::Left, t0);
    tracker.form_mut().set_manual_minutes(Some(2), Some(0));

    let entry = tracker
        .commit(t0 + Duration::from_secs(30), ts(9, 30))
        .expect("commit");

    assert_eq!(entry.left_time_seconds, 150);
    assert_eq!(entry.right_time_seconds, 0);
    assert_eq!(entry.timestamp, ts(9, 30));
}

#[test]
fn test_commit_resets_timer_and_form() {
    let t0 = Instant::now();
    let mut tracker = FeedingTracker::default();

    tracker.timer_mut().start(Channel::Right, t0);
    tracker.form_mut().set_formula(2.5);
    tracker.form_mut().set_pumped_milk(1.0);
    tracker.form_mut().set_notes("  fussy at the end  ");
    tracker.commit(t0 + Duration::from_secs(90), ts(10, 0)).expect("commit");

    assert_eq!(tracker.timer().status(), TimerStatus::Idle);
    assert_eq!(tracker.timer().state().total_seconds(), 0);
    assert_eq!(tracker.form().formula_oz(), 0.0);
    assert_eq!(tracker.form().pumped_milk_oz(), 0.0);
    assert_eq!(tracker.form().notes(), "");
    assert_eq!(tracker.form().manual_left_minutes(), 0);

    let logged = &tracker.log().entries()[0];
    assert_eq!(logged.right_time_seconds, 90);
    assert_eq!(logged.formula_oz, 2.5);
    assert_eq!(logged.pumped_milk_oz, 1.0);
    assert_eq!(logged.notes, "fussy at the end");
}

#[test]
fn test_negative_input_is_clamped_to_zero() {
    assert_eq!(clamp_minutes(-5), 0);
    assert_eq!(clamp_minutes(7), 7);
    assert_eq!(clamp_amount(-1.5), 0.0);
    assert_eq!(clamp_amount(f64::NAN), 0.0);
    assert_eq!(clamp_amount(f64::INFINITY), 0.0);
    assert_eq!(clamp_amount(3.25), 3.25);

    let mut tracker = FeedingTracker::default();
    tracker.form_mut().set_manual_minutes(Some(-3), Some(4));
    tracker.form_mut().set_formula(-2.0);
    assert_eq!(tracker.form().manual_left_minutes(), 0);
    assert_eq!(tracker.form().manual_right_minutes(), 4);
    assert_eq!(tracker.form().formula_oz(), 0.0);

    // only one side is updated when the other is omitted
    tracker.form_mut().set_manual_minutes(Some(1), None);
    assert_eq!(tracker.form().manual_right_minutes(), 4);
}

#[test]
fn test_empty_feeding_is_rejected_without_state_change() {
    let mut tracker = FeedingTracker::default();
    tracker.form_mut().set_notes("nothing happened");

    let err = tracker.commit(Instant::now(), ts(11, 0)).unwrap_err();
    assert!(matches!(err, AppError::MissingRequiredField("feeding amount")));
    assert!(err.is_user_error());

    assert!(tracker.log().is_empty());
    assert_eq!(tracker.form().notes(), "nothing happened");
}

#[test]
fn test_bottle_only_feeding_is_accepted() {
    let mut tracker = FeedingTracker::default();
    tracker.form_mut().set_formula(4.0);

    let entry = tracker.commit(Instant::now(), ts(12, 0)).expect("commit");
    assert_eq!(entry.total_seconds(), 0);
    assert_eq!(entry.formula_oz, 4.0);
}

#[test]
fn test_log_keeps_commit_order() {
    let mut tracker = FeedingTracker::default();
    for (i, oz) in [1.0, 2.0, 3.0].into_iter().enumerate() {
        tracker.form_mut().set_formula(oz);
        tracker.commit(Instant::now(), ts(8 + i as u32, 0)).expect("commit");
    }

    let amounts: Vec<f64> = tracker.log().iter().map(|e| e.formula_oz).collect();
    assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
    assert_eq!(tracker.log().len(), 3);
    assert_eq!(tracker.log().last().map(|e| e.formula_oz), Some(3.0));
}

#[test]
fn test_huge_manual_minutes_are_rejected_without_state_change() {
    let t0 = Instant::now();
    let mut tracker = FeedingTracker::default();
    tracker.timer_mut().start(Channel::Left, t0);
    tracker.form_mut().set_manual_minutes(Some(i64::MAX), None);

    let err = tracker
        .commit(t0 + Duration::from_secs(5), ts(9, 0))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));
    assert!(err.is_user_error());

    assert!(tracker.log().is_empty());
    assert_eq!(tracker.form().manual_left_minutes(), i64::MAX as u64);
    assert_eq!(tracker.timer().seconds(Channel::Left), 5);
}
