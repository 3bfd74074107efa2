use super::*;
use crate::timeline::model::{MoodTag, SectionTag};

fn entry(start: f64, end: f64, asset: u32) -> TimelineEntry {
    TimelineEntry::new(start, end, "x", SectionTag::Verse, MoodTag::new("calm"), asset)
}

#[test]
fn no_previous_or_no_current_is_settled() {
    let c = CrossfadeController::default();
    let cur = entry(0.0, 2.0, 3);
    assert_eq!(
        c.crossfade(Some(&cur), None, 0.0).unwrap(),
        CrossfadeWeights::SETTLED
    );
    assert_eq!(
        c.crossfade(None, Some(&cur), 5.0).unwrap(),
        CrossfadeWeights::SETTLED
    );
}

#[test]
fn equal_assets_never_blend() {
    let c = CrossfadeController::default();
    let prev = entry(0.0, 10.0, 4);
    let cur = entry(10.0, 13.0, 4);
    for f in 0..=25 {
        let w = c.crossfade(Some(&cur), Some(&prev), f64::from(f)).unwrap();
        assert_eq!(w, CrossfadeWeights::SETTLED);
        assert!(!w.is_blending());
    }
}

#[test]
fn asset_change_blends_over_window() {
    let c = CrossfadeController::default();
    let prev = entry(0.0, 10.0, 1);
    let cur = entry(10.0, 13.0, 2);

    let w0 = c.crossfade(Some(&cur), Some(&prev), 0.0).unwrap();
    assert_eq!(w0.current_weight, 0.0);
    assert_eq!(w0.previous_weight, 1.0);

    let mid = c.crossfade(Some(&cur), Some(&prev), 10.0).unwrap();
    assert_eq!(mid.current_weight, 0.5);
    assert!(mid.is_blending());

    let done = c.crossfade(Some(&cur), Some(&prev), 20.0).unwrap();
    assert_eq!(done, CrossfadeWeights::SETTLED);

    let late = c.crossfade(Some(&cur), Some(&prev), 60.0).unwrap();
    assert_eq!(late, CrossfadeWeights::SETTLED);
}

#[test]
fn weights_sum_to_one_and_previous_never_rises() {
    let c = CrossfadeController::default();
    let prev = entry(0.0, 10.0, 1);
    let cur = entry(10.0, 13.0, 7);
    let mut last_prev = f64::INFINITY;
    for i in 0..=240 {
        let f = f64::from(i) / 10.0;
        let w = c.crossfade(Some(&cur), Some(&prev), f).unwrap();
        assert_eq!(w.previous_weight + w.current_weight, 1.0, "at {f}");
        assert!(w.previous_weight <= last_prev);
        last_prev = w.previous_weight;
    }
}

#[test]
fn window_length_is_configurable() {
    let c = CrossfadeController::new(&CrossfadeConfig {
        window_frames: 8.0,
        idle_asset_index: 0,
    });
    let prev = entry(0.0, 1.0, 0);
    let cur = entry(1.0, 2.0, 1);
    assert_eq!(c.window_frames(), 8.0);
    assert_eq!(
        c.crossfade(Some(&cur), Some(&prev), 4.0).unwrap().current_weight,
        0.5
    );
}
