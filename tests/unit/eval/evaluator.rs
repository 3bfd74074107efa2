use super::*;
use crate::{foundation::core::Fps, timeline::model::MoodTag};

fn entry(start: f64, end: f64, section: SectionTag, mood: &str, asset: u32) -> TimelineEntry {
    TimelineEntry::new(start, end, "line", section, MoodTag::new(mood), asset)
}

fn evaluator(entries: Vec<TimelineEntry>, frame_count: u64) -> FrameEvaluator {
    let timeline = Timeline::new(entries).unwrap();
    FrameEvaluator::new(timeline, RenderConfig::new(Fps::new(30, 1).unwrap(), frame_count)).unwrap()
}

fn opacity(p: &FrameParams) -> f64 {
    p.text.as_ref().map_or(0.0, |t| t.motion.opacity)
}

#[test]
fn chorus_entry_fades_in_and_ends_at_its_end_time() {
    let ev = evaluator(vec![entry(10.0, 13.0, SectionTag::Chorus, "happy", 2)], 600);

    let first = ev.eval_frame(FrameIndex(300)).unwrap();
    assert_eq!(first.section, SectionTag::Chorus);
    assert_eq!(opacity(&first), 0.0);

    let mut last = 0.0;
    for f in 301..312 {
        let o = opacity(&ev.eval_frame(FrameIndex(f)).unwrap());
        assert!(o > 0.0 && o < 1.0, "frame {f}: {o}");
        assert!(o > last, "frame {f}");
        last = o;
    }
    assert_eq!(opacity(&ev.eval_frame(FrameIndex(312)).unwrap()), 1.0);

    let after = ev.eval_frame(FrameIndex(390)).unwrap();
    assert!(after.is_gap());
    assert!(after.text.is_none());
    assert_eq!(after.section, SectionTag::None);
}

#[test]
fn asset_change_crossfades_over_twenty_frames() {
    let ev = evaluator(
        vec![
            entry(0.0, 10.0, SectionTag::Verse, "sad", 1),
            entry(10.0, 13.0, SectionTag::Verse, "sad", 2),
        ],
        600,
    );

    let at = |f: u64| ev.eval_frame(FrameIndex(f)).unwrap().image;
    let start = at(300);
    assert_eq!(start.current_asset, 2);
    assert_eq!(start.previous_asset, Some(1));
    assert_eq!(start.weights.current_weight, 0.0);

    let mid = at(310);
    assert_eq!(mid.weights.current_weight, 0.5);
    assert_eq!(mid.previous_asset, Some(1));

    let done = at(320);
    assert_eq!(done.weights.current_weight, 1.0);
    assert_eq!(done.previous_asset, None);
}

#[test]
fn gap_frames_show_idle_layer_and_idle_asset() {
    let ev = evaluator(
        vec![
            entry(1.0, 2.0, SectionTag::Intro, "calm", 5),
            entry(4.0, 6.0, SectionTag::Verse, "calm", 6),
        ],
        300,
    );

    for f in [0u64, 10, 29, 60, 90, 119, 180, 299] {
        let p = ev.eval_frame(FrameIndex(f)).unwrap();
        assert!(p.is_gap(), "frame {f}");
        assert!(p.text.is_none());
        assert!(p.label.is_none());
        assert!(p.idle.is_some());
        assert_eq!(p.image.current_asset, 0);
        assert_eq!(p.image.previous_asset, None);
        assert_eq!(p.image.weights, CrossfadeWeights::SETTLED);
    }

    let active = ev.eval_frame(FrameIndex(45)).unwrap();
    assert!(active.idle.is_none());
    assert_eq!(active.entry_index, Some(0));
}

#[test]
fn section_change_shows_label_in_mood_color() {
    let ev = evaluator(
        vec![
            entry(0.0, 2.0, SectionTag::Verse, "sad", 0),
            entry(2.0, 5.0, SectionTag::Chorus, "angry", 0),
            entry(5.0, 7.0, SectionTag::Chorus, "angry", 0),
        ],
        300,
    );
    let angry = ev.config().palette.lookup(&MoodTag::new("angry")).primary;

    let first = ev.eval_frame(FrameIndex(10)).unwrap();
    assert!(first.label.is_none());

    let label = ev.eval_frame(FrameIndex(70)).unwrap().label.unwrap();
    assert_eq!(label.text, "CHORUS");
    assert_eq!(label.opacity, 1.0);
    assert_eq!(label.color, angry);

    assert!(ev.eval_frame(FrameIndex(85)).unwrap().label.is_none());
    // Same section continues: no label.
    assert!(ev.eval_frame(FrameIndex(160)).unwrap().label.is_none());
}

#[test]
fn text_layer_carries_style_and_colors() {
    let ev = evaluator(
        vec![
            entry(0.0, 2.0, SectionTag::Verse, "hopeful", 0),
            entry(2.0, 4.0, SectionTag::Chorus, "hopeful", 0),
        ],
        200,
    );
    let colors = *ev.config().palette.lookup(&MoodTag::new("hopeful"));

    let verse = ev.eval_frame(FrameIndex(30)).unwrap().text.unwrap();
    assert_eq!(verse.color, Rgba::WHITE);
    assert_eq!(verse.glow_color, colors.glow);
    assert_eq!(verse.bg, colors.bg);
    assert_eq!(verse.style, TextStyle::for_section(SectionTag::Verse));
    assert_eq!(verse.progress, 0.5);
    assert_eq!(verse.rule_opacity, 0.5 * verse.motion.opacity);

    let chorus = ev.eval_frame(FrameIndex(90)).unwrap().text.unwrap();
    assert_eq!(chorus.color, colors.primary);
    assert!(chorus.style.uppercase);
}

#[test]
fn unknown_mood_uses_default_palette() {
    let ev = evaluator(vec![entry(0.0, 2.0, SectionTag::Verse, "bored", 0)], 60);
    let text = ev.eval_frame(FrameIndex(30)).unwrap().text.unwrap();
    let funny = ev.config().palette.lookup(&MoodTag::new("funny"));
    assert_eq!(text.glow_color, funny.glow);
}

#[test]
fn out_of_bounds_frame_is_an_error() {
    let ev = evaluator(vec![entry(0.0, 1.0, SectionTag::Intro, "calm", 0)], 30);
    assert!(ev.eval_frame(FrameIndex(29)).is_ok());
    let err = ev.eval_frame(FrameIndex(30)).unwrap_err();
    assert!(matches!(err, MotionError::Evaluation(_)));
}

#[test]
fn invalid_config_is_rejected() {
    let timeline = Timeline::new(vec![entry(0.0, 1.0, SectionTag::Intro, "calm", 0)]).unwrap();
    let cfg = RenderConfig::new(Fps::default(), 0);
    assert!(matches!(
        FrameEvaluator::new(timeline, cfg),
        Err(MotionError::Validation(_))
    ));
}

#[test]
fn repeated_and_parallel_evaluation_agree() {
    let ev = evaluator(
        vec![
            entry(0.5, 3.0, SectionTag::Intro, "dreamy", 0),
            entry(3.0, 6.0, SectionTag::Chorus, "energetic", 1),
            entry(7.0, 9.0, SectionTag::Bridge, "panic", 2),
        ],
        300,
    );
    let range = ev.full_range();
    let seq = ev.eval_range(range).unwrap();
    assert_eq!(seq.len(), 300);
    assert_eq!(seq, ev.eval_range(range).unwrap());
    assert_eq!(seq, ev.eval_range_parallel(range, Some(3)).unwrap());
    assert_eq!(seq, ev.eval_range_parallel(range, None).unwrap());

    let err = ev.eval_range_parallel(range, Some(0)).unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));
}

#[test]
fn range_past_the_end_fails() {
    let ev = evaluator(vec![entry(0.0, 1.0, SectionTag::Outro, "sad", 0)], 30);
    let range = FrameRange::new(FrameIndex(20), FrameIndex(40)).unwrap();
    assert!(ev.eval_range(range).is_err());
    assert!(ev.eval_range_parallel(range, Some(2)).is_err());
}

#[test]
fn gap_section_is_not_a_timeline_entry() {
    let err = Timeline::new(vec![entry(0.0, 2.0, SectionTag::None, "calm", 0)]).unwrap_err();
    assert!(matches!(err, MotionError::MalformedTimeline(_)));
    assert!(err.to_string().contains("'none'"), "{err}");
}

#[test]
fn text_layer_json_names_the_glow_radius() {
    let ev = evaluator(vec![entry(0.0, 2.0, SectionTag::Verse, "calm", 0)], 60);
    let v = serde_json::to_value(ev.eval_frame(FrameIndex(30)).unwrap()).unwrap();
    assert_eq!(v["text"]["glow_radius"], 20.0);
    assert!(v["text"].get("glow").is_none());
}
