use crate::{
    animation::interp::{InterpOpts, interpolate},
    config::MotionConfig,
    foundation::core::FrameIndex,
    foundation::error::MotionResult,
    timeline::model::TimelineEntry,
};

const LABEL_RAMP_FRAMES: f64 = 5.0;
const IDLE_RATE: f64 = 0.08;
const IDLE_OPACITY: f64 = 0.2;

/// Opacity of the transient section label, or `None` when no label is shown.
///
/// A label appears when `current` starts a new authored section (`verse1 -> verse2` counts) and
/// stays up for the first `label_frames` local frames.
pub fn section_label_opacity(
    current: &TimelineEntry,
    previous: Option<&TimelineEntry>,
    local_frame: f64,
    cfg: &MotionConfig,
) -> MotionResult<Option<f64>> {
    let Some(previous) = previous else {
        return Ok(None);
    };
    if previous.section_name == current.section_name {
        return Ok(None);
    }
    let len = cfg.label_frames;
    if !(0.0..len).contains(&local_frame) {
        return Ok(None);
    }

    let opacity = interpolate(
        local_frame,
        &[0.0, LABEL_RAMP_FRAMES, len - LABEL_RAMP_FRAMES, len],
        &[0.0, 1.0, 1.0, 0.0],
        InterpOpts::clamped(),
    )?;
    Ok(Some(opacity))
}

/// Breathing "nothing is sung" marker shown in gaps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct IdleIndicator {
    pub scale: f64,
    pub opacity: f64,
}

pub fn idle_indicator(frame: FrameIndex) -> MotionResult<IdleIndicator> {
    let wave = (frame.0 as f64 * IDLE_RATE).sin();
    Ok(IdleIndicator {
        scale: interpolate(wave, &[-1.0, 1.0], &[0.95, 1.05], InterpOpts::clamped())?,
        opacity: IDLE_OPACITY,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/motion/overlay.rs"]
mod tests;
