use crate::{
    animation::interp::{InterpOpts, interpolate},
    config::KenBurnsConfig,
    foundation::core::{Fps, FrameIndex},
    foundation::error::MotionResult,
};

/// Slow pan/zoom of the image layer; independent of the timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct KenBurnsParams {
    pub scale: f64,
    /// Percent of the layer width.
    pub offset_x: f64,
    /// Percent of the layer height.
    pub offset_y: f64,
}

pub fn ken_burns(
    frame: FrameIndex,
    fps: Fps,
    cfg: &KenBurnsConfig,
) -> MotionResult<KenBurnsParams> {
    Ok(KenBurnsParams {
        scale: sawtooth(frame, fps, cfg.zoom_period_secs, 1.0, cfg.zoom_to)?,
        offset_x: sawtooth(
            frame,
            fps,
            cfg.pan_x_period_secs,
            -cfg.pan_x_percent,
            cfg.pan_x_percent,
        )?,
        offset_y: sawtooth(
            frame,
            fps,
            cfg.pan_y_period_secs,
            -cfg.pan_y_percent,
            cfg.pan_y_percent,
        )?,
    })
}

// Linear `from -> to` over one period, restarting every period.
fn sawtooth(frame: FrameIndex, fps: Fps, period_secs: f64, from: f64, to: f64) -> MotionResult<f64> {
    let period = fps.secs_to_frames(period_secs);
    let phase = (frame.0 as f64).rem_euclid(period);
    interpolate(phase, &[0.0, period], &[from, to], InterpOpts::clamped())
}

#[cfg(test)]
#[path = "../../tests/unit/motion/ken_burns.rs"]
mod tests;
