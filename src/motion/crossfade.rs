use crate::{
    animation::interp::{InterpOpts, interpolate},
    config::CrossfadeConfig,
    foundation::error::MotionResult,
    timeline::model::TimelineEntry,
};

/// Blend weights of the outgoing and incoming image; always sum to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CrossfadeWeights {
    pub previous_weight: f64,
    pub current_weight: f64,
}

impl CrossfadeWeights {
    /// Current asset only.
    pub const SETTLED: CrossfadeWeights = CrossfadeWeights {
        previous_weight: 0.0,
        current_weight: 1.0,
    };

    pub fn is_blending(&self) -> bool {
        self.current_weight < 1.0
    }
}

/// Detects asset changes between consecutive entries and produces blend weights.
///
/// Weights only; the pixel blend belongs to the compositor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossfadeController {
    window_frames: f64,
}

impl Default for CrossfadeController {
    fn default() -> Self {
        Self::new(&CrossfadeConfig::default())
    }
}

impl CrossfadeController {
    pub fn new(cfg: &CrossfadeConfig) -> Self {
        Self {
            window_frames: cfg.window_frames,
        }
    }

    pub fn window_frames(&self) -> f64 {
        self.window_frames
    }

    /// `local_frame` counts from the start of `current`.
    pub fn crossfade(
        &self,
        current: Option<&TimelineEntry>,
        previous: Option<&TimelineEntry>,
        local_frame: f64,
    ) -> MotionResult<CrossfadeWeights> {
        let (Some(current), Some(previous)) = (current, previous) else {
            return Ok(CrossfadeWeights::SETTLED);
        };
        if current.asset_index == previous.asset_index {
            return Ok(CrossfadeWeights::SETTLED);
        }

        let progress = interpolate(
            local_frame,
            &[0.0, self.window_frames],
            &[0.0, 1.0],
            InterpOpts::clamped(),
        )?;
        Ok(CrossfadeWeights {
            previous_weight: 1.0 - progress,
            current_weight: progress,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/crossfade.rs"]
mod tests;
