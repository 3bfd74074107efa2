use std::io::Read;

use crate::{
    foundation::core::Fps,
    foundation::error::{MotionError, MotionResult},
    style::palette::Palette,
};

/// Everything the engine needs besides the timeline; fixed for a whole render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub fps: Fps,
    /// Total frames in the render; frames `>= frame_count` are out of bounds.
    pub frame_count: u64,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub crossfade: CrossfadeConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub ken_burns: KenBurnsConfig,
    #[serde(default)]
    pub palette: Palette,
}

/// Lyric text envelopes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Upper bound of the fade-in/fade-out window, in frames.
    pub fade_max_frames: f64,
    /// Fade window as a fraction of the entry length, when shorter than `fade_max_frames`.
    pub fade_fraction: f64,
    /// Glow radius at the top of the envelope.
    pub glow_max: f64,
    /// How long a section label stays up after a section change, in frames.
    pub label_frames: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            fade_max_frames: 12.0,
            fade_fraction: 0.2,
            glow_max: 20.0,
            label_frames: 25.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CrossfadeConfig {
    /// Blend length after an asset change, in frames.
    pub window_frames: f64,
    /// Asset shown while no entry is active.
    pub idle_asset_index: u32,
}

impl Default for CrossfadeConfig {
    fn default() -> Self {
        Self {
            window_frames: 20.0,
            idle_asset_index: 0,
        }
    }
}

/// Slow zoom-in of the whole frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Frames over which the base scale ramps; `None` ramps over the whole render.
    pub drift_frames: Option<u64>,
    /// Base scale reached at the end of the drift.
    pub drift_scale: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            drift_frames: None,
            drift_scale: 1.03,
        }
    }
}

/// Periodic pan/zoom of the image layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KenBurnsConfig {
    pub zoom_period_secs: f64,
    pub zoom_to: f64,
    pub pan_x_period_secs: f64,
    /// Horizontal pan amplitude, percent of the layer width.
    pub pan_x_percent: f64,
    pub pan_y_period_secs: f64,
    /// Vertical pan amplitude, percent of the layer height.
    pub pan_y_percent: f64,
}

impl Default for KenBurnsConfig {
    fn default() -> Self {
        Self {
            zoom_period_secs: 8.0,
            zoom_to: 1.15,
            pan_x_period_secs: 12.0,
            pan_x_percent: 2.0,
            pan_y_period_secs: 10.0,
            pan_y_percent: 1.0,
        }
    }
}

impl RenderConfig {
    /// Default tunables for the given clock.
    pub fn new(fps: Fps, frame_count: u64) -> Self {
        Self {
            fps,
            frame_count,
            motion: MotionConfig::default(),
            crossfade: CrossfadeConfig::default(),
            camera: CameraConfig::default(),
            ken_burns: KenBurnsConfig::default(),
            palette: Palette::default(),
        }
    }

    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        serde_json::from_str(s).map_err(|e| MotionError::serde(format!("parse config JSON: {e}")))
    }

    pub fn from_reader(reader: impl Read) -> MotionResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| MotionError::serde(format!("parse config JSON: {e}")))
    }

    /// Frames over which the camera base scale ramps.
    pub fn drift_frames(&self) -> u64 {
        self.camera.drift_frames.unwrap_or(self.frame_count)
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(MotionError::validation("fps must have num>0 and den>0"));
        }
        if self.frame_count == 0 {
            return Err(MotionError::validation("frame_count must be > 0"));
        }

        for (name, value) in [
            ("motion.fade_max_frames", self.motion.fade_max_frames),
            ("motion.fade_fraction", self.motion.fade_fraction),
            ("motion.glow_max", self.motion.glow_max),
            ("crossfade.window_frames", self.crossfade.window_frames),
            ("camera.drift_scale", self.camera.drift_scale),
            ("ken_burns.zoom_period_secs", self.ken_burns.zoom_period_secs),
            ("ken_burns.zoom_to", self.ken_burns.zoom_to),
            ("ken_burns.pan_x_period_secs", self.ken_burns.pan_x_period_secs),
            ("ken_burns.pan_y_period_secs", self.ken_burns.pan_y_period_secs),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MotionError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("ken_burns.pan_x_percent", self.ken_burns.pan_x_percent),
            ("ken_burns.pan_y_percent", self.ken_burns.pan_y_percent),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MotionError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        // Fade-in and fade-out windows must not meet in the middle of an entry.
        if self.motion.fade_fraction >= 0.5 {
            return Err(MotionError::validation(
                "motion.fade_fraction must be < 0.5",
            ));
        }
        // Label envelope is [0, 5, label_frames - 5, label_frames].
        if !self.motion.label_frames.is_finite() || self.motion.label_frames <= 10.0 {
            return Err(MotionError::validation(
                "motion.label_frames must be finite and > 10",
            ));
        }
        if self.drift_frames() == 0 {
            return Err(MotionError::validation("camera.drift_frames must be > 0"));
        }

        self.palette.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
