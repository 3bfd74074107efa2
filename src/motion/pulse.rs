use crate::{
    animation::interp::{InterpOpts, interpolate},
    config::CameraConfig,
    foundation::core::{Affine, FrameIndex, Vec2},
    foundation::error::MotionResult,
    timeline::model::SectionTag,
};

/// Shape of the periodic beat pulse of one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PulseShape {
    /// Linear ramp `0 -> peak` over the first `rise` of the period, then `peak -> 0`.
    Triangle { period: u64, peak: f64, rise: f64 },
    /// `sin(phase * 2pi) * amplitude`.
    Sine { period: u64, amplitude: f64 },
    Flat,
}

impl PulseShape {
    pub fn for_section(section: SectionTag) -> Self {
        match section {
            SectionTag::Chorus => Self::Triangle {
                period: 8,
                peak: 0.015,
                rise: 0.2,
            },
            SectionTag::Bridge => Self::Triangle {
                period: 10,
                peak: 0.02,
                rise: 0.15,
            },
            SectionTag::Verse => Self::Triangle {
                period: 15,
                peak: 0.005,
                rise: 0.2,
            },
            SectionTag::Intro => Self::Sine {
                period: 20,
                amplitude: 0.003,
            },
            SectionTag::Outro | SectionTag::None => Self::Flat,
        }
    }

    pub fn sample(self, frame: FrameIndex) -> MotionResult<f64> {
        match self {
            Self::Triangle { period, peak, rise } => {
                let phase = (frame.0 % period) as f64 / period as f64;
                if phase < rise {
                    interpolate(phase, &[0.0, rise], &[0.0, peak], InterpOpts::clamped())
                } else {
                    interpolate(phase, &[rise, 1.0], &[peak, 0.0], InterpOpts::clamped())
                }
            }
            Self::Sine { period, amplitude } => {
                let phase = (frame.0 % period) as f64 / period as f64;
                Ok((phase * std::f64::consts::TAU).sin() * amplitude)
            }
            Self::Flat => Ok(0.0),
        }
    }
}

/// Deterministic camera shake: `(sin(frame * kx) * ax, cos(frame * ky) * ay)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeProfile {
    pub kx: f64,
    pub ax: f64,
    pub ky: f64,
    pub ay: f64,
}

impl ShakeProfile {
    pub fn for_section(section: SectionTag) -> Option<Self> {
        match section {
            SectionTag::Chorus => Some(Self {
                kx: 0.7,
                ax: 1.5,
                ky: 0.5,
                ay: 1.0,
            }),
            SectionTag::Bridge => Some(Self {
                kx: 0.9,
                ax: 2.0,
                ky: 0.6,
                ay: 1.5,
            }),
            SectionTag::Intro | SectionTag::Verse | SectionTag::Outro | SectionTag::None => None,
        }
    }

    pub fn sample(self, frame: FrameIndex) -> Vec2 {
        let f = frame.0 as f64;
        Vec2::new((f * self.kx).sin() * self.ax, (f * self.ky).cos() * self.ay)
    }
}

/// Outer camera transform for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CameraParams {
    /// Base drift scale plus beat pulse.
    pub scale: f64,
    pub shake_x: f64,
    pub shake_y: f64,
}

impl CameraParams {
    /// Scale about `center`, then shift by the shake offset in pre-scale space.
    pub fn to_affine(&self, center: Vec2) -> Affine {
        Affine::translate(center)
            * Affine::scale(self.scale)
            * Affine::translate(-center)
            * Affine::translate(Vec2::new(self.shake_x, self.shake_y))
    }
}

/// Beat pulse, shake and slow drift of the camera, keyed by section and global frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseGenerator {
    drift_frames: u64,
    drift_scale: f64,
}

impl PulseGenerator {
    /// `drift_frames` is the resolved ramp length (see [`crate::RenderConfig::drift_frames`]).
    pub fn new(cfg: &CameraConfig, drift_frames: u64) -> Self {
        Self {
            drift_frames,
            drift_scale: cfg.drift_scale,
        }
    }

    pub fn pulse(&self, section: SectionTag, frame: FrameIndex) -> MotionResult<f64> {
        PulseShape::for_section(section).sample(frame)
    }

    pub fn shake(&self, section: SectionTag, frame: FrameIndex) -> Vec2 {
        ShakeProfile::for_section(section).map_or(Vec2::ZERO, |s| s.sample(frame))
    }

    /// Monotonic `1 -> drift_scale` ramp, held after `drift_frames`.
    pub fn base_scale(&self, frame: FrameIndex) -> MotionResult<f64> {
        interpolate(
            frame.0 as f64,
            &[0.0, self.drift_frames as f64],
            &[1.0, self.drift_scale],
            InterpOpts::clamped(),
        )
    }

    pub fn camera(&self, section: SectionTag, frame: FrameIndex) -> MotionResult<CameraParams> {
        let shake = self.shake(section, frame);
        Ok(CameraParams {
            scale: self.base_scale(frame)? + self.pulse(section, frame)?,
            shake_x: shake.x,
            shake_y: shake.y,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/pulse.rs"]
mod tests;
