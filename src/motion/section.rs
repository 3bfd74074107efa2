use crate::{
    animation::ease::Ease,
    animation::interp::{InterpOpts, interpolate},
    config::MotionConfig,
    foundation::core::{Affine, Vec2},
    foundation::error::MotionResult,
    timeline::model::SectionTag,
};

/// Transform and envelope bundle of the lyric text for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MotionParams {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    /// Degrees, clockwise.
    pub rotation: f64,
    /// Text-shadow blur radius in px.
    pub glow_radius: f64,
}

impl MotionParams {
    /// Nothing renders.
    pub const HIDDEN: MotionParams = MotionParams {
        opacity: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotation: 0.0,
        glow_radius: 0.0,
    };

    /// Text transform about `anchor` (usually the text block center).
    pub fn to_affine(&self, anchor: Vec2) -> Affine {
        // Canonical order:
        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        Affine::translate(Vec2::new(self.translate_x, self.translate_y))
            * Affine::translate(anchor)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-anchor)
    }
}

/// Fade-in/hold/fade-out breakpoints of one entry, in local frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeWindow {
    pub fade_in_end: f64,
    pub fade_out_start: f64,
    pub duration: f64,
}

impl FadeWindow {
    pub fn new(duration: f64, cfg: &MotionConfig) -> Self {
        let fade = cfg.fade_max_frames.min(duration * cfg.fade_fraction);
        Self {
            fade_in_end: fade,
            fade_out_start: duration - fade,
            duration,
        }
    }

    /// Four-point envelope domain `[0, in, out, duration]`.
    pub fn points(&self) -> [f64; 4] {
        [0.0, self.fade_in_end, self.fade_out_start, self.duration]
    }

    /// `0 -> peak -> peak -> 0` over [`FadeWindow::points`], clamped.
    pub fn envelope(&self, local_frame: f64, peak: f64) -> MotionResult<f64> {
        interpolate(
            local_frame,
            &self.points(),
            &[0.0, peak, peak, 0.0],
            InterpOpts::clamped(),
        )
    }
}

/// Section-specific part of the motion: everything except opacity and glow.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Profile {
    translate_x: f64,
    translate_y: f64,
    scale: f64,
    rotation: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

type ProfileFn = fn(f64, &FadeWindow) -> MotionResult<Profile>;

/// Maps `(section, local frame, entry length)` to the text motion bundle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionMotionPolicy {
    cfg: MotionConfig,
}

impl SectionMotionPolicy {
    pub fn new(cfg: MotionConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.cfg
    }

    pub fn compute_motion(
        &self,
        section: SectionTag,
        local_frame: f64,
        entry_duration_frames: f64,
    ) -> MotionResult<MotionParams> {
        let profile: ProfileFn = match section {
            SectionTag::Intro => intro,
            SectionTag::Verse => verse,
            SectionTag::Chorus => chorus,
            SectionTag::Bridge => bridge,
            SectionTag::Outro => outro,
            SectionTag::None => return Ok(MotionParams::HIDDEN),
        };

        let window = FadeWindow::new(entry_duration_frames, &self.cfg);
        let p = profile(local_frame, &window)?;
        Ok(MotionParams {
            opacity: window.envelope(local_frame, 1.0)?,
            translate_x: p.translate_x,
            translate_y: p.translate_y,
            scale: p.scale,
            rotation: p.rotation,
            glow_radius: window.envelope(local_frame, self.cfg.glow_max)?,
        })
    }
}

fn clamp() -> InterpOpts {
    InterpOpts::clamped()
}

// Pop 0.5 -> 1.15 -> 1 with a small rotation settle.
fn intro(local: f64, _w: &FadeWindow) -> MotionResult<Profile> {
    Ok(Profile {
        scale: interpolate(local, &[0.0, 5.0, 10.0], &[0.5, 1.15, 1.0], clamp())?,
        rotation: interpolate(
            local,
            &[0.0, 5.0, 12.0],
            &[-3.0, 2.0, 0.0],
            InterpOpts::eased(Ease::OutCubic),
        )?,
        ..Profile::default()
    })
}

fn verse(local: f64, w: &FadeWindow) -> MotionResult<Profile> {
    let fi = w.fade_in_end;
    Ok(Profile {
        translate_y: interpolate(
            local,
            &w.points(),
            &[35.0, 0.0, 0.0, -25.0],
            InterpOpts::eased(Ease::OutCubic),
        )?,
        scale: interpolate(local, &[0.0, fi * 0.6, fi], &[0.92, 1.04, 1.0], clamp())?,
        ..Profile::default()
    })
}

fn chorus(local: f64, w: &FadeWindow) -> MotionResult<Profile> {
    let fi = w.fade_in_end;
    Ok(Profile {
        translate_x: (local * 0.6).sin() * 3.0,
        translate_y: interpolate(
            local,
            &w.points(),
            &[40.0, 0.0, 0.0, -20.0],
            InterpOpts::eased(Ease::OutBounce),
        )?,
        scale: interpolate(local, &[0.0, fi * 0.5, fi], &[0.8, 1.12, 1.0], clamp())?,
        rotation: 0.0,
    })
}

// Slam-in over 8 frames.
fn bridge(local: f64, _w: &FadeWindow) -> MotionResult<Profile> {
    Ok(Profile {
        translate_y: interpolate(local, &[0.0, 3.0, 8.0], &[-50.0, 5.0, 0.0], clamp())?,
        scale: interpolate(
            local,
            &[0.0, 3.0, 8.0],
            &[1.5, 0.95, 1.0],
            InterpOpts::eased(Ease::OutCubic),
        )?,
        ..Profile::default()
    })
}

fn outro(local: f64, w: &FadeWindow) -> MotionResult<Profile> {
    Ok(Profile {
        translate_y: interpolate(local, &[0.0, w.duration], &[15.0, -10.0], clamp())?,
        scale: interpolate(local, &[0.0, w.fade_in_end], &[0.95, 1.0], clamp())?,
        ..Profile::default()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/motion/section.rs"]
mod tests;
