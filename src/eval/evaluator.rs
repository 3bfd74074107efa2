use rayon::prelude::*;

use crate::{
    config::RenderConfig,
    eval::frame::{FrameParams, ImageLayer, LabelLayer, TextLayer},
    foundation::core::{FrameContext, FrameIndex, FrameRange},
    foundation::error::{MotionError, MotionResult},
    motion::crossfade::{CrossfadeController, CrossfadeWeights},
    motion::ken_burns::ken_burns,
    motion::overlay::{idle_indicator, section_label_opacity},
    motion::pulse::PulseGenerator,
    motion::section::SectionMotionPolicy,
    style::color::Rgba,
    style::text::{TextStyle, section_label},
    timeline::index::{ActiveEntryResolution, Timeline},
    timeline::model::{SectionTag, TimelineEntry},
};

/// Per-frame orchestrator: `(frame, timeline, config) -> FrameParams`.
///
/// Holds only immutable inputs, so frames can be evaluated in any order, repeatedly, or from
/// several threads at once with identical results.
#[derive(Clone, Debug)]
pub struct FrameEvaluator {
    timeline: Timeline,
    config: RenderConfig,
    policy: SectionMotionPolicy,
    pulses: PulseGenerator,
    crossfade: CrossfadeController,
}

impl FrameEvaluator {
    #[tracing::instrument(skip(timeline, config), fields(entries = timeline.len()))]
    pub fn new(timeline: Timeline, config: RenderConfig) -> MotionResult<Self> {
        config.validate()?;
        let policy = SectionMotionPolicy::new(config.motion);
        let pulses = PulseGenerator::new(&config.camera, config.drift_frames());
        let crossfade = CrossfadeController::new(&config.crossfade);
        tracing::debug!(
            frame_count = config.frame_count,
            fps = config.fps.as_f64(),
            "frame evaluator ready"
        );
        Ok(Self {
            timeline,
            config,
            policy,
            pulses,
            crossfade,
        })
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// All frames of the render.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.config.frame_count),
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn eval_frame(&self, frame: FrameIndex) -> MotionResult<FrameParams> {
        if frame.0 >= self.config.frame_count {
            return Err(MotionError::evaluation(format!(
                "frame {} is out of bounds (frame_count {})",
                frame.0, self.config.frame_count
            )));
        }

        let ctx = FrameContext::new(frame, self.config.fps);
        let res = self.timeline.resolve(ctx);
        let section = res.current.map_or(SectionTag::None, |e| e.section);
        let camera = self.pulses.camera(section, frame)?;
        let kb = ken_burns(frame, self.config.fps, &self.config.ken_burns)?;

        let params = match res.current {
            None => FrameParams {
                frame,
                time_secs: ctx.time_secs,
                section,
                entry_index: None,
                camera,
                text: None,
                label: None,
                idle: Some(idle_indicator(frame)?),
                image: ImageLayer {
                    current_asset: self.config.crossfade.idle_asset_index,
                    previous_asset: None,
                    weights: CrossfadeWeights::SETTLED,
                    ken_burns: kb,
                },
            },
            Some(current) => {
                let weights = self
                    .crossfade
                    .crossfade(Some(current), res.previous, res.local_frame)?;
                FrameParams {
                    frame,
                    time_secs: ctx.time_secs,
                    section,
                    entry_index: res.index,
                    camera,
                    text: Some(self.text_layer(current, &res)?),
                    label: self.label_layer(current, &res)?,
                    idle: None,
                    image: ImageLayer {
                        current_asset: current.asset_index,
                        previous_asset: res
                            .previous
                            .filter(|_| weights.is_blending())
                            .map(|p| p.asset_index),
                        weights,
                        ken_burns: kb,
                    },
                }
            }
        };

        tracing::trace!(
            frame = frame.0,
            section = section.as_str(),
            entry = ?params.entry_index,
            "frame evaluated"
        );
        Ok(params)
    }

    fn text_layer(
        &self,
        current: &TimelineEntry,
        res: &ActiveEntryResolution<'_>,
    ) -> MotionResult<TextLayer> {
        let motion = self.policy.compute_motion(
            current.section,
            res.local_frame,
            res.entry_duration_frames,
        )?;
        let colors = self.config.palette.lookup(&current.mood);
        let style = TextStyle::for_section(current.section);
        let progress = if res.entry_duration_frames > 0.0 {
            (res.local_frame / res.entry_duration_frames).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Ok(TextLayer {
            text: current.text.clone(),
            motion,
            color: if style.accent_color {
                colors.primary
            } else {
                Rgba::WHITE
            },
            glow_color: colors.glow,
            bg: colors.bg,
            style,
            rule_opacity: 0.5 * motion.opacity,
            progress,
        })
    }

    fn label_layer(
        &self,
        current: &TimelineEntry,
        res: &ActiveEntryResolution<'_>,
    ) -> MotionResult<Option<LabelLayer>> {
        let opacity =
            section_label_opacity(current, res.previous, res.local_frame, &self.config.motion)?;
        Ok(opacity.map(|opacity| LabelLayer {
            text: section_label(&current.section_name),
            opacity,
            color: self.config.palette.lookup(&current.mood).primary,
        }))
    }

    /// Evaluate `range` in frame order on the calling thread.
    #[tracing::instrument(skip(self))]
    pub fn eval_range(&self, range: FrameRange) -> MotionResult<Vec<FrameParams>> {
        range.iter().map(|f| self.eval_frame(f)).collect()
    }

    /// Evaluate `range` on a dedicated rayon pool; output is in frame order and identical to
    /// [`FrameEvaluator::eval_range`].
    ///
    /// `threads: None` lets rayon pick the worker count.
    #[tracing::instrument(skip(self))]
    pub fn eval_range_parallel(
        &self,
        range: FrameRange,
        threads: Option<usize>,
    ) -> MotionResult<Vec<FrameParams>> {
        let pool = build_thread_pool(threads)?;
        let frames: Vec<FrameIndex> = range.iter().collect();
        let evaluated = pool.install(|| {
            frames
                .par_iter()
                .map(|&f| self.eval_frame(f))
                .collect::<Vec<_>>()
        });

        let mut out = Vec::with_capacity(evaluated.len());
        for item in evaluated {
            out.push(item?);
        }
        Ok(out)
    }
}

fn build_thread_pool(threads: Option<usize>) -> MotionResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(MotionError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MotionError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
