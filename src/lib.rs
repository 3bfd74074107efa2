//! Lyricmotion is the animation engine behind timeline-driven lyric videos.
//!
//! Given an authored [`Timeline`] of lyric lines and a [`RenderConfig`], a [`FrameEvaluator`]
//! turns any frame number into a [`FrameParams`] bundle: text motion and colors, section labels,
//! camera pulse and shake, image crossfade weights and Ken Burns pan/zoom. Painting those values is
//! left to an external compositor.
//!
//! # Pipeline overview
//!
//! 1. **Load**: lyrics JSON -> [`Timeline`] (validated, sorted, non-overlapping)
//! 2. **Resolve**: `FrameIndex -> ActiveEntryResolution` (binary search, previous entry)
//! 3. **Evaluate**: section motion, pulse, crossfade and overlays -> [`FrameParams`]
//!
//! Evaluation is pure: no caches, no cross-frame state, no IO. Frames may be evaluated in any
//! order or in parallel ([`FrameEvaluator::eval_range_parallel`]) with bit-identical results.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod eval;
mod foundation;
mod motion;
mod style;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interp::{Extrapolate, InterpOpts, Interpolator, interpolate};
pub use config::{CameraConfig, CrossfadeConfig, KenBurnsConfig, MotionConfig, RenderConfig};
pub use eval::evaluator::FrameEvaluator;
pub use eval::frame::{FrameParams, ImageLayer, LabelLayer, TextLayer};
pub use foundation::core::{Affine, Fps, FrameContext, FrameIndex, FrameRange, Vec2};
pub use foundation::error::{MotionError, MotionResult};
pub use motion::crossfade::{CrossfadeController, CrossfadeWeights};
pub use motion::ken_burns::{KenBurnsParams, ken_burns};
pub use motion::overlay::{IdleIndicator, idle_indicator, section_label_opacity};
pub use motion::pulse::{CameraParams, PulseGenerator, PulseShape, ShakeProfile};
pub use motion::section::{FadeWindow, MotionParams, SectionMotionPolicy};
pub use style::color::Rgba;
pub use style::palette::{MoodColors, Palette};
pub use style::text::{TextStyle, section_label};
pub use timeline::index::{ActiveEntryResolution, Timeline};
pub use timeline::model::{MoodTag, RawTimelineEntry, SectionTag, TimelineEntry};
