use crate::{
    foundation::core::FrameIndex,
    motion::crossfade::CrossfadeWeights,
    motion::ken_burns::KenBurnsParams,
    motion::overlay::IdleIndicator,
    motion::pulse::CameraParams,
    motion::section::MotionParams,
    style::color::Rgba,
    style::text::TextStyle,
    timeline::model::SectionTag,
};

/// Everything the compositor needs to paint one frame.
///
/// Values are final: the compositor must not rescale or reinterpret them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameParams {
    pub frame: FrameIndex,
    pub time_secs: f64,
    /// Section of the active entry; [`SectionTag::None`] in a gap.
    pub section: SectionTag,
    /// Timeline position of the active entry.
    pub entry_index: Option<usize>,
    /// Outer camera transform applied to the whole frame.
    pub camera: CameraParams,
    /// Lyric line; absent in a gap.
    pub text: Option<TextLayer>,
    /// Section announcement; only right after a section change.
    pub label: Option<LabelLayer>,
    /// Idle marker; only in a gap.
    pub idle: Option<IdleIndicator>,
    pub image: ImageLayer,
}

impl FrameParams {
    pub fn is_gap(&self) -> bool {
        self.entry_index.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextLayer {
    pub text: String,
    #[serde(flatten)]
    pub motion: MotionParams,
    pub color: Rgba,
    pub glow_color: Rgba,
    /// Panel background tint.
    pub bg: Rgba,
    pub style: TextStyle,
    /// Decorative rule under the line; half the text opacity.
    pub rule_opacity: f64,
    /// Elapsed fraction of the entry in `[0, 1]`.
    pub progress: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LabelLayer {
    pub text: String,
    pub opacity: f64,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ImageLayer {
    pub current_asset: u32,
    /// Outgoing asset; present only while blending.
    pub previous_asset: Option<u32>,
    #[serde(flatten)]
    pub weights: CrossfadeWeights,
    pub ken_burns: KenBurnsParams,
}
