pub(crate) mod crossfade;
pub(crate) mod ken_burns;
pub(crate) mod overlay;
pub(crate) mod pulse;
pub(crate) mod section;
