pub(crate) mod color;
pub(crate) mod palette;
pub(crate) mod text;
