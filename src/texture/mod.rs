pub(crate) mod geometry;
pub(crate) mod plan;
pub(crate) mod raster;
pub(crate) mod synth;
#[allow(clippy::module_inception)]
pub(crate) mod texture;
