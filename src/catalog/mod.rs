#[allow(clippy::module_inception)]
pub(crate) mod catalog;
pub(crate) mod model;
pub(crate) mod standard;
