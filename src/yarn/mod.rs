pub(crate) mod helix;
