pub(crate) mod config;
pub(crate) mod frame_loop;
pub(crate) mod swatch_session;
