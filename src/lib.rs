//! Swatchwork renders a procedural preview of a knitted swatch and its combined yarn.
//!
//! A set of strands (color plus weight category) held together is resolved against a
//! [`WeightCatalog`] into a gauge report. The combined thickness sizes the stitches of a tileable
//! texture, and the texture skins a billowing fabric plane. The public API is session-oriented:
//!
//! - Load a [`WeightCatalog`] (or use [`WeightCatalog::standard`])
//! - Create a [`SwatchSession`] and issue render, clear and destroy commands
//! - Drive [`SwatchSession::tick`] from a [`FrameLoop`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod catalog;
pub(crate) mod cloth;
pub(crate) mod gauge;
pub(crate) mod scene;
pub(crate) mod session;
pub(crate) mod strand;
pub(crate) mod texture;
pub(crate) mod yarn;

pub use crate::foundation::core::{Canvas, Rgb8, Rgba8};
pub use crate::foundation::error::{SwatchError, SwatchResult};

pub use crate::catalog::catalog::WeightCatalog;
pub use crate::catalog::model::{Gauge, NeedleSize, SuggestedCombination, WeightCategory};
pub use crate::cloth::animator::ClothAnimator;
pub use crate::cloth::mesh::{FabricMesh, MeshOpts};
pub use crate::cloth::wave::{BillowParams, WaveComponent};
pub use crate::gauge::combine::{CombinedResult, combine, matches_suggestion};
pub use crate::gauge::report::{
    GaugeEstimate, GaugeReport, estimate_gauge, generate_report, interpolate_wpi,
    recommend_needle,
};
pub use crate::scene::resources::{ResourceHandle, ResourceKind, ResourceRegistry, ResourceStats};
pub use crate::session::config::SwatchOpts;
pub use crate::session::frame_loop::{
    FixedRateScheduler, FrameClock, FrameInfo, FrameLoop, FrameScheduler, ImmediateScheduler,
    ManualClock, StopHandle, SystemClock,
};
pub use crate::session::swatch_session::{
    RenderOutcome, SceneKind, SessionSnapshot, SwatchSession,
};
pub use crate::strand::color::{parse_hex_rgb, parse_hex_rgb_or_gray};
pub use crate::strand::model::{Strand, StrandSpec, average_color};
pub use crate::texture::geometry::{StitchGeometry, StitchLayout};
pub use crate::texture::plan::{PassKind, PassPlan, StrokeOp, StrokePlan, plan_strokes};
pub use crate::texture::synth::{TextureOpts, synthesize};
pub use crate::texture::texture::{Texture, WrapMode};
pub use crate::yarn::helix::{PlyShape, YarnModel, YarnOpts, YarnPly};
pub use glam::Vec3;
