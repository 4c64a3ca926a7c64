use crate::foundation::core::Rgb8;
use crate::strand::color::parse_hex_rgb_or_gray;
use serde::{Deserialize, Serialize};

/// One strand as sent by the UI with a render command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrandSpec {
    /// `#RRGGBB` color string. Malformed values render as neutral gray.
    pub color: String,
    /// Weight category id.
    pub weight_id: u32,
    /// Twist intensity, `0.0` for an untwisted strand.
    #[serde(default)]
    pub twist_intensity: f64,
    /// Explicit lateral ply offset in stroke widths; evenly spread when absent.
    #[serde(default)]
    pub ply_offset: Option<f64>,
}

impl StrandSpec {
    /// Convenience constructor without a ply offset.
    pub fn new(color: impl Into<String>, weight_id: u32, twist_intensity: f64) -> Self {
        Self {
            color: color.into(),
            weight_id,
            twist_intensity,
            ply_offset: None,
        }
    }
}

/// A resolved strand: parsed color plus its weight category reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strand {
    /// Strand color.
    pub color: Rgb8,
    /// Weight category id.
    pub category_id: u32,
    /// Twist intensity; non-finite input is treated as `0.0`.
    pub twist_intensity: f64,
    /// Explicit lateral ply offset in stroke widths.
    pub ply_offset: Option<f64>,
}

impl Strand {
    /// Construct a strand with no explicit ply offset.
    pub fn new(color: Rgb8, category_id: u32, twist_intensity: f64) -> Self {
        Self {
            color,
            category_id,
            twist_intensity: finite_or_zero(twist_intensity),
            ply_offset: None,
        }
    }

    /// Resolve a wire-level spec; never fails.
    pub fn from_spec(spec: &StrandSpec) -> Self {
        Self {
            color: parse_hex_rgb_or_gray(&spec.color),
            category_id: spec.weight_id,
            twist_intensity: finite_or_zero(spec.twist_intensity),
            ply_offset: spec.ply_offset.filter(|v| v.is_finite()),
        }
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Rounded mean color of `strands`, neutral gray when empty.
pub fn average_color(strands: &[Strand]) -> Rgb8 {
    Rgb8::mean(strands.iter().map(|s| &s.color)).unwrap_or(Rgb8::NEUTRAL_GRAY)
}
