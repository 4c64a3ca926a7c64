use serde::{Deserialize, Serialize};

/// Stitches and rows achieved over a nominal length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    /// Stitches across `per`.
    pub stitches: f64,
    /// Rows across `per`.
    pub rows: f64,
    /// Length label, e.g. `"4 in"`.
    pub per: String,
}

/// A real-world needle size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeedleSize {
    /// Diameter in millimetres.
    pub mm: f64,
    /// US size label.
    pub us: String,
}

/// A standard yarn-thickness classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightCategory {
    /// Stable id referenced by strands and suggestions.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Nominal thickness in an arbitrary physical unit. Combined strands add up.
    pub thickness: f64,
    /// Wraps per inch.
    pub wpi: f64,
    /// Nominal gauge.
    pub gauge: Gauge,
    /// Recommended needle.
    pub needle_size: NeedleSize,
    /// Swatch color used when presenting the category.
    pub visual_color: String,
    /// Twist hint for presentation, `>= 0`.
    #[serde(default)]
    pub visual_twist: f64,
}

/// A cataloged strand combination and the category it is known to produce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedCombination {
    /// Display name.
    pub name: String,
    /// Category ids held together, treated as a multiset.
    pub category_ids: Vec<u32>,
    /// Expected resulting category id.
    pub result_id: u32,
}

/// JSON document shape for a catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct CatalogDef {
    pub(crate) categories: Vec<WeightCategory>,
    #[serde(default)]
    pub(crate) suggestions: Vec<SuggestedCombination>,
}
