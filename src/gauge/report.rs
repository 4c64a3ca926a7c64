use crate::catalog::catalog::WeightCatalog;
use crate::catalog::model::{NeedleSize, SuggestedCombination};
use crate::foundation::error::SwatchResult;
use crate::foundation::math::lerp;
use crate::gauge::combine::{CombinedResult, combine, matches_suggestion};
use serde::Serialize;

/// Stitches and rows expected for a combined yarn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GaugeEstimate {
    /// Stitches across `per`.
    pub stitches: i64,
    /// Rows across `per`.
    pub rows: i64,
    /// Length label copied from the nearest category.
    pub per: String,
}

/// Everything the UI shows for one strand combination.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeReport {
    /// Combined weight.
    pub combined: CombinedResult,
    /// Scaled gauge estimate.
    pub gauge: GaugeEstimate,
    /// Interpolated wraps per inch.
    pub wpi: f64,
    /// Recommended needle.
    pub needle: NeedleSize,
    /// Matching cataloged combination, if any.
    pub suggestion: Option<SuggestedCombination>,
}

/// Scale the nearest category's gauge by the inverse thickness ratio.
///
/// A yarn thicker than its nominal category yields fewer stitches per length.
pub fn estimate_gauge(combined: &CombinedResult) -> GaugeEstimate {
    let nearest = &combined.nearest_category;
    let ratio = combined.exact_thickness / nearest.thickness;
    let scale = |base: f64| (base / ratio).round() as i64;
    GaugeEstimate {
        stitches: scale(nearest.gauge.stitches),
        rows: scale(nearest.gauge.rows),
        per: nearest.gauge.per.clone(),
    }
}

/// Wraps per inch for `thickness`, linearly interpolated between the bracketing categories.
///
/// Clamps to the thinnest/thickest category's WPI outside the cataloged range.
pub fn interpolate_wpi(catalog: &WeightCatalog, thickness: f64) -> f64 {
    let mut prev = None;
    for c in catalog.by_thickness() {
        match prev {
            None if thickness <= c.thickness => return c.wpi,
            Some((t0, w0)) if thickness <= c.thickness => {
                let span = c.thickness - t0;
                if span <= f64::EPSILON {
                    return w0;
                }
                return lerp(w0, c.wpi, (thickness - t0) / span);
            }
            _ => {}
        }
        prev = Some((c.thickness, c.wpi));
    }
    prev.map(|(_, w)| w).unwrap_or(0.0)
}

/// Needle of the nearest category, unscaled. Needles come in discrete real-world sizes.
pub fn recommend_needle(combined: &CombinedResult) -> NeedleSize {
    combined.nearest_category.needle_size.clone()
}

/// Combine `strand_category_ids` and derive gauge, WPI, needle and suggestion match.
#[tracing::instrument(skip(catalog))]
pub fn generate_report(
    catalog: &WeightCatalog,
    strand_category_ids: &[u32],
) -> SwatchResult<GaugeReport> {
    let combined = combine(catalog, strand_category_ids)?;
    let gauge = estimate_gauge(&combined);
    let wpi = interpolate_wpi(catalog, combined.exact_thickness);
    let needle = recommend_needle(&combined);
    let suggestion = matches_suggestion(catalog, strand_category_ids).cloned();

    tracing::debug!(
        nearest = %combined.nearest_category.name,
        exact_thickness = combined.exact_thickness,
        stitches = gauge.stitches,
        rows = gauge.rows,
        wpi,
        "gauge report"
    );

    Ok(GaugeReport {
        combined,
        gauge,
        wpi,
        needle,
        suggestion,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/report.rs"]
mod tests;
