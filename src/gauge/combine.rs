use crate::catalog::catalog::WeightCatalog;
use crate::catalog::model::{SuggestedCombination, WeightCategory};
use crate::foundation::error::{SwatchError, SwatchResult};
use serde::Serialize;

/// Several strands held together, resolved against a catalog.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResult {
    /// Catalog entry whose thickness is closest to `exact_thickness`.
    pub nearest_category: WeightCategory,
    /// Sum of the source thicknesses.
    pub exact_thickness: f64,
    /// Number of strands combined.
    pub strand_count: usize,
    /// Source categories in input order.
    pub source_strands: Vec<WeightCategory>,
}

/// Combine strands by summing thickness and snapping to the nearest cataloged weight.
///
/// Thickness stacks: two strands of 4.0 make 8.0, never an average. Nearest-category ties
/// resolve to the earliest catalog entry.
pub fn combine(catalog: &WeightCatalog, strand_category_ids: &[u32]) -> SwatchResult<CombinedResult> {
    if strand_category_ids.is_empty() {
        return Err(SwatchError::EmptyInput);
    }

    let mut source_strands = Vec::with_capacity(strand_category_ids.len());
    for &id in strand_category_ids {
        let c = catalog.get(id).ok_or(SwatchError::UnknownCategory(id))?;
        source_strands.push(c.clone());
    }
    let exact_thickness: f64 = source_strands.iter().map(|c| c.thickness).sum();

    let nearest_category = nearest_by_thickness(catalog, exact_thickness).clone();
    Ok(CombinedResult {
        nearest_category,
        exact_thickness,
        strand_count: source_strands.len(),
        source_strands,
    })
}

fn nearest_by_thickness(catalog: &WeightCatalog, thickness: f64) -> &WeightCategory {
    let mut cats = catalog.categories().iter();
    // Catalogs are validated non-empty.
    let mut best = cats.next().unwrap_or_else(|| unreachable!("validated catalog is non-empty"));
    let mut best_diff = (thickness - best.thickness).abs();
    for c in cats {
        let diff = (thickness - c.thickness).abs();
        if diff < best_diff {
            best = c;
            best_diff = diff;
        }
    }
    best
}

/// Find the suggestion whose category-id multiset equals `strand_category_ids` exactly.
///
/// Input order is irrelevant; subsets and supersets never match.
pub fn matches_suggestion<'a>(
    catalog: &'a WeightCatalog,
    strand_category_ids: &[u32],
) -> Option<&'a SuggestedCombination> {
    if strand_category_ids.is_empty() {
        return None;
    }
    let mut wanted = strand_category_ids.to_vec();
    wanted.sort_unstable();
    catalog.suggestions().iter().find(|s| {
        if s.category_ids.len() != wanted.len() {
            return false;
        }
        let mut have = s.category_ids.clone();
        have.sort_unstable();
        have == wanted
    })
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/combine.rs"]
mod tests;
