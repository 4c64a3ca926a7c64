use crate::catalog::model::{CatalogDef, SuggestedCombination, WeightCategory};
use crate::catalog::standard::standard_def;
use crate::foundation::error::{SwatchError, SwatchResult};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Immutable table of weight categories and suggested combinations.
///
/// Loaded once and shared read-only for the lifetime of a session. Category order is
/// significant: nearest-category ties resolve to the earliest entry.
#[derive(Debug, Clone)]
pub struct WeightCatalog {
    def: CatalogDef,
    // Indices into `def.categories`, stable-sorted by thickness.
    by_thickness: Vec<usize>,
}

impl WeightCatalog {
    /// Built-in standard table (Lace through Jumbo).
    pub fn standard() -> Self {
        Self::from_def(standard_def())
            .unwrap_or_else(|e| unreachable!("built-in catalog is valid: {e}"))
    }

    /// Build and validate a catalog from explicit parts.
    pub fn new(
        categories: Vec<WeightCategory>,
        suggestions: Vec<SuggestedCombination>,
    ) -> SwatchResult<Self> {
        Self::from_def(CatalogDef {
            categories,
            suggestions,
        })
    }

    /// Parse a catalog from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SwatchResult<Self> {
        let def: CatalogDef = serde_json::from_reader(r)
            .map_err(|e| SwatchError::serde(format!("parse weight catalog JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SwatchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SwatchError::catalog(format!("open weight catalog '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub(crate) fn from_def(def: CatalogDef) -> SwatchResult<Self> {
        validate_def(&def)?;
        let mut by_thickness: Vec<usize> = (0..def.categories.len()).collect();
        by_thickness.sort_by(|&a, &b| {
            def.categories[a]
                .thickness
                .total_cmp(&def.categories[b].thickness)
        });
        Ok(Self { def, by_thickness })
    }

    /// Categories in catalog order.
    pub fn categories(&self) -> &[WeightCategory] {
        &self.def.categories
    }

    /// Suggested combinations in catalog order.
    pub fn suggestions(&self) -> &[SuggestedCombination] {
        &self.def.suggestions
    }

    /// Look up a category by id.
    pub fn get(&self, id: u32) -> Option<&WeightCategory> {
        self.def.categories.iter().find(|c| c.id == id)
    }

    /// Categories ordered by ascending thickness (stable with respect to catalog order).
    pub fn by_thickness(&self) -> impl Iterator<Item = &WeightCategory> + '_ {
        self.by_thickness.iter().map(|&i| &self.def.categories[i])
    }
}

fn validate_def(def: &CatalogDef) -> SwatchResult<()> {
    if def.categories.is_empty() {
        return Err(SwatchError::catalog("catalog must contain at least one category"));
    }

    let mut ids = BTreeSet::new();
    for c in &def.categories {
        if !ids.insert(c.id) {
            return Err(SwatchError::catalog(format!("duplicate category id {}", c.id)));
        }
        if !c.thickness.is_finite() || c.thickness <= 0.0 {
            return Err(SwatchError::catalog(format!(
                "category {} thickness must be finite and > 0",
                c.id
            )));
        }
        if !c.wpi.is_finite() || c.wpi <= 0.0 {
            return Err(SwatchError::catalog(format!(
                "category {} wpi must be finite and > 0",
                c.id
            )));
        }
        if !c.visual_twist.is_finite() || c.visual_twist < 0.0 {
            return Err(SwatchError::catalog(format!(
                "category {} visualTwist must be finite and >= 0",
                c.id
            )));
        }
    }

    for s in &def.suggestions {
        if s.category_ids.is_empty() {
            return Err(SwatchError::catalog(format!(
                "suggestion '{}' must name at least one category",
                s.name
            )));
        }
        for id in s.category_ids.iter().chain(std::iter::once(&s.result_id)) {
            if !ids.contains(id) {
                return Err(SwatchError::catalog(format!(
                    "suggestion '{}' references unknown category {id}",
                    s.name
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/catalog.rs"]
mod tests;
