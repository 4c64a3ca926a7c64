use crate::catalog::model::{CatalogDef, Gauge, NeedleSize, SuggestedCombination, WeightCategory};

#[allow(clippy::too_many_arguments)]
fn category(
    id: u32,
    name: &str,
    thickness: f64,
    wpi: f64,
    stitches: f64,
    rows: f64,
    mm: f64,
    us: &str,
    visual_color: &str,
    visual_twist: f64,
) -> WeightCategory {
    WeightCategory {
        id,
        name: name.to_owned(),
        thickness,
        wpi,
        gauge: Gauge {
            stitches,
            rows,
            per: "4 in".to_owned(),
        },
        needle_size: NeedleSize {
            mm,
            us: us.to_owned(),
        },
        visual_color: visual_color.to_owned(),
        visual_twist,
    }
}

fn suggestion(name: &str, category_ids: &[u32], result_id: u32) -> SuggestedCombination {
    SuggestedCombination {
        name: name.to_owned(),
        category_ids: category_ids.to_vec(),
        result_id,
    }
}

/// Eight standard weight classes, thinnest first.
pub(crate) fn standard_def() -> CatalogDef {
    CatalogDef {
        categories: vec![
            category(0, "Lace", 1.0, 35.0, 36.0, 44.0, 2.25, "1", "#f4efe6", 0.2),
            category(1, "Fingering", 2.0, 19.0, 29.0, 38.0, 3.0, "2.5", "#e8d9c0", 0.3),
            category(2, "Sport", 3.0, 15.0, 24.0, 32.0, 3.75, "5", "#d9c2a0", 0.4),
            category(3, "DK", 4.0, 12.0, 22.0, 30.0, 4.5, "7", "#c9a97f", 0.5),
            category(4, "Worsted", 5.0, 9.0, 18.0, 24.0, 5.0, "8", "#b88f60", 0.6),
            category(5, "Bulky", 7.0, 7.0, 14.0, 19.0, 6.5, "10.5", "#a07447", 0.7),
            category(6, "Super Bulky", 10.0, 5.0, 9.0, 13.0, 9.0, "13", "#865b33", 0.8),
            category(7, "Jumbo", 14.0, 3.0, 6.0, 8.0, 15.0, "19", "#6b4424", 0.9),
        ],
        suggestions: vec![
            suggestion("Triple lace", &[0, 0, 0], 2),
            suggestion("Doubled fingering", &[1, 1], 3),
            suggestion("Fingering with lace mohair", &[1, 0], 2),
            suggestion("Doubled DK", &[3, 3], 5),
            suggestion("Doubled worsted", &[4, 4], 6),
            suggestion("Worsted with DK", &[4, 3], 6),
        ],
    }
}
