//! Category filtering and the featured/other split.

use crate::catalog::{Category, Tool};

/// Sentinel label meaning "no filtering".
pub const ALL_CATEGORIES: &str = "All";

/// Labels on the category strip: the sentinel followed by the closed set.
pub fn category_strip() -> Vec<&'static str> {
    let mut labels = vec![ALL_CATEGORIES];
    labels.extend(Category::ALL.iter().map(|c| c.label()));
    labels
}

/// Select the entries whose category label matches `selected` exactly.
///
/// `"All"` returns the whole catalog. Relative order is preserved. An
/// unknown label matches nothing and yields an empty result, not an error.
pub fn filter_by_category<'a>(catalog: &'a [Tool], selected: &str) -> Vec<&'a Tool> {
    if selected == ALL_CATEGORIES {
        return catalog.iter().collect();
    }
    catalog
        .iter()
        .filter(|tool| tool.category.label() == selected)
        .collect()
}

/// Split a filtered list into (featured, other), both in original order.
///
/// The two halves are disjoint and together cover the input exactly.
pub fn partition_featured<'a>(items: &[&'a Tool]) -> (Vec<&'a Tool>, Vec<&'a Tool>) {
    items.iter().copied().partition(|tool| tool.featured)
}
