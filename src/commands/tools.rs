//! `folio tools` - print the catalog, optionally filtered by category.

use anyhow::{Context, Result};

use crate::catalog::{Tool, all_tools};
use crate::view::{filter_by_category, partition_featured};

/// Print the filtered catalog as formatted text or JSON.
///
/// An unknown category yields empty output and exits cleanly; filtering
/// never fails.
pub fn handle_tools(category: &str, json: bool) -> Result<()> {
    let filtered = filter_by_category(all_tools(), category);

    if json {
        let out = serde_json::to_string_pretty(&filtered)
            .context("Failed to serialize catalog to JSON")?;
        println!("{out}");
        return Ok(());
    }

    for line in render_rows(&filtered) {
        println!("{line}");
    }
    Ok(())
}

/// One text row per entry, featured section first, both in catalog order.
pub fn render_rows(filtered: &[&Tool]) -> Vec<String> {
    let (featured, other) = partition_featured(filtered);
    let mut rows = Vec::new();

    if !featured.is_empty() {
        rows.push("Featured Projects".to_string());
        rows.extend(featured.iter().map(|tool| row(tool)));
    }
    if !other.is_empty() {
        rows.push("All Projects".to_string());
        rows.extend(other.iter().map(|tool| row(tool)));
    }
    rows
}

fn row(tool: &Tool) -> String {
    format!(
        "  [{}] {} ({}) - {}",
        tool.id,
        tool.title,
        tool.category.label(),
        tool.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ALL_CATEGORIES;

    #[test]
    fn test_backend_rows_list_both_services_in_order() {
        let filtered = filter_by_category(all_tools(), "Backend");
        let rows = render_rows(&filtered);

        assert_eq!(rows[0], "Featured Projects");
        assert!(rows[1].contains("API Gateway Service"));
        assert!(rows[2].contains("Real-time Chat Engine"));
        // Both Backend entries are featured, so no second section.
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_unknown_category_renders_nothing() {
        let filtered = filter_by_category(all_tools(), "Gaming");
        assert!(render_rows(&filtered).is_empty());
    }

    #[test]
    fn test_all_rows_cover_catalog() {
        let filtered = filter_by_category(all_tools(), ALL_CATEGORIES);
        let rows = render_rows(&filtered);
        // Two section headings plus six entries.
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn test_json_serialization_round_trips_ids() {
        let filtered = filter_by_category(all_tools(), "Backend");
        let json = serde_json::to_value(&filtered).unwrap();
        let ids: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["2", "6"]);
        assert_eq!(json[0]["category"], "Backend");
    }
}
