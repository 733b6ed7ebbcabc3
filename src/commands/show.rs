//! `folio show <ID>` - print one project in full.

use anyhow::{Result, bail};

use crate::catalog::{Tool, all_tools, tool_by_id};

pub fn handle_show(id: &str) -> Result<()> {
    let Some(tool) = tool_by_id(id) else {
        eprintln!("Error: No project with id '{id}'");
        eprintln!();
        eprintln!("Available projects:");
        for tool in all_tools() {
            eprintln!("  [{}] {}", tool.id, tool.title);
        }
        eprintln!();
        eprintln!("Tip: Use 'folio tools' to browse the catalog");
        bail!("No project with id '{id}'");
    };

    for line in render_detail(tool) {
        println!("{line}");
    }
    Ok(())
}

/// Full detail block: title, category, long description, links.
pub fn render_detail(tool: &Tool) -> Vec<String> {
    let mut lines = vec![
        format!("{} [{}]", tool.title, tool.category.label()),
        String::new(),
        tool.long_description.to_string(),
        String::new(),
        format!("Technologies: {}", tool.technologies.join(", ")),
        format!("Code: {}", tool.github_url),
    ];
    if let Some(live_url) = tool.live_url {
        lines.push(format!("Live Demo: {live_url}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_includes_long_description() {
        let tool = tool_by_id("3").unwrap();
        let lines = render_detail(tool);
        assert!(lines[0].starts_with("Data Visualization Library"));
        assert!(lines.iter().any(|l| l.contains("TypeScript-first")));
        assert!(lines.iter().any(|l| l.contains("https://viz-library-docs.com")));
    }

    #[test]
    fn test_detail_omits_absent_live_url() {
        let tool = tool_by_id("2").unwrap();
        let lines = render_detail(tool);
        assert!(!lines.iter().any(|l| l.starts_with("Live Demo:")));
    }

    #[test]
    fn test_unknown_id_errors() {
        let err = handle_show("99").unwrap_err();
        assert!(err.to_string().contains("99"));
    }
}
