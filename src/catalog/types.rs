//! Core types for the static portfolio data.

use serde::{Serialize, Serializer};
use std::fmt;

/// Display category for a catalog entry.
///
/// Closed set; the filter strip on the Tools page renders these labels
/// after the `"All"` sentinel. Filtering compares labels as strings, so
/// an unknown label is representable at the call site and simply matches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WebApp,
    Backend,
    Library,
    Mobile,
    DevOps,
}

impl Category {
    /// Every category, in the order the filter strip shows them.
    pub const ALL: [Category; 5] = [
        Category::WebApp,
        Category::Backend,
        Category::Library,
        Category::Mobile,
        Category::DevOps,
    ];

    /// Display label, also the string the filter matches against.
    pub fn label(self) -> &'static str {
        match self {
            Category::WebApp => "Web App",
            Category::Backend => "Backend",
            Category::Library => "Library",
            Category::Mobile => "Mobile",
            Category::DevOps => "DevOps",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One project card in the catalog.
///
/// `description` is the collapsed text; `long_description` replaces it
/// when the card is expanded. `live_url` being absent suppresses the
/// "Live Demo" action in any renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub image_url: &'static str,
    pub featured: bool,
    pub category: Category,
}

/// One skill area on the home page.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
}

/// A project teaser on the home page; the full record lives in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub featured: bool,
}

/// Hero and contact copy for the home page.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub contact_heading: &'static str,
    pub contact_pitch: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}
