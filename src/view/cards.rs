//! Per-card expansion state.

/// Which card currently shows its long description, if any.
///
/// At most one card is expanded across the whole page. Toggling the
/// expanded card collapses it; toggling any other card replaces the
/// previous value. Category filter changes never touch this state, so a
/// card hidden by a filter comes back still expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedCard(Option<&'static str>);

impl ExpandedCard {
    pub fn toggle(&mut self, id: &'static str) {
        self.0 = if self.0 == Some(id) { None } else { Some(id) };
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.0 == Some(id)
    }

    pub fn current(&self) -> Option<&'static str> {
        self.0
    }
}
