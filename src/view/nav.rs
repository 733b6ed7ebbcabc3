//! Navigation bar: pages, link entries, and the collapsible menu machine.

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Tools,
}

/// One navigation link.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub name: &'static str,
    pub page: Page,
}

pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        name: "Home",
        page: Page::Home,
    },
    NavItem {
        name: "Tools",
        page: Page::Tools,
    },
];

/// Collapsible menu state.
///
/// The menu button flips between the two states; activating any
/// navigation link forces `Closed`. A fresh instance starts `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn press(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn link_activated(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}
