//! Admin console - Navigation state and the signed-in gate around the store.
//!
//! Rendering is left to whatever front end drives the console; this module
//! only tracks which page is active and refuses data access while nobody is
//! signed in.

mod console;

pub use console::AdminConsole;

/// Pages of the administrative area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Summary cards and recent activity
    #[default]
    Dashboard,
    /// Member directory
    Members,
    /// Staff roster
    Staff,
    /// Groups and ministries
    Groups,
    /// Event calendar
    Events,
    /// Income and expense ledger
    Finance,
    /// Report catalog
    Reports,
    /// Organization preferences
    Settings,
}

impl Tab {
    /// Every tab in sidebar order
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Members,
        Self::Staff,
        Self::Groups,
        Self::Events,
        Self::Finance,
        Self::Reports,
        Self::Settings,
    ];

    /// Sidebar caption
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Members => "Members",
            Self::Staff => "Staff",
            Self::Groups => "Groups",
            Self::Events => "Events",
            Self::Finance => "Finance",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    /// Looks up a tab by its caption, ignoring case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Which page is showing and whether the sidebar is open.
///
/// Starts on the dashboard with the sidebar collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    active_tab: Tab,
    sidebar_expanded: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Dashboard,
            sidebar_expanded: false,
        }
    }
}

impl ShellState {
    /// The page currently showing.
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Whether the sidebar is open.
    #[must_use]
    pub const fn sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }

    /// Makes `tab` the active page. Exactly one tab is active at a time.
    pub const fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Opens or closes the sidebar.
    pub const fn set_sidebar_expanded(&mut self, expanded: bool) {
        self.sidebar_expanded = expanded;
    }

    /// Flips the sidebar and returns the new state.
    pub const fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_expanded = !self.sidebar_expanded;
        self.sidebar_expanded
    }
}
