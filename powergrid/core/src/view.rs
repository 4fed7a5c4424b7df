#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three mutually exclusive screens of the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum View {
    #[default]
    Report,
    Dashboard,
    Predictions,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [View; 3] = [View::Report, View::Dashboard, View::Predictions];

    pub fn label(&self) -> &'static str {
        match self {
            View::Report => "Report Outage",
            View::Dashboard => "Admin Dashboard",
            View::Predictions => "AI Predictions",
        }
    }
}

/// Tracks the current view and whether the mobile navigation overlay is open.
///
/// Any view can be selected from any other; the overlay flag is independent of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    current: View,
    mobile_nav_open: bool,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn is_mobile_nav_open(&self) -> bool {
        self.mobile_nav_open
    }

    pub fn select(&mut self, view: View) {
        self.current = view;
    }

    pub fn toggle_mobile_nav(&mut self) {
        self.mobile_nav_open = !self.mobile_nav_open;
    }

    pub fn close_mobile_nav(&mut self) {
        self.mobile_nav_open = false;
    }

    /// Selects a view from the mobile overlay, which then closes.
    pub fn select_from_overlay(&mut self, view: View) {
        self.select(view);
        self.close_mobile_nav();
    }
}
