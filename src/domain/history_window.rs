use {
    crate::config::STOCK_API,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Trailing window of price history to request, in whole minutes.
///
/// The selector only offers `STOCK_API.window_menu`, but any value can be built
/// programmatically and is passed to the service as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryWindow {
    minutes: u32,
}

impl HistoryWindow {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub const fn minutes(self) -> u32 {
        self.minutes
    }

    /// Whether this window is one of the selector entries.
    pub fn is_menu_entry(self) -> bool {
        STOCK_API.window_menu.contains(&self)
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        STOCK_API.default_window
    }
}

impl fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.minutes)
    }
}
