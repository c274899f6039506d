use std::time::Duration;

use log::Level;

/// Share of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const QUOTE_INTERVAL: Duration = Duration::from_secs(7);

/// Scroll distance in px after which the header gets its solid background.
pub const HEADER_SCROLL_OFFSET: f64 = 50.0;

pub const FONT_STYLESHEETS: [&str; 2] = [
    "https://fonts.googleapis.com/css2?family=Marvel:wght@400;700&display=swap",
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;700;800&display=swap",
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
