use std::time::Duration;

pub mod app;
pub mod result;
pub mod theme;
pub mod wheel;

/// Pause between the final frame and the result overlay, and between
/// dismissing the overlay and a "spin again".
pub const RESULT_DELAY: Duration = Duration::from_millis(100);
