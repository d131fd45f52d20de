//! Carousel state machine and its input adapters.
//!
//! - `controller`: owns the current index, the transition lock and the
//!   auto-advance countdown. Time is passed in explicitly; the controller only
//!   records deadlines and the host schedules a single wake-up for
//!   [`CarouselController::next_deadline`].
//! - `swipe`: turns touch start/move/end coordinates into navigation.
//! - `keyboard`: maps arrow keys to navigation.

mod controller;
mod keyboard;
mod swipe;

pub use controller::{CarouselController, CarouselState};
pub use keyboard::navigation_for_key;
pub use swipe::SwipeTracker;

/// Milliseconds from an arbitrary monotonic origin chosen by the host.
pub type Millis = u64;

/// A navigation request from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub auto_advance_interval_ms: Millis,
    /// When false, `pause` and `resume` do nothing.
    pub pause_on_hover: bool,
    /// How long navigation stays locked after an index change.
    pub transition_lock_ms: Millis,
    /// Number of upcoming reviews shown next to the active one.
    pub preview_count: usize,
    /// Horizontal drag distance a swipe has to exceed.
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_interval_ms: 6000,
            pause_on_hover: true,
            transition_lock_ms: 280,
            preview_count: 2,
            swipe_threshold_px: 50.0,
        }
    }
}
