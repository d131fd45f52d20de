//! Runtime state of the carousel component.
//!
//! All navigation rules live in `common::carousel::CarouselController`; this
//! struct only adds what the browser needs on top of it: the pending wake-up,
//! the window key listener, the viewport observer and the touch tracker.

use common::carousel::{CarouselConfig, CarouselController, SwipeTracker};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::NodeRef;

use super::helpers::{now, VisibilityObserver};
use super::props::TestimonialsProps;

pub struct TestimonialsCarousel {
    pub carousel: CarouselController,

    pub swipe: SwipeTracker,

    /// The single pending wake-up. Replacing or dropping it cancels it.
    pub timer: Option<Timeout>,

    /// Deadline `timer` was armed for, so unchanged deadlines are not re-armed.
    pub timer_deadline: Option<u64>,

    /// Window `keydown` handler, removed again in `destroy`.
    pub key_listener: Option<Closure<dyn Fn(KeyboardEvent)>>,

    /// Viewport watcher gating auto-advance, disconnected in `destroy`.
    pub visibility: Option<VisibilityObserver>,

    /// Outermost element, observed for visibility.
    pub root: NodeRef,

    /// Guard to run first-render initialization once.
    pub loaded: bool,
}

impl TestimonialsCarousel {
    pub fn new(props: &TestimonialsProps) -> Self {
        let config = CarouselConfig {
            auto_advance_interval_ms: props.interval_ms,
            pause_on_hover: props.pause_on_hover,
            transition_lock_ms: props.transition_lock_ms,
            ..CarouselConfig::default()
        };
        let swipe = SwipeTracker::new(config.swipe_threshold_px);
        Self {
            carousel: CarouselController::new(Vec::new(), config, now()),
            swipe,
            timer: None,
            timer_deadline: None,
            key_listener: None,
            visibility: None,
            root: NodeRef::default(),
            loaded: false,
        }
    }
}
