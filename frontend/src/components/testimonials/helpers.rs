//! Browser glue for the carousel component.
//!
//! - **Clock**: `now` reads `performance.now()`, which never jumps when the
//!   wall clock is adjusted; the controller only ever sees these values.
//! - **Wake-ups**: `reschedule` keeps exactly one `Timeout` pending, armed for
//!   the controller's next deadline.
//! - **Keyboard**: `install_key_listener` / `remove_key_listener` manage the
//!   window `keydown` handler for the arrow keys.
//! - **Visibility**: `observe_visibility` reports whether at least half of the
//!   carousel is on screen.
//! - **Loading**: `fetch_reviews` reads the feed endpoint.

use common::carousel::{navigation_for_key, Millis};
use common::model::review::Review;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent,
};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::TestimonialsCarousel;

/// Share of the carousel that must be on screen for auto-advance to run.
const VISIBLE_RATIO: f64 = 0.5;

pub fn now() -> Millis {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0, |performance| performance.now() as Millis)
}

/// Arms the wake-up for the controller's next deadline, replacing any pending
/// one. Does nothing if the deadline did not move.
pub fn reschedule(component: &mut TestimonialsCarousel, ctx: &Context<TestimonialsCarousel>) {
    let deadline = component.carousel.next_deadline();
    if deadline == component.timer_deadline {
        return;
    }

    component.timer_deadline = deadline;
    component.timer = deadline.map(|at| {
        let delay = at.saturating_sub(now()).min(u32::MAX as Millis) as u32;
        let link = ctx.link().clone();
        Timeout::new(delay, move || link.send_message(Msg::Tick))
    });
}

/// Registers a window `keydown` handler that forwards arrow keys.
pub fn install_key_listener(
    link: &Scope<TestimonialsCarousel>,
) -> Option<Closure<dyn Fn(KeyboardEvent)>> {
    let window = web_sys::window()?;
    let link = link.clone();
    let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key = event.key();
        if navigation_for_key(&key).is_some() {
            event.prevent_default();
            link.send_message(Msg::Key(key));
        }
    });
    window
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}

pub fn remove_key_listener(listener: &Closure<dyn Fn(KeyboardEvent)>) {
    if let Some(window) = web_sys::window() {
        window
            .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .ok();
    }
}

/// A live `IntersectionObserver` and the callback it calls into. Call
/// `disconnect` before dropping it.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn Fn(js_sys::Array)>,
}

impl VisibilityObserver {
    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Watches `element` and sends `Msg::VisibilityChanged` whenever it crosses
/// the visible-ratio threshold. The first report arrives right after
/// observation starts.
pub fn observe_visibility(
    element: &Element,
    link: &Scope<TestimonialsCarousel>,
) -> Option<VisibilityObserver> {
    let link = link.clone();
    let callback = Closure::<dyn Fn(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let latest = entries
            .iter()
            .last()
            .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>());
        if let Some(entry) = latest {
            let visible = entry.is_intersecting() && entry.intersection_ratio() >= VISIBLE_RATIO;
            link.send_message(Msg::VisibilityChanged(visible));
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_RATIO));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some(VisibilityObserver {
        observer,
        _callback: callback,
    })
}

/// Loads the feed. Non-2xx statuses and malformed bodies are errors; an empty
/// list is returned as is.
pub async fn fetch_reviews(endpoint: &str) -> Result<Vec<Review>, String> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("{} returned {}", endpoint, response.status()));
    }
    response
        .json::<Vec<Review>>()
        .await
        .map_err(|e| e.to_string())
}

/// List to swap in after a props change: the new `reviews` prop when it
/// differs from the old one and is not empty.
pub fn replacement_reviews(
    new: &Option<Vec<Review>>,
    old: &Option<Vec<Review>>,
) -> Option<Vec<Review>> {
    if new == old {
        return None;
    }
    new.clone().filter(|reviews| !reviews.is_empty())
}

/// Filled state of the five stars for `rating`.
pub fn star_flags(rating: u8) -> [bool; 5] {
    std::array::from_fn(|i| i < rating as usize)
}

/// Inline style for the progress bar: one CSS animation over `interval_ms`,
/// started `progress` of the way in.
pub fn progress_bar_style(interval_ms: Millis, progress: f64) -> String {
    let elapsed = (progress.clamp(0.0, 1.0) * interval_ms as f64).round() as Millis;
    format!(
        "animation: testimonials-progress {}ms linear -{}ms forwards;",
        interval_ms, elapsed
    )
}

/// "3 / 7" style position counter.
pub fn position_label(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str) -> Review {
        serde_json::from_value(serde_json::json!({
            "id": id, "name": "Ana P.", "content": "Top", "rating": 5
        }))
        .unwrap()
    }

    #[test]
    fn changed_reviews_prop_is_swapped_in() {
        let old = Some(vec![review("a")]);
        let new = Some(vec![review("b"), review("c")]);
        assert_eq!(replacement_reviews(&new, &old), new);
        assert_eq!(replacement_reviews(&new, &None), new);
    }

    #[test]
    fn unchanged_or_empty_reviews_prop_keeps_current_list() {
        let same = Some(vec![review("a")]);
        assert_eq!(replacement_reviews(&same, &same.clone()), None);
        assert_eq!(replacement_reviews(&Some(Vec::new()), &same), None);
        assert_eq!(replacement_reviews(&None, &same), None);
    }

    #[test]
    fn stars_follow_rating() {
        assert_eq!(star_flags(3), [true, true, true, false, false]);
        assert_eq!(star_flags(5), [true; 5]);
        assert_eq!(star_flags(0), [false; 5]);
    }

    #[test]
    fn progress_bar_resumes_mid_countdown() {
        assert_eq!(
            progress_bar_style(6000, 0.0),
            "animation: testimonials-progress 6000ms linear -0ms forwards;"
        );
        assert_eq!(
            progress_bar_style(6000, 0.25),
            "animation: testimonials-progress 6000ms linear -1500ms forwards;"
        );
        assert_eq!(
            progress_bar_style(6000, 3.0),
            "animation: testimonials-progress 6000ms linear -6000ms forwards;"
        );
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(position_label(0, 4), "1 / 4");
        assert_eq!(position_label(3, 4), "4 / 4");
    }
}
