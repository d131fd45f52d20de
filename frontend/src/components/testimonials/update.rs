//! Update function for the carousel component.
//!
//! Every input (timer, keyboard, touch, pointer, clicks, visibility, loading) is turned
//! into a controller call with the current time. After the message is handled
//! the pending wake-up is moved to the controller's new next deadline.

use common::carousel::{navigation_for_key, Navigation};
use gloo_console::{log, warn};
use yew::prelude::*;

use super::defaults::default_reviews;
use super::helpers::{now, reschedule};
use super::messages::Msg;
use super::state::TestimonialsCarousel;

pub fn update(
    component: &mut TestimonialsCarousel,
    ctx: &Context<TestimonialsCarousel>,
    msg: Msg,
) -> bool {
    let now = now();
    let carousel = &mut component.carousel;

    let render = match msg {
        Msg::Loaded(reviews) if !reviews.is_empty() => {
            log!(format!("Loaded {} testimonials", reviews.len()));
            carousel.replace_reviews(reviews, now);
            true
        }
        Msg::Loaded(_) => {
            carousel.replace_reviews(default_reviews(), now);
            true
        }
        Msg::LoadFailed(reason) => {
            warn!(format!("Falling back to bundled testimonials: {}", reason));
            carousel.replace_reviews(default_reviews(), now);
            true
        }
        Msg::Next => carousel.navigate(Navigation::Next, now),
        Msg::Previous => carousel.navigate(Navigation::Previous, now),
        Msg::GoTo(index) => carousel.navigate(Navigation::GoTo(index), now),
        Msg::Key(key) => match navigation_for_key(&key) {
            Some(navigation) => carousel.navigate(navigation, now),
            None => false,
        },
        Msg::Tick => {
            // The timer that sent this has fired.
            component.timer = None;
            component.timer_deadline = None;
            carousel.tick(now);
            true
        }
        Msg::Pause => carousel.pause(),
        Msg::Resume => carousel.resume(now),
        Msg::TogglePause => carousel.toggle_pause(now),
        Msg::VisibilityChanged(visible) => carousel.set_visible(visible, now),
        Msg::TouchStart(x) => {
            component.swipe.start(x);
            false
        }
        Msg::TouchMove(x) => {
            component.swipe.move_to(x);
            false
        }
        Msg::TouchEnd => match component.swipe.finish() {
            Some(navigation) => carousel.navigate(navigation, now),
            None => false,
        },
    };

    reschedule(component, ctx);
    render
}
