//! Testimonial carousel: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `TestimonialsProps`, `TestimonialsCarousel`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, install the keyboard listener and the viewport observer,
//!   then load the reviews: the ones passed in as props, else the feed
//!   endpoint, else the bundled defaults.
//! - When the parent passes a different non-empty `reviews` list, swap it in
//!   through `replace_reviews` (back to the first review).
//! - On destroy, dispose the controller, drop the pending timer and remove the
//!   key listener and the viewport observer so nothing fires into a torn-down
//!   component.

use yew::platform::spawn_local;
use yew::prelude::*;

mod defaults;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::{
    fetch_reviews, install_key_listener, now, observe_visibility, remove_key_listener,
    replacement_reviews, reschedule,
};
pub use messages::Msg;
pub use props::TestimonialsProps;
pub use state::TestimonialsCarousel;

impl Component for TestimonialsCarousel {
    type Message = Msg;
    type Properties = TestimonialsProps;

    fn create(ctx: &Context<Self>) -> Self {
        TestimonialsCarousel::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if let Some(reviews) = replacement_reviews(&ctx.props().reviews, &old_props.reviews) {
            self.carousel.replace_reviews(reviews, now());
            reschedule(self, ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.key_listener = install_key_listener(ctx.link());
            self.visibility = self
                .root
                .cast::<web_sys::Element>()
                .and_then(|root| observe_visibility(&root, ctx.link()));

            let supplied = ctx.props().reviews.clone().unwrap_or_default();
            if !supplied.is_empty() {
                ctx.link().send_message(Msg::Loaded(supplied));
                return;
            }

            let link = ctx.link().clone();
            let endpoint = ctx.props().endpoint.clone();
            spawn_local(async move {
                match fetch_reviews(&endpoint).await {
                    Ok(reviews) => link.send_message(Msg::Loaded(reviews)),
                    Err(reason) => link.send_message(Msg::LoadFailed(reason)),
                }
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.carousel.dispose();
        self.timer = None;
        self.timer_deadline = None;
        if let Some(listener) = self.key_listener.take() {
            remove_key_listener(&listener);
        }
        if let Some(observer) = self.visibility.take() {
            observer.disconnect();
        }
    }
}
