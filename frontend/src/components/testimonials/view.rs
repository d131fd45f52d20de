//! View rendering for the carousel component.
//!
//! Layout: the active review as a large card, the next `preview_count` reviews
//! as compact clickable cards, then the controls (dots, progress bar, position
//! counter and a visually hidden pause button for assistive technology).
//! The progress bar is a CSS animation keyed on the countdown start, so it
//! restarts whenever the controller re-arms auto-advance, and offset by the
//! controller's `progress` so it never lags the real countdown.

use common::mapper::avatar_url;
use common::model::review::Review;
use common::text::truncate_text;
use web_sys::TouchEvent;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{now, position_label, progress_bar_style, star_flags};
use super::messages::Msg;
use super::state::TestimonialsCarousel;

const PREVIEW_LINES: usize = 3;

pub fn view(component: &TestimonialsCarousel, ctx: &Context<TestimonialsCarousel>) -> Html {
    // The root stays mounted in every state so the viewport observer can
    // attach on first render.
    html! {
        <div class="testimonials-root" ref={component.root.clone()}>
            { build_body(component, ctx) }
        </div>
    }
}

fn build_body(component: &TestimonialsCarousel, ctx: &Context<TestimonialsCarousel>) -> Html {
    let link = ctx.link();
    let carousel = &component.carousel;

    let Some(active) = carousel.active() else {
        return html! {
            <div class="testimonials-empty">{ "No testimonials available" }</div>
        };
    };

    html! {
        <section class="testimonials">
            <header class="testimonials-header">
                <span class="testimonials-eyebrow">{ "Client Stories" }</span>
                <h2>{ "What Our Clients Say" }</h2>
            </header>
            <div
                class="testimonials-carousel"
                onmouseenter={link.callback(|_| Msg::Pause)}
                onmouseleave={link.callback(|_| Msg::Resume)}
                ontouchstart={link.batch_callback(|e: TouchEvent| first_touch_x(&e).map(Msg::TouchStart))}
                ontouchmove={link.batch_callback(|e: TouchEvent| first_touch_x(&e).map(Msg::TouchMove))}
                ontouchend={link.callback(|_| Msg::TouchEnd)}
            >
                <div class="testimonials-stage">
                    <div class="testimonials-active" key={active.id.clone()}>
                        { review_card(active, false) }
                    </div>
                    <div class="testimonials-previews">
                        { build_previews(component, link) }
                    </div>
                </div>
                { build_controls(component, link) }
            </div>
            { build_call_to_action(ctx) }
        </section>
    }
}

fn build_previews(component: &TestimonialsCarousel, link: &Scope<TestimonialsCarousel>) -> Html {
    let carousel = &component.carousel;
    let count = carousel.config().preview_count;
    let reviews = carousel.reviews();

    carousel
        .preview_positions(count)
        .into_iter()
        .map(|position| {
            let review = &reviews[position];
            html! {
                <button
                    key={format!("{}-preview", review.id)}
                    class="testimonials-preview"
                    onclick={link.callback(move |_| Msg::GoTo(position))}
                >
                    { review_card(review, true) }
                </button>
            }
        })
        .collect()
}

fn build_controls(component: &TestimonialsCarousel, link: &Scope<TestimonialsCarousel>) -> Html {
    let carousel = &component.carousel;
    let total = carousel.len();
    let current = carousel.current_index();
    let paused = carousel.is_paused();

    let dots = (0..total).map(|index| {
        html! {
            <button
                class={classes!("testimonials-dot", (index == current).then_some("active"))}
                aria-label={format!("Go to testimonial {}", index + 1)}
                onclick={link.callback(move |_| Msg::GoTo(index))}
            />
        }
    });

    let progress = match carousel.countdown_started_at() {
        Some(started) => {
            let style = progress_bar_style(
                carousel.config().auto_advance_interval_ms,
                carousel.progress(now()),
            );
            html! {
                <div key={started.to_string()} class="testimonials-progress-bar" {style} />
            }
        }
        None => html! {},
    };

    html! {
        <div class="testimonials-controls">
            <nav class="testimonials-dots">
                { for dots }
            </nav>
            <div class="testimonials-progress">{ progress }</div>
            <span class="testimonials-counter">{ position_label(current, total) }</span>
            <div class="sr-only">
                <button
                    onclick={link.callback(|_| Msg::TogglePause)}
                    aria-label={if paused { "Resume auto-scroll" } else { "Pause auto-scroll" }}
                >
                    { if paused { "Resume" } else { "Pause" } }
                </button>
            </div>
        </div>
    }
}

fn build_call_to_action(ctx: &Context<TestimonialsCarousel>) -> Html {
    match &ctx.props().review_url {
        Some(url) => html! {
            <div class="testimonials-cta">
                <h3>{ "Love Our Work?" }</h3>
                <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                    { "Leave us a Review" }
                </a>
            </div>
        },
        None => html! {},
    }
}

/// One review card. Previews are compact: truncated text, no badge and no
/// location.
fn review_card(review: &Review, preview: bool) -> Html {
    let image = review
        .image
        .clone()
        .unwrap_or_else(|| avatar_url(&review.name));
    let content = if preview {
        truncate_text(&review.content, PREVIEW_LINES)
    } else {
        review.content.clone()
    };

    let badge = match (preview, review.is_google()) {
        (true, _) => html! {},
        (false, true) => html! { <span class="testimonial-badge">{ "Google" }</span> },
        (false, false) => html! { <span class="testimonial-quote" aria-hidden="true">{ "\u{201C}" }</span> },
    };

    let stars = star_flags(review.rating).into_iter().map(|filled| {
        html! {
            <span class={classes!("testimonial-star", filled.then_some("filled"))} aria-hidden="true">
                { "\u{2605}" }
            </span>
        }
    });

    html! {
        <article class={classes!("testimonial-card", preview.then_some("preview"))}>
            { badge }
            <div class="testimonial-stars" aria-label={format!("{} out of 5 stars", review.rating)}>
                { for stars }
            </div>
            <blockquote class="testimonial-content">{ content }</blockquote>
            <footer class="testimonial-author">
                <div
                    class="testimonial-avatar"
                    role="img"
                    aria-label={review.name.clone()}
                    style={format!("background-image: url('{}')", image)}
                />
                <div class="testimonial-meta">
                    <div class="testimonial-name">{ &review.name }</div>
                    if let Some(role) = &review.role {
                        <div class="testimonial-role">{ role }</div>
                    }
                    if let Some(project) = &review.project {
                        <span class="testimonial-project">{ project }</span>
                    }
                    if !preview {
                        if let Some(location) = &review.location {
                            <div class="testimonial-location">{ location }</div>
                        }
                    }
                </div>
            </footer>
        </article>
    }
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| touch.client_x() as f64)
}
