//! Properties of the `TestimonialsCarousel`.

use common::model::review::Review;
use yew::prelude::*;

/// Properties for the `TestimonialsCarousel`.
///
/// Reviews can be handed in directly by the parent; otherwise they are fetched
/// from `endpoint` on first render. The timing props are read once, when the
/// component is created.
#[derive(Properties, PartialEq, Clone)]
pub struct TestimonialsProps {
    /// Reviews supplied by the parent. `None` or an empty list means "fetch".
    #[prop_or_default]
    pub reviews: Option<Vec<Review>>,

    /// Feed URL returning a JSON array of reviews.
    #[prop_or(AttrValue::Static("/api/testimonials"))]
    pub endpoint: AttrValue,

    /// Auto-advance period in milliseconds. `0` disables auto-advance.
    #[prop_or(6000)]
    pub interval_ms: u64,

    #[prop_or(true)]
    pub pause_on_hover: bool,

    /// Navigation lock after each slide change, in milliseconds.
    #[prop_or(280)]
    pub transition_lock_ms: u64,

    /// Target of the "Leave us a review" link. Hidden when `None`.
    #[prop_or_default]
    pub review_url: Option<AttrValue>,
}
