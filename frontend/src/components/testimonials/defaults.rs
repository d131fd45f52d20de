//! Reviews shown when neither the parent nor the feed provides any.

use common::model::review::Review;
use gloo_console::error;

static DEFAULT_REVIEWS: &str = include_str!("../../../../data/reviews.json");

pub fn default_reviews() -> Vec<Review> {
    serde_json::from_str(DEFAULT_REVIEWS).unwrap_or_else(|e| {
        error!(format!("Bundled reviews are malformed: {}", e));
        Vec::new()
    })
}
