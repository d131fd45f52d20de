use super::with_feed_headers;
use crate::config::Config;
use crate::sources::ReviewProvider;
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;

/// Actix web handler for `GET /api/testimonials`.
///
/// # Returns
/// - `200 OK` with the canonical reviews as a JSON array.
/// - `500 Internal Server Error` with `{ error, message }` if the provider fails.
pub(crate) async fn process(
    provider: web::Data<dyn ReviewProvider>,
    config: web::Data<Config>,
) -> impl Responder {
    match provider.fetch_reviews().await {
        Ok(reviews) => {
            info!("Serving {} testimonials from {}", reviews.len(), provider.name());
            with_feed_headers(HttpResponse::Ok(), &config).json(reviews)
        }
        Err(e) => {
            error!("Failed to fetch testimonials from {}: {}", provider.name(), e);
            with_feed_headers(HttpResponse::InternalServerError(), &config).json(json!({
                "error": "Failed to fetch testimonials",
                "message": e.to_string(),
            }))
        }
    }
}
