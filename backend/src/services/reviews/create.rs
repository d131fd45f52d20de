use super::error_response;
use crate::store::TestimonialStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::response::ApiResponse;
use common::model::review::Review;
use log::info;

/// Actix web handler for `POST /api/reviews`.
///
/// # Returns
/// - `201 Created` with the review as stored, including a generated id if none was sent.
/// - `409 Conflict` if the id is already taken; the existing review is left untouched.
/// - `400 Bad Request` for an empty name or a rating outside `1..=5`.
pub(crate) async fn process(
    store: web::Data<TestimonialStore>,
    review: web::Json<Review>,
) -> impl Responder {
    match store.create(&review) {
        Ok(created) => {
            info!("Created testimonial {}", created.id);
            HttpResponse::Created().json(ApiResponse::ok(created).with_message("Testimonial created"))
        }
        Err(e) => error_response(e),
    }
}
