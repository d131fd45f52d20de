use super::error_response;
use crate::store::TestimonialStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::response::ApiResponse;
use common::model::review::ReviewUpdate;

/// Actix web handler for `PUT /api/reviews/{id}`. Only the fields present in
/// the body are changed; an empty body is rejected.
pub(crate) async fn process(
    store: web::Data<TestimonialStore>,
    id: web::Path<String>,
    update: web::Json<ReviewUpdate>,
) -> impl Responder {
    match store.update(&id, &update) {
        Ok(review) => HttpResponse::Ok().json(ApiResponse::ok(review).with_message("Testimonial updated")),
        Err(e) => error_response(e),
    }
}
