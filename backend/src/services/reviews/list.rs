use super::error_response;
use crate::store::TestimonialStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::response::ApiResponse;
use common::model::review::ReviewFilter;

/// Actix web handler for `GET /api/reviews?minRating=&source=`.
pub(crate) async fn process(
    store: web::Data<TestimonialStore>,
    filter: web::Query<ReviewFilter>,
) -> impl Responder {
    match store.get_all(&filter) {
        Ok(reviews) => HttpResponse::Ok().json(ApiResponse::ok_list(reviews)),
        Err(e) => error_response(e),
    }
}
