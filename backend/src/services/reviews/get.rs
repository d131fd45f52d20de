use super::error_response;
use crate::store::TestimonialStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::response::ApiResponse;

pub(crate) async fn process(
    store: web::Data<TestimonialStore>,
    id: web::Path<String>,
) -> impl Responder {
    match store.get_by_id(&id) {
        Ok(review) => HttpResponse::Ok().json(ApiResponse::ok(review)),
        Err(e) => error_response(e),
    }
}
