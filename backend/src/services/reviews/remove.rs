use super::error_response;
use crate::store::TestimonialStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::response::ApiResponse;
use log::info;

pub(crate) async fn process(
    store: web::Data<TestimonialStore>,
    id: web::Path<String>,
) -> impl Responder {
    let id = id.into_inner();
    match store.delete(&id) {
        Ok(()) => {
            info!("Deleted testimonial {}", id);
            HttpResponse::Ok().json(ApiResponse::ok(id).with_message("Testimonial deleted"))
        }
        Err(e) => error_response(e),
    }
}
