//! Administrative CRUD over the stored testimonials.
//!
//! Every response is wrapped in `common::model::response::ApiResponse`, so the
//! client can always read `success` first and then either `data` or `error`.
//!
//! The provided routes are:
//! - `GET /api/reviews`: lists stored reviews, newest first. Accepts the
//!   optional query parameters `minRating` and `source`.
//! - `GET /api/reviews/{id}`: a single review.
//! - `POST /api/reviews`: creates a review. A missing id or `createdAt` is
//!   generated by the store. Answers `201 Created`.
//! - `PUT /api/reviews/{id}`: partial update with any subset of fields.
//! - `DELETE /api/reviews/{id}`: removes a review and echoes its id.
//!
//! Store errors map to `409` (duplicate id), `404` (unknown id), `400` (empty
//! or invalid input) and `503` (database failure, details only in the log).

use crate::store::StoreError;
use actix_web::web::{delete, get, post, put, scope};
use actix_web::{HttpResponse, Scope};
use common::model::response::ApiResponse;
use log::error;

mod create;
mod get;
mod list;
mod remove;
mod update;

const API_PATH: &str = "/api/reviews";

/// Configures and returns the Actix scope for review management routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(remove::process))
}

/// Translates a store failure into its status code and error envelope.
pub(crate) fn error_response(e: StoreError) -> HttpResponse {
    let mut builder = match &e {
        StoreError::AlreadyExists => HttpResponse::Conflict(),
        StoreError::NotFound => HttpResponse::NotFound(),
        StoreError::NoUpdates | StoreError::Invalid(_) => HttpResponse::BadRequest(),
        StoreError::Database(db) => {
            error!("Review store failure: {}", db);
            return HttpResponse::ServiceUnavailable()
                .json(ApiResponse::<()>::failure("Testimonial storage is unavailable"));
        }
    };
    builder.json(ApiResponse::<()>::failure(e.to_string()))
}
