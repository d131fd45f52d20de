use super::with_feed_headers;
use crate::config::Config;
use actix_web::{web, HttpResponse, Responder};

/// CORS preflight for the feed: headers only, empty body.
pub(crate) async fn process(config: web::Data<Config>) -> impl Responder {
    with_feed_headers(HttpResponse::Ok(), &config).finish()
}
