//! Public testimonial feed consumed by the carousel.
//!
//! The feed is produced by whichever `ReviewProvider` the server was started
//! with (live Google reviews with mock fallback, or mock reviews alone). Every
//! response, including errors, carries the same CORS and caching headers so the
//! widget can be embedded on any origin and served from a CDN.
//!
//! The provided routes are:
//! - `GET /api/testimonials`: the canonical review list as a JSON array. A
//!   provider failure becomes `500` with `{ "error", "message" }`.
//!
//! - `OPTIONS /api/testimonials`: CORS preflight, `200` with an empty body.
//!
//! Any other method answers `405` with `{ "error": "Method not allowed" }`.

use crate::config::Config;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CACHE_CONTROL,
};
use actix_web::http::Method;
use actix_web::web::{self, scope};
use actix_web::{HttpResponse, HttpResponseBuilder, Responder, Scope};
use serde_json::json;

mod list;
mod preflight;

const API_PATH: &str = "/api/testimonials";

/// Configures and returns the Actix scope for the testimonial feed.
pub fn configure_routes() -> Scope {
    scope(API_PATH).service(
        web::resource("")
            .route(web::get().to(list::process))
            .route(web::method(Method::OPTIONS).to(preflight::process))
            .default_service(web::to(method_not_allowed)),
    )
}

/// Adds the CORS and cache headers shared by every feed response.
pub(crate) fn with_feed_headers(
    mut builder: HttpResponseBuilder,
    config: &Config,
) -> HttpResponseBuilder {
    builder
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .insert_header((ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
        .insert_header((CACHE_CONTROL, config.cache_control()));
    builder
}

async fn method_not_allowed(config: web::Data<Config>) -> impl Responder {
    with_feed_headers(HttpResponse::MethodNotAllowed(), &config)
        .json(json!({ "error": "Method not allowed" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::tests::{review, FailingProvider, StaticProvider};
    use crate::sources::ReviewProvider;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::review::Review;
    use std::sync::Arc;

    fn config() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    fn provider_data(provider: impl ReviewProvider + 'static) -> web::Data<dyn ReviewProvider> {
        let provider: Arc<dyn ReviewProvider> = Arc::new(provider);
        web::Data::from(provider)
    }

    #[actix_web::test]
    async fn get_returns_reviews_with_feed_headers() {
        let app = test::init_service(
            App::new()
                .app_data(provider_data(StaticProvider(vec![review("a"), review("b")])))
                .app_data(web::Data::new(config()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/testimonials").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "GET, OPTIONS");
        assert_eq!(
            headers.get(CACHE_CONTROL).unwrap(),
            "s-maxage=300, stale-while-revalidate=86400"
        );

        let body: Vec<Review> = test::read_body_json(resp).await;
        let ids: Vec<&str> = body.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[actix_web::test]
    async fn provider_failure_is_500_with_message() {
        let app = test::init_service(
            App::new()
                .app_data(provider_data(FailingProvider))
                .app_data(web::Data::new(config()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/testimonials").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to fetch testimonials");
        assert!(body["message"].as_str().unwrap().contains("GOOGLE_ACCESS_TOKEN"));
    }

    #[actix_web::test]
    async fn preflight_and_other_methods() {
        let app = test::init_service(
            App::new()
                .app_data(provider_data(StaticProvider(Vec::new())))
                .app_data(web::Data::new(config()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/testimonials")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "Content-Type");
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::post().uri("/api/testimonials").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Method not allowed");
    }
}
