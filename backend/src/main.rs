mod config;
mod services;
mod sources;
mod store;

use crate::config::Config;
use crate::store::TestimonialStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::io;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend build. Unknown paths get `index.html`.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let store = TestimonialStore::new(&config.database_path);
    store
        .init()
        .map_err(|e| io::Error::other(format!("Cannot open {}: {}", store.path().display(), e)))?;

    let provider = web::Data::from(sources::build_provider(&config));
    let bind = (config.host.clone(), config.port);
    info!(
        "Server running at http://{}:{} (feed source: {})",
        bind.0,
        bind.1,
        provider.name()
    );

    let store = web::Data::new(store);
    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(provider.clone())
            .app_data(store.clone())
            .app_data(config.clone())
            .service(services::testimonials::configure_routes())
            .service(services::reviews::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
