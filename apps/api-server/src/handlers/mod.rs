//! HTTP handlers and route configuration.

mod posts;

use actix_web::{HttpResponse, error::JsonPayloadError, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(welcome))
        .service(
            web::scope("/api/posts")
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::create_post))
                .route("/{id}", web::put().to(posts::update_post))
                .route("/{id}", web::delete().to(posts::delete_post))
                .route("/{id}/like", web::post().to(posts::like_post)),
        );
}

/// GET /
async fn welcome() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to DevConnect API!")
}

/// Malformed JSON bodies answer with the same `{message}` shape as every other error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest(err.to_string()).into()
    })
}
