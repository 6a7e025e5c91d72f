//! HTTP handlers and route configuration.

mod blog;
mod health;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(blog::index))
        .route("/health", web::get().to(health::health_check))
        .route("/new-post", web::get().to(blog::new_form))
        .route("/new-post", web::post().to(blog::create))
        .route("/blog/delete/{id}", web::get().to(blog::delete))
        .route("/blog/edit/{id}", web::get().to(blog::edit_form))
        .route("/blog/edit/{id}", web::post().to(blog::edit))
        .route("/blog/{id}", web::get().to(blog::detail));
}
