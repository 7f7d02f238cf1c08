use super::post_controller::{create_post, edit_post, get_post, list_posts};
use crate::middleware::auth::verify_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/post")
            .wrap(HttpAuthentication::bearer(verify_token))
            .route("", web::post().to(create_post))
            .route("/", web::post().to(create_post))
            .route("", web::get().to(list_posts))
            .route("/", web::get().to(list_posts))
            .route("/{id}", web::get().to(get_post))
            .route("/{id}", web::put().to(edit_post))
            .route("/{id}", web::patch().to(edit_post)),
    );
}
