//! HTTP handlers and route configuration.

mod health;
mod posts;
mod tags;
mod users;

use actix_web::{HttpResponse, web};
use blogly_core::DomainError;

use crate::flash::{self, FlashMessage};
use crate::middleware::error::AppResult;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list_users))
                .service(
                    web::resource("/new")
                        .route(web::get().to(users::new_user_form))
                        .route(web::post().to(users::create_user)),
                )
                .route("/{id}", web::get().to(users::show_user))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(users::edit_user_form))
                        .route(web::post().to(users::update_user)),
                )
                .route("/{id}/delete", web::post().to(users::delete_user))
                .service(
                    web::resource("/{id}/posts/new")
                        .route(web::get().to(posts::new_post_form))
                        .route(web::post().to(posts::create_post)),
                ),
        )
        .service(
            web::scope("/posts")
                .route("/{id}", web::get().to(posts::show_post))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(posts::edit_post_form))
                        .route(web::post().to(posts::update_post)),
                )
                .route("/{id}/delete", web::post().to(posts::delete_post)),
        )
        .service(
            web::scope("/tags")
                .route("", web::get().to(tags::list_tags))
                .service(
                    web::resource("/new")
                        .route(web::get().to(tags::new_tag_form))
                        .route(web::post().to(tags::create_tag)),
                )
                .route("/{id}", web::get().to(tags::show_tag))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(tags::edit_tag_form))
                        .route(web::post().to(tags::update_tag)),
                )
                .route("/{id}/delete", web::post().to(tags::delete_tag)),
        );
}

/// GET / - the user listing is the home page.
async fn root() -> HttpResponse {
    flash::redirect("/users")
}

/// Send a rejected submission back to its form with the reason; any other
/// failure propagates as an error response.
fn back_to_form(form: &str, err: DomainError) -> AppResult<HttpResponse> {
    match err {
        DomainError::Validation(msg) => {
            tracing::debug!(form, reason = %msg, "Form rejected");
            Ok(flash::redirect_with(form, FlashMessage::error(msg)))
        }
        other => Err(other.into()),
    }
}

#[cfg(test)]
mod tests;
