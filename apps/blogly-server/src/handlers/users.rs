//! User pages.

use actix_web::{HttpRequest, HttpResponse, web};
use blogly_shared::UserForm;
use tera::Context;

use super::back_to_form;
use crate::flash::{self, FlashMessage};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users
pub async fn list_users(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;

    let mut ctx = Context::new();
    ctx.insert("users", &users);
    state.views.render(&req, "users/list.html", ctx)
}

/// GET /users/new
pub async fn new_user_form(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    state.views.render(&req, "users/new.html", Context::new())
}

/// POST /users/new
pub async fn create_user(
    state: web::Data<AppState>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let user = match state.users.create(form.into_inner().into()).await {
        Ok(user) => user,
        Err(e) => return back_to_form("/users/new", e),
    };

    Ok(flash::redirect_with(
        "/users",
        FlashMessage::success(format!("Added {}.", user.full_name())),
    ))
}

/// GET /users/{id}
pub async fn show_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let detail = state.users.detail(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &detail.user);
    ctx.insert("posts", &detail.posts);
    state.views.render(&req, "users/show.html", ctx)
}

/// GET /users/{id}/edit
pub async fn edit_user_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.users.get(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &user);
    state.views.render(&req, "users/edit.html", ctx)
}

/// POST /users/{id}/edit
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = match state.users.update(id, form.into_inner().into()).await {
        Ok(user) => user,
        Err(e) => return back_to_form(&format!("/users/{id}/edit"), e),
    };

    Ok(flash::redirect_with(
        "/users",
        FlashMessage::success(format!("Updated {}.", user.full_name())),
    ))
}

/// POST /users/{id}/delete
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.users.delete(path.into_inner()).await?;

    Ok(flash::redirect_with(
        "/users",
        FlashMessage::success(format!("Deleted {}.", user.full_name())),
    ))
}
