//! Tag pages.

use actix_web::{HttpRequest, HttpResponse, web};
use blogly_shared::TagForm;
use tera::Context;

use super::back_to_form;
use crate::flash::{self, FlashMessage};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /tags
pub async fn list_tags(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let tags = state.tags.list().await?;

    let mut ctx = Context::new();
    ctx.insert("tags", &tags);
    state.views.render(&req, "tags/list.html", ctx)
}

/// GET /tags/new
pub async fn new_tag_form(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    state.views.render(&req, "tags/new.html", Context::new())
}

/// POST /tags/new
pub async fn create_tag(
    state: web::Data<AppState>,
    form: web::Form<TagForm>,
) -> AppResult<HttpResponse> {
    let tag = match state.tags.create(form.into_inner().into()).await {
        Ok(tag) => tag,
        Err(e) => return back_to_form("/tags/new", e),
    };

    Ok(flash::redirect_with(
        "/tags",
        FlashMessage::success(format!("Added tag \"{}\".", tag.name)),
    ))
}

/// GET /tags/{id}
pub async fn show_tag(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let detail = state.tags.detail(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("tag", &detail.tag);
    ctx.insert("posts", &detail.posts);
    state.views.render(&req, "tags/show.html", ctx)
}

/// GET /tags/{id}/edit
pub async fn edit_tag_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = state.tags.get(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("tag", &tag);
    state.views.render(&req, "tags/edit.html", ctx)
}

/// POST /tags/{id}/edit
pub async fn update_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<TagForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if let Err(e) = state.tags.update(id, form.into_inner().into()).await {
        return back_to_form(&format!("/tags/{id}/edit"), e);
    }

    Ok(flash::redirect_with(
        &format!("/tags/{id}"),
        FlashMessage::success("Tag updated."),
    ))
}

/// POST /tags/{id}/delete
pub async fn delete_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = state.tags.delete(path.into_inner()).await?;

    Ok(flash::redirect_with(
        "/tags",
        FlashMessage::success(format!("Deleted tag \"{}\".", tag.name)),
    ))
}
