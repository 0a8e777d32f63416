//! Post pages. Posts are created from their owner's page.

use actix_web::{HttpRequest, HttpResponse, web};
use blogly_shared::PostForm;
use tera::Context;

use super::back_to_form;
use crate::flash::{self, FlashMessage};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Raw urlencoded pairs; the tag checkboxes have dynamic names.
type RawForm = web::Form<Vec<(String, String)>>;

/// GET /users/{id}/posts/new
pub async fn new_post_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.users.get(path.into_inner()).await?;
    let tags = state.tags.list().await?;

    let mut ctx = Context::new();
    ctx.insert("user", &user);
    ctx.insert("tags", &tags);
    state.views.render(&req, "posts/new.html", ctx)
}

/// POST /users/{id}/posts/new
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: RawForm,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let fields = PostForm::from_pairs(form.into_inner()).into();

    let post = match state.posts.create(user_id, fields).await {
        Ok(post) => post,
        Err(e) => return back_to_form(&format!("/users/{user_id}/posts/new"), e),
    };

    Ok(flash::redirect_with(
        &format!("/users/{user_id}"),
        FlashMessage::success(format!("Published \"{}\".", post.title)),
    ))
}

/// GET /posts/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let detail = state.posts.detail(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("post", &detail.post);
    ctx.insert("author", &detail.author);
    ctx.insert("tags", &detail.tags);
    state.views.render(&req, "posts/show.html", ctx)
}

/// GET /posts/{id}/edit
pub async fn edit_post_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let detail = state.posts.detail(path.into_inner()).await?;
    let tags = state.tags.list().await?;
    let selected: Vec<i32> = detail.tags.iter().map(|t| t.id).collect();

    let mut ctx = Context::new();
    ctx.insert("post", &detail.post);
    ctx.insert("author", &detail.author);
    ctx.insert("tags", &tags);
    ctx.insert("selected", &selected);
    state.views.render(&req, "posts/edit.html", ctx)
}

/// POST /posts/{id}/edit
///
/// Lands on `/posts/{user_id}`, keyed by the owner rather than the post.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: RawForm,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let fields = PostForm::from_pairs(form.into_inner()).into();

    let post = match state.posts.update(id, fields).await {
        Ok(post) => post,
        Err(e) => return back_to_form(&format!("/posts/{id}/edit"), e),
    };

    Ok(flash::redirect_with(
        &format!("/posts/{}", post.user_id),
        FlashMessage::success("Post updated."),
    ))
}

/// POST /posts/{id}/delete
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = state.posts.delete(path.into_inner()).await?;

    Ok(flash::redirect_with(
        &format!("/users/{}", post.user_id),
        FlashMessage::success(format!("Deleted \"{}\".", post.title)),
    ))
}
