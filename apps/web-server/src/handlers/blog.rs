//! Blog page handlers.
//!
//! Thin adapters: each one delegates to the blog service and either
//! renders a view or issues a redirect. An absent post is never an error
//! here - the user lands back on the listing.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tera::Context;

use quill_shared::PostForm;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// 302 to `location`.
fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn render(state: &AppState, name: &str, ctx: &Context) -> AppResult<HttpResponse> {
    let body = state.templates.render(name, ctx)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// GET / - the post listing.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.list_posts(state.list_order).await?;

    let mut ctx = Context::new();
    ctx.insert("blogs", &posts);
    render(&state, "index.html", &ctx)
}

/// GET /blog/{id} - one post, or back to the listing if it is gone.
pub async fn detail(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match state.blog.get_post(id).await? {
        Some(post) => {
            let mut ctx = Context::new();
            ctx.insert("blog", &post);
            render(&state, "blog_detail.html", &ctx)
        }
        None => Ok(redirect("/")),
    }
}

/// GET /new-post - the create form.
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render(&state, "new_blog.html", &Context::new())
}

/// POST /new-post
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    state.blog.create_post(form.title, form.content).await?;
    Ok(redirect("/"))
}

/// GET /blog/edit/{id} - the edit form, pre-filled.
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match state.blog.get_post(id).await? {
        Some(post) => {
            let mut ctx = Context::new();
            ctx.insert("blog", &post);
            render(&state, "edit_blog.html", &ctx)
        }
        None => Ok(redirect("/")),
    }
}

/// POST /blog/edit/{id} - on success the user lands on the detail page.
pub async fn edit(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = form.into_inner();
    match state.blog.edit_post(id, form.title, form.content).await? {
        Some(_) => Ok(redirect(&format!("/blog/{id}"))),
        None => Ok(redirect("/")),
    }
}

/// GET /blog/delete/{id} - idempotent, always back to the listing.
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    state.blog.remove_post(path.into_inner()).await?;
    Ok(redirect("/"))
}
