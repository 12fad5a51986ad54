//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewPost, PostPatch};
use blog_shared::MessageResponse;
use blog_shared::dto::{CreatePostRequest, EditPostRequest, SearchQuery};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /items
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /items/{post_id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.posts.find_post_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /search?post_id=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    match query.requested_id() {
        Some(post_id) => {
            let post = state.posts.find_post_by_id(post_id).await?;
            Ok(HttpResponse::Ok().json(post))
        }
        None => Ok(HttpResponse::Ok().json(MessageResponse::new("No post id provided"))),
    }
}

/// POST /items/add
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create_post(NewPost::new(req.title, req.body, req.author_id))
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /items/{post_id}/edit
pub async fn edit_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<EditPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        body: req.body,
        author_id: req.author_id,
    };

    let post = state.posts.edit_post(path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /items/{post_id}/delete
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let deleted = state.posts.delete_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(deleted))
}
