//! Author handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::NewAuthor;
use blog_shared::dto::CreateAuthorRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /authors
pub async fn list_authors(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state.authors.list_authors().await?;
    Ok(HttpResponse::Ok().json(authors))
}

/// POST /user/add
pub async fn create_author(
    state: web::Data<AppState>,
    body: web::Json<CreateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let author = state
        .authors
        .create_author(NewAuthor::new(req.name, req.age))
        .await?;

    Ok(HttpResponse::Ok().json(author))
}
