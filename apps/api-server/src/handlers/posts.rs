//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use devconnect_core::domain::{Post, PostContent};
use devconnect_shared::{MessageResponse, PostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult, StoreResultExt};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        likes: post.likes,
        created_at: post.created_at,
        updated_at: post.updated_at,
        content_updated_at: post.content_updated_at,
    }
}

/// An id that does not parse cannot name a stored post.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::post_not_found())
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .find_all_recent()
        .await
        .or_fail("Failed to fetch posts.")?;

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let content = PostContent::parse(req.title, req.content)?;

    let post = state
        .posts
        .insert(Post::new(content))
        .await
        .or_fail("Failed to create post.")?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let content = PostContent::parse(req.title, req.content)?;
    let id = parse_id(&path)?;

    let post = state
        .posts
        .update_content(id, content, chrono::Utc::now())
        .await
        .or_fail("Failed to update post.")?
        .ok_or_else(AppError::post_not_found)?;

    tracing::info!(post_id = %post.id, "Post updated");
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state
        .posts
        .delete(id)
        .await
        .or_fail("Failed to delete post.")?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::deleted()))
}

/// POST /api/posts/{id}/like
pub async fn like_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .increment_likes(id)
        .await
        .or_fail("Failed to like post.")?
        .ok_or_else(AppError::post_not_found)?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}
