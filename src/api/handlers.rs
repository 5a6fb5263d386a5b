use super::context::AppContext;
use super::response::{ApiError, NOT_FOUND, POST_NOT_FOUND, USER_NOT_FOUND, encode};
use super::types::{Post, User};
use crate::routing::Operation;
use crate::storage::backend::with_deadline;

use axum::response::Response;
use serde::de::DeserializeOwned;
use std::num::IntErrorKind;

/// Posts returned per page of an author listing.
pub const PAGE_SIZE: usize = 5;

pub async fn dispatch(ctx: &AppContext, op: Operation, body: &[u8]) -> Result<Response, ApiError> {
    match op {
        Operation::ListUsers => handle_list_users(ctx).await,
        Operation::GetUser { id } => handle_get_user(ctx, &id).await,
        Operation::CreateUser => handle_create_user(ctx, body).await,
        Operation::ListPostsByAuthor { user_id, page } => {
            handle_list_posts_by_author(ctx, &user_id, page.as_deref()).await
        }
        Operation::GetPost { id } => handle_get_post(ctx, &id).await,
        Operation::CreatePost => handle_create_post(ctx, body).await,
        Operation::NotFound => Err(ApiError::NotFound(NOT_FOUND)),
    }
}

pub async fn handle_list_users(ctx: &AppContext) -> Result<Response, ApiError> {
    let users = with_deadline("users.find", ctx.deadlines.read, ctx.users.find()).await?;
    encode(&users)
}

pub async fn handle_get_user(ctx: &AppContext, id: &str) -> Result<Response, ApiError> {
    match with_deadline("users.find_one", ctx.deadlines.read, ctx.users.find_one(id)).await? {
        Some(user) => encode(&user),
        None => {
            tracing::debug!("User not found: {}", id);
            Err(ApiError::NotFound(USER_NOT_FOUND))
        }
    }
}

pub async fn handle_create_user(ctx: &AppContext, body: &[u8]) -> Result<Response, ApiError> {
    let user: User = decode(body)?;
    if let Some(field) = user.missing_field(ctx.validation) {
        tracing::warn!("Rejected user: `{}` is empty", field);
        return Err(ApiError::BadRequest(field));
    }

    let user = user.with_hashed_password();
    with_deadline(
        "users.insert_one",
        ctx.deadlines.write,
        ctx.users.insert_one(user.clone()),
    )
    .await?;

    tracing::info!("Stored user {}", user.id);
    encode(&user)
}

pub async fn handle_get_post(ctx: &AppContext, id: &str) -> Result<Response, ApiError> {
    match with_deadline("posts.find_one", ctx.deadlines.read, ctx.posts.find_one(id)).await? {
        Some(post) => encode(&post),
        None => {
            tracing::debug!("Post not found: {}", id);
            Err(ApiError::NotFound(POST_NOT_FOUND))
        }
    }
}

/// The author is not looked up here: a post may reference a user created later.
pub async fn handle_create_post(ctx: &AppContext, body: &[u8]) -> Result<Response, ApiError> {
    let post: Post = decode(body)?;
    if let Some(field) = post.missing_field(ctx.validation) {
        tracing::warn!("Rejected post: `{}` is empty", field);
        return Err(ApiError::BadRequest(field));
    }

    with_deadline(
        "posts.insert_one",
        ctx.deadlines.write,
        ctx.posts.insert_one(post.clone()),
    )
    .await?;

    tracing::info!("Stored post {} by {}", post.id, post.author);
    encode(&post)
}

/// Posts by `user_id`, one page at a time.
///
/// The author must exist. Pages are cut from the filtered posts in the store's
/// enumeration order, which the in-memory backend does not keep stable between calls.
pub async fn handle_list_posts_by_author(
    ctx: &AppContext,
    user_id: &str,
    page: Option<&str>,
) -> Result<Response, ApiError> {
    let author = with_deadline(
        "users.find_one",
        ctx.deadlines.read,
        ctx.users.find_one(user_id),
    )
    .await?;
    if author.is_none() {
        tracing::debug!("Author not found: {}", user_id);
        return Err(ApiError::NotFound(USER_NOT_FOUND));
    }

    let page = parse_page(page)?;
    let posts = with_deadline("posts.find", ctx.deadlines.read, ctx.posts.find()).await?;
    let window = paginate(
        posts.into_iter().filter(|post| post.author == user_id),
        page,
    );

    tracing::debug!("Author {} page {}: {} posts", user_id, page, window.len());
    encode(&window)
}

/// Absent means page 1. Anything that is not a non-negative integer is an internal error.
/// A numeric page too large for `usize` lies past every window and clamps to `usize::MAX`.
pub fn parse_page(raw: Option<&str>) -> Result<usize, ApiError> {
    let Some(value) = raw else {
        return Ok(1);
    };
    match value.parse::<usize>() {
        Ok(page) => Ok(page),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(e) => Err(ApiError::Internal(format!("Invalid page `{}`: {}", value, e))),
    }
}

/// Items `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of `items`. Page 0 is empty.
pub fn paginate<T>(items: impl Iterator<Item = T>, page: usize) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let offset = (page - 1).saturating_mul(PAGE_SIZE);
    items.skip(offset).take(PAGE_SIZE).collect()
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::Internal(format!("Failed to decode request body: {}", e)))
}
