//! HTTP wiring.
//!
//! axum only frames requests here. Every request lands in one fallback handler, which
//! hands method/path/query to the pattern router and the resulting operation to
//! [`crate::api::handlers::dispatch`].

use crate::api::context::AppContext;
use crate::api::handlers::dispatch;
use crate::routing::match_route;

use axum::body::Bytes;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Router};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub fn app(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .fallback(handle_request)
        .layer(Extension(ctx))
}

async fn handle_request(
    Extension(ctx): Extension<Arc<AppContext>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let op = match_route(&method, uri.path(), uri.query());
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        %method,
        path = uri.path(),
        operation = op.name()
    );

    async move {
        let response = match dispatch(&ctx, op, &body).await {
            Ok(response) => response,
            Err(err) => err.into_response(),
        };
        tracing::info!(status = response.status().as_u16(), "Handled request");
        response
    }
    .instrument(span)
    .await
}
