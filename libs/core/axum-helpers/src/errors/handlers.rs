use axum::{
    Json,
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Catch-all for requests no route accepts, including known paths hit with
/// an unsupported method.
///
/// Responds `404 {"error": "<diagnostic>"}`. This body does not use the
/// `{ message, errorCode }` envelope.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    tracing::info!(%method, path = uri.path(), "No route matched");

    let body = json!({ "error": route_not_found_message(&method, uri.path()) });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Multi-line diagnostic naming the request and the usual causes.
pub fn route_not_found_message(method: &Method, path: &str) -> String {
    format!(
        "404 Not found - This could be because:\n  \
         1. The route {method} {path} is not implemented\n  \
         2. There is a typo in your request path\n  \
         3. You are missing a leading slash (/)"
    )
}
