//! JSON body extractor with envelope-formatted rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] as an extractor.
///
/// Malformed JSON or a body that does not fit `T` is rejected with
/// `400 {"message": "<parser message>"}` before the handler runs.
///
/// A request without a JSON content type is not parsed: its body is read as
/// `{}`, so `T` sees every field missing and the handler's own validation
/// decides the response.
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// async fn create(JsonBody(input): JsonBody<CreateItem>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            let value = serde_json::from_value(serde_json::Value::Object(Default::default()))
                .map_err(|e| AppError::Forwarded {
                    status: Some(400),
                    error_code: None,
                    message: Some(e.to_string()),
                    source: Some(Box::new(e)),
                })?;
            return Ok(JsonBody(value));
        }

        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
