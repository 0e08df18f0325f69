use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Request body extractor accepting JSON or URL-encoded forms.
///
/// Unlike `axum::Json` it does not insist on a content type, treats an empty
/// body as `{}`, and reports malformed bodies in the error envelope.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                ApiError::bad_request(format!("Invalid form body: {}", e.body_text()))
                    .into_response()
            })?;
            return Ok(Self(value));
        }

        // Oversized bodies keep their 413 from the body limit layer
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };
        let value = serde_json::from_slice::<T>(body).map_err(|e| {
            ApiError::bad_request(format!("Invalid JSON body: {}", e)).into_response()
        })?;

        Ok(Self(value))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}
