use crate::error::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub(crate) struct APIError(anyhow::Error);

/// Client-caused errors answer with their short message; everything
/// server-side collapses to a generic body so upstream API detail never
/// reaches clients.
fn classify(any_err: &anyhow::Error) -> (StatusCode, &'static str) {
    if let Some(err) = any_err.downcast_ref::<Error>() {
        match err {
            Error::InvalidPayload => return (StatusCode::BAD_REQUEST, "Invalid payload"),
            Error::UnknownHostname => return (StatusCode::BAD_REQUEST, "Invalid hostname"),
            Error::Unauthorized => return (StatusCode::UNAUTHORIZED, "Unauthorized"),
            _ => {}
        }
    } else if any_err.downcast_ref::<JsonRejection>().is_some() {
        return (StatusCode::BAD_REQUEST, "Invalid payload");
    }
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let any_err = self.0;
        let (status, message) = classify(&any_err);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error answering update: {any_err:?}");
        }
        let body = Json(json!({
            "message": message,
        }));
        (status, body).into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
