use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation ID for one API call; echoed in `meta.request_id`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tag every request with a correlation ID.
///
/// A non-empty `x-request-id` from the caller is reused, so a client can
/// match directory responses against its own logs; otherwise a UUIDv4 is
/// minted. The ID is available to handlers as `Extension<RequestId>` and is
/// sent back in the same header.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut res = next.run(req).await;

    match HeaderValue::from_str(&id) {
        Ok(val) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, val);
        }
        Err(error) => {
            tracing::warn!(%error, request_id = %id, "request id is not a valid header value");
        }
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::get, Extension, Router};
    use tower::ServiceExt;

    async fn echo(Extension(id): Extension<RequestId>) -> String {
        id.0
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(echo))
            .layer(axum::middleware::from_fn(request_id))
    }

    #[tokio::test]
    async fn generates_uuid_when_header_is_empty() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let header = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("request id header")
            .to_string();
        assert!(Uuid::parse_str(&header).is_ok(), "got: {header}");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        assert_eq!(body, header.as_bytes());
    }
}
