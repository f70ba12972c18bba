//! HTTP response building module
//!
//! Provides builders for the demo payload responses and the static assets.

use super::negotiate::Representation;
use super::payload::Payload;
use super::status::ResponseCode;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a negotiated payload response
///
/// HEAD requests get the same status and headers with an empty body.
pub fn build_payload_response(
    code: ResponseCode,
    representation: Representation,
    payload: &Payload,
    server_name: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let rendered = Bytes::from(payload.render(representation));
    build_response(
        code,
        representation.content_type(),
        rendered,
        server_name,
        is_head,
    )
}

/// Build a 200 response for a pre-loaded static asset
pub fn build_asset_response(
    data: Bytes,
    content_type: &str,
    server_name: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    build_response(ResponseCode::Success, content_type, data, server_name, is_head)
}

fn build_response(
    code: ResponseCode,
    content_type: &str,
    data: Bytes,
    server_name: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(code.status())
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Server", server_name)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(code.name(), &e);
            let mut resp = Response::new(Full::new(Bytes::new()));
            *resp.status_mut() = code.status();
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_payload_response_json() {
        let payload = Payload::message("hello");
        let resp = build_payload_response(
            ResponseCode::Success,
            Representation::Json,
            &payload,
            "test/1.0",
            false,
        );
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.headers()["server"], "test/1.0");
        assert_eq!(resp.headers()["content-length"], "19");
        assert_eq!(body_string(resp).await, r#"{"message":"hello"}"#);
    }

    #[tokio::test]
    async fn test_head_has_empty_body() {
        let payload = Payload::with_id("gone", "notFound");
        let resp = build_payload_response(
            ResponseCode::NotFound,
            Representation::Xml,
            &payload,
            "test/1.0",
            true,
        );
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/xml");
        assert_ne!(resp.headers()["content-length"], "0");
        assert_eq!(body_string(resp).await, "");
    }

    #[tokio::test]
    async fn test_asset_response() {
        let resp = build_asset_response(Bytes::from_static(b"body{}"), "text/css", "test/1.0", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/css");
        assert_eq!(body_string(resp).await, "body{}");
    }
}
