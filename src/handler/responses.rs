//! Demo endpoint handlers
//!
//! Each handler answers with a fixed payload and status code, negotiated to
//! JSON or XML. `badRequest` and `unauthorized` switch to a 200 variant when
//! the expected query parameter is present.

use super::router::RequestContext;
use crate::http::{self, Payload, ResponseCode};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

pub const SUCCESS: Payload = Payload::message("This is a successful response.");
pub const BAD_REQUEST_VALID: Payload = Payload::message("This request has the required parameters.");
pub const BAD_REQUEST: Payload =
    Payload::with_id("Missing valid query parameter set to true.", "badRequest");
pub const UNAUTHORIZED_LOGGED_IN: Payload =
    Payload::message("This request had the required parameters.");
pub const UNAUTHORIZED: Payload =
    Payload::with_id("Missing loggedIn query parameter set to yes.", "unauthorized");
pub const FORBIDDEN: Payload =
    Payload::with_id("You do not have access to this content.", "forbidden");
pub const INTERNAL: Payload =
    Payload::with_id("Internal Server Error. Something went wrong.", "internalError");
pub const NOT_IMPLEMENTED: Payload = Payload::with_id(
    "A get request for this page has not been implemented yet. Check again later for updated content.",
    "notImplemented",
);
pub const NOT_FOUND: Payload =
    Payload::with_id("The page you are looking for was not found.", "notFound");

pub fn success(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    respond(ctx, ResponseCode::Success, &SUCCESS)
}

/// 200 with `?valid=true`, otherwise 400
pub fn bad_request(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    if query_equals(ctx, "valid", "true") {
        respond(ctx, ResponseCode::Success, &BAD_REQUEST_VALID)
    } else {
        respond(ctx, ResponseCode::BadRequest, &BAD_REQUEST)
    }
}

/// 200 with `?loggedIn=yes`, otherwise 401
pub fn unauthorized(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    if query_equals(ctx, "loggedIn", "yes") {
        respond(ctx, ResponseCode::Success, &UNAUTHORIZED_LOGGED_IN)
    } else {
        respond(ctx, ResponseCode::Unauthorized, &UNAUTHORIZED)
    }
}

pub fn forbidden(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    respond(ctx, ResponseCode::Forbidden, &FORBIDDEN)
}

pub fn internal(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    respond(ctx, ResponseCode::InternalError, &INTERNAL)
}

pub fn not_implemented(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    respond(ctx, ResponseCode::NotImplemented, &NOT_IMPLEMENTED)
}

pub fn not_found(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    respond(ctx, ResponseCode::NotFound, &NOT_FOUND)
}

fn query_equals(ctx: &RequestContext<'_>, name: &str, expected: &str) -> bool {
    http::query_param(ctx.query, name).is_some_and(|v| v == expected)
}

fn respond(ctx: &RequestContext<'_>, code: ResponseCode, payload: &Payload) -> Response<Full<Bytes>> {
    http::build_payload_response(code, ctx.representation, payload, ctx.server_name, ctx.is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Representation;
    use http_body_util::BodyExt;

    fn ctx<'a>(query: Option<&'a str>, representation: Representation) -> RequestContext<'a> {
        RequestContext {
            path: "/",
            query,
            representation,
            is_head: false,
            server_name: "test",
        }
    }

    async fn parts(resp: Response<Full<Bytes>>) -> (u16, String, String) {
        let status = resp.status().as_u16();
        let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_variants() {
        let (status, _, body) = parts(bad_request(&ctx(Some("valid=true"), Representation::Json))).await;
        assert_eq!(status, 200);
        assert_eq!(body, r#"{"message":"This request has the required parameters."}"#);

        for query in [None, Some("valid=false"), Some("valid=TRUE"), Some("valid")] {
            let (status, _, body) = parts(bad_request(&ctx(query, Representation::Json))).await;
            assert_eq!(status, 400, "query {query:?}");
            assert_eq!(
                body,
                r#"{"message":"Missing valid query parameter set to true.","id":"badRequest"}"#
            );
        }
    }

    #[tokio::test]
    async fn test_unauthorized_variants() {
        let (status, content_type, body) =
            parts(unauthorized(&ctx(Some("loggedIn=yes"), Representation::Xml))).await;
        assert_eq!(status, 200);
        assert_eq!(content_type, "text/xml");
        assert_eq!(
            body,
            "<response><message>This request had the required parameters.</message></response>"
        );

        for query in [None, Some("loggedIn=no"), Some("loggedin=yes")] {
            let (status, _, body) = parts(unauthorized(&ctx(query, Representation::Xml))).await;
            assert_eq!(status, 401, "query {query:?}");
            assert_eq!(
                body,
                "<response><message>Missing loggedIn query parameter set to yes.</message><id>unauthorized</id></response>"
            );
        }
    }

    #[tokio::test]
    async fn test_fixed_status_handlers_ignore_query() {
        let c = ctx(Some("valid=true&loggedIn=yes"), Representation::Json);
        assert_eq!(parts(success(&c)).await.0, 200);
        assert_eq!(parts(forbidden(&c)).await.0, 403);
        assert_eq!(parts(internal(&c)).await.0, 500);
        assert_eq!(parts(not_implemented(&c)).await.0, 501);
        assert_eq!(parts(not_found(&c)).await.0, 404);
    }

    #[tokio::test]
    async fn test_forbidden_xml_exact() {
        let (status, content_type, body) = parts(forbidden(&ctx(None, Representation::Xml))).await;
        assert_eq!(status, 403);
        assert_eq!(content_type, "text/xml");
        assert_eq!(
            body,
            "<response><message>You do not have access to this content.</message><id>forbidden</id></response>"
        );
    }
}
