//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: builds the request context,
//! resolves the route and dispatches to the endpoint handler.

use crate::config::AppState;
use crate::handler::{responses, static_files};
use crate::http::Representation;
use crate::logger::{self, AccessLogEntry};
use crate::routing::Route;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed by the handlers
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub representation: Representation,
    pub is_head: bool,
    pub server_name: &'a str,
}

/// Main entry point for HTTP request handling
///
/// Every method is accepted and the request body is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let ctx = RequestContext {
        path: req.uri().path(),
        query: req.uri().query(),
        representation: Representation::from_headers(req.headers()),
        is_head: req.method() == Method::HEAD,
        server_name: &state.config.http.server_name,
    };

    let route = Route::resolve(ctx.path);
    let response = dispatch(route, &ctx, &state);

    if state.access_log_enabled() {
        let entry = access_log_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Dispatch a resolved route to its handler
pub fn dispatch(route: Route, ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match route {
        Route::Index => static_files::serve_index(ctx, &state.assets),
        Route::Stylesheet => static_files::serve_stylesheet(ctx, &state.assets),
        Route::Success => responses::success(ctx),
        Route::BadRequest => responses::bad_request(ctx),
        Route::Unauthorized => responses::unauthorized(ctx),
        Route::Forbidden => responses::forbidden(ctx),
        Route::Internal => responses::internal(ctx),
        Route::NotImplemented => responses::not_implemented(ctx),
        Route::NotFound => responses::not_found(ctx),
    }
}

fn access_log_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = logger::format_http_version(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}
