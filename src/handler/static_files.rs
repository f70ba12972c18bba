//! Static asset module
//!
//! The client page and its stylesheet are read once at startup and served
//! from memory for the lifetime of the process.

use super::router::RequestContext;
use crate::config::AssetsConfig;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const INDEX_CONTENT_TYPE: &str = "text/html";
const STYLESHEET_CONTENT_TYPE: &str = "text/css";

/// Pre-loaded asset contents
#[derive(Debug, Clone)]
pub struct StaticAssets {
    index: Bytes,
    stylesheet: Bytes,
}

impl StaticAssets {
    pub const fn new(index: Bytes, stylesheet: Bytes) -> Self {
        Self { index, stylesheet }
    }

    /// Read both assets from the configured directory.
    ///
    /// A file that cannot be read is replaced by a built-in fallback and a
    /// warning is logged; startup is not aborted.
    pub async fn load(config: &AssetsConfig) -> Self {
        let dir = Path::new(&config.dir);
        let index = load_or_fallback(&dir.join(&config.index_file), FALLBACK_INDEX).await;
        let stylesheet =
            load_or_fallback(&dir.join(&config.stylesheet_file), FALLBACK_STYLESHEET).await;
        Self::new(index, stylesheet)
    }

    pub const fn index(&self) -> &Bytes {
        &self.index
    }

    pub const fn stylesheet(&self) -> &Bytes {
        &self.stylesheet
    }
}

async fn load_or_fallback(path: &Path, fallback: &'static str) -> Bytes {
    match fs::read(path).await {
        Ok(content) => Bytes::from(content),
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to load {}: {e}, using built-in fallback",
                path.display()
            ));
            Bytes::from_static(fallback.as_bytes())
        }
    }
}

/// Serve the client page
pub fn serve_index(ctx: &RequestContext<'_>, assets: &StaticAssets) -> Response<Full<Bytes>> {
    http::build_asset_response(
        assets.index().clone(),
        INDEX_CONTENT_TYPE,
        ctx.server_name,
        ctx.is_head,
    )
}

/// Serve the stylesheet
pub fn serve_stylesheet(ctx: &RequestContext<'_>, assets: &StaticAssets) -> Response<Full<Bytes>> {
    http::build_asset_response(
        assets.stylesheet().clone(),
        STYLESHEET_CONTENT_TYPE,
        ctx.server_name,
        ctx.is_head,
    )
}

const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>Status Code Demo</title><link rel="stylesheet" href="/style.css"></head>
<body>
<h1>Status Code Demo</h1>
<ul>
<li><a href="/success">/success</a></li>
<li><a href="/badRequest">/badRequest</a></li>
<li><a href="/unauthorized">/unauthorized</a></li>
<li><a href="/forbidden">/forbidden</a></li>
<li><a href="/internal">/internal</a></li>
<li><a href="/notImplemented">/notImplemented</a></li>
<li><a href="/notFound">/notFound</a></li>
</ul>
</body>
</html>"#;

const FALLBACK_STYLESHEET: &str = "body { font-family: sans-serif; }\n";

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_dir_config() -> AssetsConfig {
        AssetsConfig {
            dir: "this-directory-does-not-exist".to_string(),
            ..AssetsConfig::default()
        }
    }

    #[tokio::test]
    async fn test_missing_files_use_fallback() {
        let assets = StaticAssets::load(&missing_dir_config()).await;
        assert_eq!(assets.index().as_ref(), FALLBACK_INDEX.as_bytes());
        assert_eq!(assets.stylesheet().as_ref(), FALLBACK_STYLESHEET.as_bytes());
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let dir = std::env::temp_dir().join(format!("statusdemo-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("client.html"), "<p>hi</p>").unwrap();
        std::fs::write(dir.join("style.css"), "p { color: red; }").unwrap();

        let config = AssetsConfig {
            dir: dir.to_string_lossy().into_owned(),
            ..AssetsConfig::default()
        };
        let assets = StaticAssets::load(&config).await;
        assert_eq!(assets.index().as_ref(), b"<p>hi</p>");
        assert_eq!(assets.stylesheet().as_ref(), b"p { color: red; }");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_serve_content_types() {
        let assets = StaticAssets::new(Bytes::from_static(b"html"), Bytes::from_static(b"css"));
        let ctx = RequestContext {
            path: "/",
            query: None,
            representation: http::Representation::Xml,
            is_head: false,
            server_name: "test",
        };
        let resp = serve_index(&ctx, &assets);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/html");

        let resp = serve_stylesheet(&ctx, &assets);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/css");
    }
}
