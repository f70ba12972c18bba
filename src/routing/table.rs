//! Route table module
//!
//! Exact-match mapping from request path to endpoint.

/// Every endpoint the server knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Stylesheet,
    Success,
    BadRequest,
    Unauthorized,
    Forbidden,
    Internal,
    NotImplemented,
    NotFound,
}

/// Path -> route table
pub static ROUTES: [(&str, Route); 9] = [
    ("/", Route::Index),
    ("/style.css", Route::Stylesheet),
    ("/success", Route::Success),
    ("/badRequest", Route::BadRequest),
    ("/unauthorized", Route::Unauthorized),
    ("/forbidden", Route::Forbidden),
    ("/internal", Route::Internal),
    ("/notImplemented", Route::NotImplemented),
    ("/notFound", Route::NotFound),
];

impl Route {
    /// Resolve a request path (without query string) to a route.
    ///
    /// Matching is exact and case-sensitive; anything unmapped resolves to
    /// [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        ROUTES
            .iter()
            .find(|(p, _)| *p == path)
            .map_or(Self::NotFound, |(_, route)| *route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("/"), Route::Index);
        assert_eq!(Route::resolve("/style.css"), Route::Stylesheet);
        assert_eq!(Route::resolve("/success"), Route::Success);
        assert_eq!(Route::resolve("/badRequest"), Route::BadRequest);
        assert_eq!(Route::resolve("/unauthorized"), Route::Unauthorized);
        assert_eq!(Route::resolve("/forbidden"), Route::Forbidden);
        assert_eq!(Route::resolve("/internal"), Route::Internal);
        assert_eq!(Route::resolve("/notImplemented"), Route::NotImplemented);
        assert_eq!(Route::resolve("/notFound"), Route::NotFound);
    }

    #[test]
    fn test_no_prefix_or_slash_normalization() {
        assert_eq!(Route::resolve("/success/"), Route::NotFound);
        assert_eq!(Route::resolve("/success/extra"), Route::NotFound);
        assert_eq!(Route::resolve("/succ"), Route::NotFound);
        assert_eq!(Route::resolve("/badrequest"), Route::NotFound);
        assert_eq!(Route::resolve(""), Route::NotFound);
    }

    #[test]
    fn test_dot_segments_not_resolved() {
        assert_eq!(Route::resolve("/./success"), Route::NotFound);
        assert_eq!(Route::resolve("/x/../success"), Route::NotFound);
    }

    #[test]
    fn test_unmapped_paths() {
        assert_eq!(Route::resolve("/anything-unmapped"), Route::NotFound);
        assert_eq!(Route::resolve("/favicon.ico"), Route::NotFound);
    }
}
