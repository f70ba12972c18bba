//! Query string parsing module
//!
//! Looks up a single `application/x-www-form-urlencoded` parameter.

use std::borrow::Cow;

/// Find the first value of `name` in a raw query string (without leading `?`).
///
/// `+` decodes to a space and malformed `%` escapes are kept verbatim.
pub fn query_param<'a>(query: Option<&'a str>, name: &str) -> Option<Cow<'a, str>> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
