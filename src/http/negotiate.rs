//! Content negotiation
//!
//! Chooses between the JSON and XML representation of a payload from the
//! request's `Accept` header.

use hyper::header::{HeaderMap, ACCEPT};

const XML_MEDIA_TYPE: &[u8] = b"text/xml";

/// Output representation of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    Xml,
}

impl Representation {
    /// Select the representation from request headers.
    ///
    /// XML is chosen whenever any `Accept` header contains `text/xml`;
    /// anything else, including a missing header, gets JSON. Quality values
    /// are not weighed. Values are searched as raw bytes, so a non-ASCII
    /// parameter does not hide the media type.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let wants_xml = headers
            .get_all(ACCEPT)
            .iter()
            .any(|v| v.as_bytes().windows(XML_MEDIA_TYPE.len()).any(|w| w == XML_MEDIA_TYPE));
        if wants_xml {
            Self::Xml
        } else {
            Self::Json
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "text/xml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;

    fn for_accept(value: &'static str) -> Representation {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(value));
        Representation::from_headers(&headers)
    }

    #[test]
    fn test_xml_substring() {
        assert_eq!(for_accept("text/xml"), Representation::Xml);
        assert_eq!(for_accept("application/json, text/xml;q=0.1"), Representation::Xml);
    }

    #[test]
    fn test_json_default() {
        assert_eq!(for_accept("application/json"), Representation::Json);
        assert_eq!(for_accept("*/*"), Representation::Json);
        assert_eq!(for_accept("application/xml"), Representation::Json);
        assert_eq!(Representation::from_headers(&HeaderMap::new()), Representation::Json);
    }

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(Representation::from_headers(&headers), Representation::Json);

        headers.insert(ACCEPT, HeaderValue::from_static("text/xml"));
        assert_eq!(Representation::from_headers(&headers), Representation::Xml);

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        assert_eq!(Representation::from_headers(&headers), Representation::Json);
    }

    #[test]
    fn test_repeated_accept_headers() {
        let mut headers = HeaderMap::new();
        headers.append(ACCEPT, HeaderValue::from_static("application/json"));
        headers.append(ACCEPT, HeaderValue::from_static("text/xml"));
        assert_eq!(Representation::from_headers(&headers), Representation::Xml);

        let mut headers = HeaderMap::new();
        headers.append(ACCEPT, HeaderValue::from_static("application/json"));
        headers.append(ACCEPT, HeaderValue::from_static("*/*"));
        assert_eq!(Representation::from_headers(&headers), Representation::Json);
    }

    #[test]
    fn test_non_ascii_accept_value() {
        let mut headers = HeaderMap::new();
        // 0xe9 is latin-1 e-acute
        headers.insert(ACCEPT, HeaderValue::from_bytes(b"text/xml; x=\xe9").unwrap());
        assert_eq!(Representation::from_headers(&headers), Representation::Xml);

        headers.insert(ACCEPT, HeaderValue::from_bytes(b"application/json; x=\xe9").unwrap());
        assert_eq!(Representation::from_headers(&headers), Representation::Json);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(Representation::Json.content_type(), "application/json");
        assert_eq!(Representation::Xml.content_type(), "text/xml");
    }
}
