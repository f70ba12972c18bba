//! Response code table
//!
//! Fixed mapping from the symbolic response names used by the demo endpoints
//! to their HTTP status codes. The table is a `static` and has no mutating API.

use hyper::StatusCode;

/// Symbolic response names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Success,
    BadRequest,
    Unauthorized,
    Forbidden,
    InternalError,
    NotImplemented,
    NotFound,
}

/// Name -> code table, in declaration order
static RESPONSE_CODES: [(&str, ResponseCode); 7] = [
    ("success", ResponseCode::Success),
    ("badRequest", ResponseCode::BadRequest),
    ("unauthorized", ResponseCode::Unauthorized),
    ("forbidden", ResponseCode::Forbidden),
    ("internalError", ResponseCode::InternalError),
    ("notImplemented", ResponseCode::NotImplemented),
    ("notFound", ResponseCode::NotFound),
];

impl ResponseCode {
    /// Numeric HTTP status code
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::InternalError => 500,
            Self::NotImplemented => 501,
            Self::NotFound => 404,
        }
    }

    pub fn status(self) -> StatusCode {
        StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Symbolic name as it appears in the table
    pub fn name(self) -> &'static str {
        RESPONSE_CODES
            .iter()
            .find(|(_, code)| *code == self)
            .map_or("unknown", |(name, _)| *name)
    }

    /// Iterate over the whole table
    pub fn table() -> impl Iterator<Item = (&'static str, u16)> {
        RESPONSE_CODES.iter().map(|(name, code)| (*name, code.code()))
    }
}
