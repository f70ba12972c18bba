//! Canned response payloads
//!
//! A payload is a fixed message with an optional identifier, rendered either as
//! JSON via `serde_json` or as a `<response>` XML document.

use super::negotiate::Representation;
use serde::Serialize;

/// Message body shared by every demo endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'static str>,
}

impl Payload {
    pub const fn message(message: &'static str) -> Self {
        Self { message, id: None }
    }

    pub const fn with_id(message: &'static str, id: &'static str) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }

    /// Render the payload in the requested representation
    pub fn render(&self, representation: Representation) -> String {
        match representation {
            Representation::Json => self.to_json(),
            Representation::Xml => self.to_xml(),
        }
    }

    pub fn to_json(&self) -> String {
        // Serializing two string fields cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<response><message>");
        xml.push_str(&escape_xml(self.message));
        xml.push_str("</message>");
        if let Some(id) = self.id {
            xml.push_str("<id>");
            xml.push_str(&escape_xml(id));
            xml.push_str("</id>");
        }
        xml.push_str("</response>");
        xml
    }
}

/// Escape XML special characters in text content
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
