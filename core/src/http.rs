//! HTTP exchange described as plain data.
//!
//! # Design
//! The client builds an `HttpRequest`, hands it to a `Transport`, and parses
//! the `HttpResponse` it gets back. Building and parsing never touch the
//! network, which keeps them deterministic and easy to test. Every vendor call
//! is a JSON POST, so the request carries no method.

/// A vendor request ready to be sent: always a POST with a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Status and body of a vendor response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
