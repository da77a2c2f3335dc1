//! HTTP response type and wire composition.

/// The response owned by one connection for its entire lifetime.
///
/// Starts as `(200, "")`, is mutated by the dispatch step, and is composed
/// to wire bytes exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub code: u16,
    /// The response body
    pub body: String,
}

impl Response {
    /// A fresh response: 200 with an empty body.
    pub fn new() -> Self {
        Self {
            code: 200,
            body: String::new(),
        }
    }

    /// A response carrying the standard fallback page for `code`.
    pub fn error(code: u16) -> Self {
        Self {
            code,
            body: fallback_body(code),
        }
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard reason phrase for a status code, per RFC 9110.
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        410 => "Gone",
        418 => "I'm a Teapot",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown",
    }
}

/// The minimal HTML fragment served for any non-200 status.
pub fn fallback_body(code: u16) -> String {
    format!("<h1>{code} {}</h1>", reason_phrase(code))
}

/// Compose a response to wire bytes.
///
/// A pure function of `(code, body)`: header order is fixed, so composing
/// the same response twice yields byte-identical output.
pub fn compose(response: &Response) -> Vec<u8> {
    let head = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n",
        response.code,
        reason_phrase(response.code),
        response.body.len(),
    );

    let mut bytes = Vec::with_capacity(head.len() + response.body.len());
    bytes.extend_from_slice(head.as_bytes());
    bytes.extend_from_slice(response.body.as_bytes());
    bytes
}
