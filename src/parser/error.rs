//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur while parsing an HTTP request.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP method in the request line is not one we support.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The request path is empty or missing.
    #[error("Invalid HTTP path")]
    InvalidPath,

    /// The request line does not have the `METHOD PATH VERSION` shape.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The HTTP version token is not recognized.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A header required by the protocol version is absent.
    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    /// A header line has no `name: value` separator.
    #[error("Invalid header format")]
    InvalidHeaderFormat,

    /// The request contained no bytes at all.
    #[error("Empty request")]
    EmptyRequest,

    /// Error decoding a JSON body.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
