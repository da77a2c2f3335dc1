//! HTTP request parsing.
//!
//! One inbound message per connection: the server hands the first received
//! chunk of bytes to [`parse_request`] and gets back an immutable
//! [`HttpRequest`] or a parse error.

mod request;
mod method;
mod version;
mod error;
mod tests;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
