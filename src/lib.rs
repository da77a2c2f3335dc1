//! A minimal async HTTP server runtime.
//!
//! One request per connection: the listener accepts a socket, reads the
//! first chunk of bytes, parses it into a request, matches the path against
//! an ordered table of regex patterns, runs the winning handler, writes one
//! response, and closes the connection. Handlers are plain async closures
//! returning a closed result type; named capture groups in the route
//! pattern arrive as handler arguments.
//!
//! # Features
//!
//! - Ordered, first-match-wins routing with named capture groups
//! - Uniform async handler contract (synchronous bodies work unchanged)
//! - Per-connection timeout; a stalled peer is abandoned silently
//! - Handler failures isolated per connection, surfaced as a 500 page
//! - Minijinja template rendering available to handlers
//! - One access-log line per completed request
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use microserve_rs::{
//!     AppContext, HandlerResult, HttpServer, Router, ServerConfig, Templates,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let templates = Arc::new(Templates::new("templates"));
//!
//!     let router = Router::new()
//!         .route("/", |_req, _params| async {
//!             Ok(HandlerResult::Text("hello".to_string()))
//!         })?
//!         .route(r"/users/(?P<id>\d+)", |_req, params| async move {
//!             let id = params.get("id").cloned().unwrap_or_default();
//!             Ok(HandlerResult::Text(format!("user {id}")))
//!         })?;
//!
//!     let server = HttpServer::new(
//!         ServerConfig::default(),
//!         AppContext::new(router, templates),
//!     );
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! Requests that match no pattern get a `404` with a minimal HTML page;
//! handlers that return [`HandlerResult::Error`] pick their own status, and
//! handlers that fail unexpectedly surface as a `500` with the fault logged.
//!
//! See the `demos` directory for a complete runnable server.

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, HttpRequest, HttpVersion, Method};
pub use server::{
    compose, fallback_body, invoke, reason_phrase, AppContext, Connection, Error as ServerError,
    HandlerFn, HandlerResult, HttpServer, PathParams, Response, Router, ServerConfig, Templates,
};
