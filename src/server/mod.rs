//! HTTP server runtime for microserve-rs.
//!
//! The pieces line up with the per-connection life cycle: the listener
//! ([`HttpServer`]) accepts sockets, every socket becomes a
//! [`Connection`] that reads one request, the
//! [`Router`] picks a handler by ordered pattern matching, and the handler's
//! [`HandlerResult`] is turned into a [`Response`] written back before the
//! connection closes.

mod response;
mod config;
mod error;
mod handler;
mod router;
mod template;
mod connection;
mod http_server;

// Re-export public items
pub use response::{compose, fallback_body, reason_phrase, Response};
pub use config::ServerConfig;
pub use error::Error;
pub use handler::{invoke, HandlerFn, HandlerFuture, HandlerResult, PathParams};
pub use router::{Route, Router};
pub use template::Templates;
pub use connection::{AppContext, Connection};
pub use http_server::HttpServer;
