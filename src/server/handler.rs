//! Handler contract and invocation adapter.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::debug;

use crate::parser::HttpRequest;
use crate::server::error::Error;

/// Named captures extracted from a route pattern, keyed by capture name.
pub type PathParams = HashMap<String, String>;

/// Type alias for a boxed future that resolves to a handler's result.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HandlerResult, Error>> + Send>>;

/// Type alias for a handler bound to a route pattern.
///
/// Every handler has this one shape and is always awaited, so callers never
/// need to know whether the body suspends or returns immediately.
pub type HandlerFn = Arc<dyn Fn(HttpRequest, PathParams) -> HandlerFuture + Send + Sync>;

/// The closed set of values a handler may produce.
///
/// Anything outside this set is unrepresentable; a handler that fails
/// unexpectedly returns `Err` instead, which the connection turns into a
/// 500 fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResult {
    /// Success with no body.
    Empty,
    /// Success; the body is the given text.
    Text(String),
    /// An explicit failure status declared by the handler.
    Error { code: u16, message: Option<String> },
}

/// Run a handler and normalize its result into a `(code, body)` pair.
///
/// Handler-declared errors are converted here; an unexpected fault (`Err`
/// from the handler future) propagates to the caller untouched.
pub async fn invoke(
    handler: &HandlerFn,
    request: HttpRequest,
    params: PathParams,
) -> Result<(u16, String), Error> {
    match handler(request, params).await? {
        HandlerResult::Empty => Ok((200, String::new())),
        HandlerResult::Text(body) => Ok((200, body)),
        HandlerResult::Error { code, message } => {
            if let Some(message) = message {
                debug!("handler declared error {code}: {message}");
            }
            Ok((code, String::new()))
        }
    }
}
