//! Ordered first-match route table.

use std::future::Future;
use std::sync::Arc;

use regex::Regex;

use crate::parser::HttpRequest;
use crate::server::error::Error;
use crate::server::handler::{HandlerFn, HandlerFuture, HandlerResult, PathParams};

/// One `(pattern, handler)` pair in the table.
pub struct Route {
    /// The pattern as supplied by the caller, kept for logging.
    pub pattern: String,
    regex: Regex,
    handler: HandlerFn,
}

/// An ordered route table.
///
/// Entry order is caller-supplied and significant: the first pattern that
/// matches a path wins, and later entries matching the same path are
/// shadowed. The table is immutable once built; construction happens once at
/// startup and every connection reads it through a shared reference.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route.
    ///
    /// The pattern is a regular expression matched against the full request
    /// path (query string already stripped), anchored at both ends. Named
    /// capture groups, e.g. `/users/(?P<id>\d+)`, are forwarded to the
    /// handler as [`PathParams`]. A pattern meant as a prefix match must say
    /// so explicitly (`/static/.*`).
    ///
    /// An invalid pattern fails here, at construction, never at request time.
    pub fn route<F, Fut>(mut self, pattern: impl Into<String>, handler: F) -> Result<Self, Error>
    where
        F: Fn(HttpRequest, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HandlerResult, Error>> + Send + 'static,
    {
        let pattern = pattern.into();
        let regex =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| Error::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;

        let handler: HandlerFn = Arc::new(
            move |req: HttpRequest, params: PathParams| -> HandlerFuture {
                Box::pin(handler(req, params))
            },
        );

        self.routes.push(Route {
            pattern,
            regex,
            handler,
        });
        Ok(self)
    }

    /// Find the first route whose pattern matches `path`.
    ///
    /// Returns the handler and its named captures, or `None` when nothing
    /// matched (the caller maps that to a 404).
    pub fn match_path(&self, path: &str) -> Option<(&HandlerFn, PathParams)> {
        for route in &self.routes {
            if let Some(captures) = route.regex.captures(path) {
                let params: PathParams = route
                    .regex
                    .capture_names()
                    .flatten()
                    .filter_map(|name| {
                        captures
                            .name(name)
                            .map(|m| (name.to_string(), m.as_str().to_string()))
                    })
                    .collect();
                return Some((&route.handler, params));
            }
        }
        None
    }

    /// The number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate the registered patterns in table order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.pattern.as_str())
    }
}
