//! Per-connection state machine.
//!
//! Every accepted socket gets exactly one of these. The life cycle is
//! strictly linear: `Accepted -> AwaitingRequest -> Dispatching ->
//! Responding -> Closed`, with a timeout that can jump straight to `Closed`
//! from anywhere. One request in, at most one response out, then the
//! transport is closed.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, trace, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time;

use crate::parser::{parse_request, HttpRequest};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::invoke;
use crate::server::response::{compose, fallback_body, Response};
use crate::server::router::Router;
use crate::server::template::Templates;

/// The read-only resources every connection shares: the route table and the
/// template environment. Built once by the listener, handed to each
/// connection as an `Arc` reference.
pub struct AppContext {
    /// The ordered route table.
    pub router: Router,
    /// The template resource, also captured by handlers that render.
    pub templates: Arc<Templates>,
}

impl AppContext {
    /// Bundle a route table and a template resource.
    pub fn new(router: Router, templates: Arc<Templates>) -> Self {
        Self { router, templates }
    }
}

/// The linear connection states. Terminal at `Closed`; no state is ever
/// revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnState {
    Accepted,
    AwaitingRequest,
    Dispatching,
    Responding,
    Closed,
}

/// One accepted connection: the transport, the shared context, and the
/// timeout window. Dropping the connection closes the transport.
pub struct Connection<S> {
    stream: S,
    ctx: Arc<AppContext>,
    read_buffer_size: usize,
    timeout: Duration,
    state: ConnState,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an accepted transport.
    pub fn new(stream: S, ctx: Arc<AppContext>, config: &ServerConfig) -> Self {
        Self {
            stream,
            ctx,
            read_buffer_size: config.read_buffer_size,
            timeout: config.request_timeout,
            state: ConnState::Accepted,
        }
    }

    fn transition(&mut self, next: ConnState) {
        trace!("connection state {:?} -> {next:?}", self.state);
        self.state = next;
    }

    /// Drive the connection to completion.
    ///
    /// The whole exchange runs under one timeout. If the window elapses
    /// first, the serve future is dropped mid-flight and the transport is
    /// closed with nothing written; the peer has been abandoned, so any
    /// in-flight dispatch simply never gets to write.
    pub async fn run(mut self) {
        let window = self.timeout;
        match time::timeout(window, self.serve()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("connection error: {e}"),
            Err(_) => debug!("no response within {window:?}, abandoning connection"),
        }
        self.transition(ConnState::Closed);
        // self is dropped here, closing the transport exactly once
    }

    /// Read one request, dispatch it, write one response.
    async fn serve(&mut self) -> Result<(), Error> {
        self.transition(ConnState::AwaitingRequest);

        let mut buf = vec![0; self.read_buffer_size];
        let n = self.stream.read(&mut buf).await?;
        if n == 0 {
            // Peer went away before sending anything
            return Ok(());
        }

        // The first chunk is treated as the complete message
        let request = match parse_request(&buf[..n]) {
            Ok(request) => request,
            Err(e) => {
                debug!("malformed request: {e}");
                self.transition(ConnState::Responding);
                let response = Response::error(400);
                self.stream.write_all(&compose(&response)).await?;
                return Ok(());
            }
        };

        self.transition(ConnState::Dispatching);

        // Spawned so a panicking handler is isolated from the connection
        let task = tokio::spawn(dispatch(self.ctx.clone(), request.clone()));
        let (response, fault) = match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                let fault = if e.is_panic() {
                    Error::Handler(format!("handler panicked: {e}"))
                } else {
                    Error::Handler(e.to_string())
                };
                (Response::error(500), Some(fault))
            }
        };

        self.transition(ConnState::Responding);
        self.stream.write_all(&compose(&response)).await?;

        // One access-log line per completed request
        info!("{} {} {}", request.method, request.path, response.code);
        if let Some(fault) = fault {
            error!("fault while serving {}: {fault:?}", request.path);
        }

        Ok(())
    }
}

/// Route a request and run its handler, producing the final response and
/// the captured fault, if any.
///
/// Never returns an error: a route miss becomes a 404, an adapter fault a
/// 500. Any final code other than 200 gets the standard fallback page,
/// discarding whatever body the handler produced.
pub(crate) async fn dispatch(
    ctx: Arc<AppContext>,
    request: HttpRequest,
) -> (Response, Option<Error>) {
    let mut response = Response::new();
    let mut fault = None;

    match ctx.router.match_path(request.route_path()) {
        Some((handler, params)) => match invoke(handler, request, params).await {
            Ok((code, body)) => {
                response.code = code;
                response.body = body;
            }
            Err(e) => {
                response.code = 500;
                fault = Some(e);
            }
        },
        None => response.code = 404,
    }

    if response.code != 200 {
        response.body = fallback_body(response.code);
    }

    (response, fault)
}
