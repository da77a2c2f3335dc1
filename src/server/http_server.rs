//! HTTP server listener.

use std::sync::Arc;

use log::{error, info, warn};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::task::JoinSet;

use crate::server::config::ServerConfig;
use crate::server::connection::{AppContext, Connection};
use crate::server::error::Error;
use crate::server::response::{compose, Response};

/// The listener: binds once, then turns every accepted socket into an
/// independent [`Connection`] until interrupted.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    ctx: Arc<AppContext>,
}

impl HttpServer {
    /// Create a server from a configuration and the shared context (route
    /// table + template resource). The context is built once, up front, and
    /// every connection reads it through the same `Arc`.
    pub fn new(config: ServerConfig, ctx: AppContext) -> Self {
        Self {
            config,
            ctx: Arc::new(ctx),
        }
    }

    /// The shared context, for tests and diagnostics.
    pub fn context(&self) -> Arc<AppContext> {
        self.ctx.clone()
    }

    fn log_routes(&self) {
        info!("Registered routes:");
        for pattern in self.ctx.router.patterns() {
            info!("  {pattern}");
        }
    }

    /// Bind and serve until Ctrl+C.
    ///
    /// Each accepted connection is served by its own task; a failure inside
    /// one connection never reaches the listener or any other connection.
    /// On interrupt the listener stops accepting and gives in-flight
    /// connections a bounded window to finish.
    pub async fn start(&self) -> Result<(), Error> {
        self.log_routes();

        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);

        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.max_connections));
        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Interrupt received, shutting down");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            let permit = match semaphore.clone().try_acquire_owned() {
                                Ok(permit) => permit,
                                Err(_) => {
                                    warn!("Connection limit reached, rejecting {addr}");
                                    let _ = socket.write_all(&compose(&Response::error(503))).await;
                                    continue;
                                }
                            };

                            let connection = Connection::new(socket, self.ctx.clone(), &self.config);
                            tasks.spawn(async move {
                                let _permit = permit;
                                connection.run().await;
                            });
                        }
                        Err(e) => {
                            error!("Error accepting connection: {e}");
                            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                        }
                    }
                }
            }
        }

        self.drain(&mut tasks).await;
        Ok(())
    }

    /// Wait (bounded) for in-flight connections after the accept loop ends.
    async fn drain(&self, tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections", len = tasks.len());
        let grace = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(grace, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Connection task failed during shutdown: {e}");
                }
            }
        })
        .await;
        info!("Server shutdown complete");
    }
}
