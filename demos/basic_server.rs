//! A basic server demonstrating routing, captures, errors, and templates.
//!
//! Run with `RUST_LOG=info cargo run --example basic_server`, then try:
//!
//! ```text
//! curl http://127.0.0.1:8081/
//! curl http://127.0.0.1:8081/users/42
//! curl http://127.0.0.1:8081/greet
//! curl http://127.0.0.1:8081/secret
//! curl http://127.0.0.1:8081/nope
//! ```

use std::sync::Arc;
use std::time::Duration;

use log::info;
use microserve_rs::{
    AppContext, HandlerResult, HttpServer, Router, ServerConfig, Templates,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let templates = Arc::new(Templates::new("demos/templates"));

    let tpl = templates.clone();
    let router = Router::new()
        // Plain text
        .route("/", |_req, _params| async {
            Ok(HandlerResult::Text("Hello, World!".to_string()))
        })?
        // Named capture forwarded as a handler argument
        .route(r"/users/(?P<id>\d+)", |_req, params| async move {
            let id = params.get("id").cloned().unwrap_or_default();
            Ok(HandlerResult::Text(format!("Hello, user {id}!")))
        })?
        // Rendered through the template resource
        .route("/greet", move |req, _params| {
            let tpl = tpl.clone();
            async move {
                let name = req
                    .get_query_param("name")
                    .cloned()
                    .unwrap_or_else(|| "World".to_string());
                Ok(HandlerResult::Text(tpl.render(
                    "index.html",
                    serde_json::json!({ "name": name }),
                )?))
            }
        })?
        // Handler-declared status; the body is the standard fallback page
        .route("/secret", |_req, _params| async {
            Ok(HandlerResult::Error {
                code: 403,
                message: Some("not for you".to_string()),
            })
        })?;

    let config = ServerConfig {
        addr: "127.0.0.1:8081".parse()?,
        request_timeout: Duration::from_secs(5),
        ..ServerConfig::default()
    };

    info!("Starting server on http://{}", config.addr);
    let server = HttpServer::new(config, AppContext::new(router, templates));
    server.start().await?;

    Ok(())
}
