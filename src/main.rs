//! Binary entry point.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:3000/lists/fruits
//!   curl 'http://localhost:3000/lists/fruits?sortOrder=desc'
//!   curl 'http://localhost:3000/api/lists/fruits?sortOrder=desc'
//!   curl http://localhost:3000/healthz

use lyst::{Router, Server, health, pages};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .get("/",                 pages::index)
        .get("/lists/{slug}",     pages::list_page)
        .get("/api/lists/{slug}", pages::list_json)
        .get("/healthz",          health::liveness)
        .get("/readyz",           health::readiness);

    let addr = std::env::var("LYST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());

    Server::bind(&addr).serve(app).await.expect("server error");
}
