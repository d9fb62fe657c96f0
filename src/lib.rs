//! # lyst
//!
//! A tiny list-serving web app. Lists live in a compiled-in catalog,
//! addressed by slug; each page renders its items sorted according to the
//! `sortOrder` query parameter and links back to the opposite direction.
//!
//! ## The wire contract
//!
//! One parameter, two words:
//!
//! | Parameter | Value | Meaning |
//! |---|---|---|
//! | `sortOrder` | `desc` | descending |
//! | `sortOrder` | anything else, or absent | ascending |
//!
//! `?sortOrder=desc` flips a list; `?sortOrder=bogus`, an empty value, or a
//! repeated `sortOrder` key all fall back to ascending. [`SortOrder::resolve`]
//! is the single place that rule lives.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use lyst::{Router, Server, health, pages};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .get("/",                  pages::index)
//!         .get("/lists/{slug}",      pages::list_page)
//!         .get("/api/lists/{slug}",  pages::list_json)
//!         .get("/healthz",           health::liveness)
//!         .get("/readyz",            health::readiness);
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod catalog;
pub mod health;
pub mod pages;
pub mod query;
pub mod sort;

pub use error::Error;
pub use handler::Handler;
pub use query::{Query, QueryValue};
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use sort::SortOrder;
