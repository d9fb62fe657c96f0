//! Radix-tree request router.
//!
//! One tree per HTTP method, O(path-length) lookup via [`matchit`]. You
//! register a path, you get a handler. That is all.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so calls chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a `GET` handler. Path parameters use `{name}` syntax —
    /// `req.param("name")` retrieves them:
    ///
    /// ```rust,no_run
    /// # use lyst::{Request, Response, Router};
    /// # async fn list_page(_: Request) -> Response { Response::text("") }
    /// Router::new().get("/lists/{slug}", list_page);
    /// ```
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    /// Register a handler for an arbitrary method + path pair.
    ///
    /// # Panics
    ///
    /// Panics on a malformed route pattern — a startup-time programming
    /// error, not a runtime condition.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ErasedHandler;
    use crate::request::{Request, test_request};
    use crate::response::Response;

    async fn echo_slug(req: Request) -> Response {
        Response::text(req.param("slug").unwrap_or("none").to_owned())
    }

    #[tokio::test]
    async fn lookup_extracts_path_params() {
        let router = Router::new().get("/lists/{slug}", echo_slug);

        let (handler, params) = router.lookup(&Method::GET, "/lists/fruits").unwrap();
        assert_eq!(params.get("slug").map(String::as_str), Some("fruits"));

        let res = handler
            .call(test_request("/lists/fruits", "", &[("slug", "fruits")]))
            .await;
        assert_eq!(res.body_bytes(), b"fruits");
    }

    #[test]
    fn lookup_misses_unknown_path_and_method() {
        let router = Router::new().get("/lists/{slug}", echo_slug);
        assert!(router.lookup(&Method::GET, "/nope").is_none());
        assert!(router.lookup(&Method::POST, "/lists/fruits").is_none());
    }
}
