//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Method};

use crate::query::Query;

/// An incoming HTTP request, as handed to a handler.
///
/// Fully materialized before dispatch: the body is already collected and the
/// query string already decoded, so handlers are plain functions over data.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Query,
    pub(crate) headers: HeaderMap,
    pub(crate) params: HashMap<String, String>,
    pub(crate) body: Bytes,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        query: Query,
        headers: HeaderMap,
        params: HashMap<String, String>,
        body: Bytes,
    ) -> Self {
        Self { method, path, query, headers, params, body }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The decoded query-parameter bag.
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/lists/{slug}`, `req.param("slug")` on `/lists/fruits`
    /// returns `Some("fruits")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) fn test_request(path: &str, raw_query: &str, params: &[(&str, &str)]) -> Request {
    Request::new(
        Method::GET,
        path.to_owned(),
        Query::parse(raw_query),
        HeaderMap::new(),
        params.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
        Bytes::new(),
    )
}
