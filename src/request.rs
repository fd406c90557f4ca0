//! Incoming HTTP request type.

use bytes::Bytes;
use http::HeaderMap;

use crate::route::PathParams;

/// An incoming HTTP request, with the path parameters extracted by the route
/// that matched it.
///
/// Parameters belong to the request, not to the route: each dispatch builds
/// a fresh map, so concurrent requests through the same route never see each
/// other's values.
pub struct Request {
    method: String,
    path: String,
    headers: HeaderMap,
    body: Bytes,
    params: PathParams,
}

impl Request {
    pub(crate) fn new(
        method: String,
        path: String,
        headers: HeaderMap,
        body: Bytes,
        params: PathParams,
    ) -> Self {
        Self { method, path, headers, body, params }
    }

    /// The wire method string, e.g. `"GET"`. Kept verbatim so a handler on
    /// an `any` route can see methods outside the routable set.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Case-insensitive header lookup; `None` for absent or non-UTF-8 values.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns
    /// `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// All extracted path parameters for this request.
    pub fn params(&self) -> &PathParams {
        &self.params
    }

    #[cfg(test)]
    pub(crate) fn test(method: &str, path: &str, params: PathParams) -> Self {
        Self::new(method.to_owned(), path.to_owned(), HeaderMap::new(), Bytes::new(), params)
    }
}
