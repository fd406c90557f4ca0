//! A single registered route and its path-pattern matching.
//!
//! Patterns are slash-delimited. A segment written `{name}` captures the
//! corresponding request segment as a named parameter; any other segment is
//! matched literally. Matching is a pure function: every call returns a
//! fresh parameter map, so a route carries no per-request state and can be
//! matched concurrently from any number of connections.

use std::collections::HashMap;

use crate::handler::BoxedHandler;
use crate::method::Method;

/// Named path parameters extracted by a successful match.
pub type PathParams = HashMap<String, String>;

/// One parsed segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// One method + pattern + handler binding.
///
/// Routes are created by the [`Router`](crate::Router) registration methods
/// and held in registration order. No pattern validation is performed:
/// duplicates are legal (the dispatch precedence rules resolve them) and a
/// malformed placeholder such as `{id` is simply a literal segment.
pub struct Route {
    method: Method,
    pattern: String,
    segments: Vec<Segment>,
    pub(crate) handler: BoxedHandler,
}

impl Route {
    pub(crate) fn new(method: Method, pattern: &str, handler: BoxedHandler) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => Segment::Param(name.to_owned()),
                    None => Segment::Literal(s.to_owned()),
                }
            })
            .collect();
        Self { method, pattern: pattern.to_owned(), segments, handler }
    }

    /// The method this route was registered under.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The full pattern, group prefix included.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern contains any `{name}` segments. Parameter-less
    /// routes short-circuit the dispatch scan; parameterized ones only serve
    /// as a fallback.
    pub fn is_static(&self) -> bool {
        !self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }

    /// Tests this route against a request method and path. A request method
    /// outside the routable set arrives as `None` and is accepted only by
    /// `Any` routes.
    ///
    /// Returns the extracted parameters on success (empty for a static
    /// route), `None` otherwise. Empty path segments are insignificant, so
    /// `/users/42/` matches the pattern `/users/{id}`.
    pub fn matches(&self, method: Option<Method>, path: &str) -> Option<PathParams> {
        if !self.method.accepts(method) {
            return None;
        }

        let mut params = PathParams::new();
        let mut given = path.split('/').filter(|s| !s.is_empty());

        for segment in &self.segments {
            let part = given.next()?;
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_owned());
                }
            }
        }

        // The request must not have segments left over.
        if given.next().is_some() {
            return None;
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Handler;
    use crate::response::Response;
    use crate::request::Request;

    async fn noop(_req: Request) -> Response {
        Response::text("")
    }

    fn route(method: Method, pattern: &str) -> Route {
        Route::new(method, pattern, noop.into_boxed_handler())
    }

    #[test]
    fn literal_segments_match_exactly() {
        let r = route(Method::Get, "/users");
        assert_eq!(r.matches(Some(Method::Get), "/users"), Some(PathParams::new()));
        assert_eq!(r.matches(Some(Method::Get), "/users/"), Some(PathParams::new()));
        assert_eq!(r.matches(Some(Method::Get), "/posts"), None);
        assert_eq!(r.matches(Some(Method::Get), "/users/42"), None);
        assert_eq!(r.matches(Some(Method::Get), "/"), None);
    }

    #[test]
    fn method_must_accept() {
        let r = route(Method::Post, "/users");
        assert_eq!(r.matches(Some(Method::Get), "/users"), None);
        assert_eq!(r.matches(None, "/users"), None);
        assert!(r.matches(Some(Method::Post), "/users").is_some());

        let any = route(Method::Any, "/users");
        assert!(any.matches(Some(Method::Get), "/users").is_some());
        assert!(any.matches(Some(Method::Delete), "/users").is_some());
        // Unroutable wire methods reach ANY routes too.
        assert!(any.matches(None, "/users").is_some());
    }

    #[test]
    fn params_are_extracted_fresh_per_call() {
        let r = route(Method::Get, "/posts/{post_id}/comments/{comment_id}");
        assert!(!r.is_static());

        let params = r.matches(Some(Method::Get), "/posts/42/comments/7").unwrap();
        assert_eq!(params.get("post_id").map(String::as_str), Some("42"));
        assert_eq!(params.get("comment_id").map(String::as_str), Some("7"));

        // A second match against a different path must not see stale values.
        let params = r.matches(Some(Method::Get), "/posts/1/comments/2").unwrap();
        assert_eq!(params.get("post_id").map(String::as_str), Some("1"));
        assert_eq!(params.get("comment_id").map(String::as_str), Some("2"));
    }

    #[test]
    fn param_does_not_span_segments() {
        let r = route(Method::Get, "/files/{name}");
        assert!(r.matches(Some(Method::Get), "/files/readme.md").is_some());
        assert_eq!(r.matches(Some(Method::Get), "/files/docs/readme.md"), None);
        assert_eq!(r.matches(Some(Method::Get), "/files"), None);
    }

    #[test]
    fn empty_pattern_matches_root() {
        // A root registration inside a group with no prefix ends up as "".
        let r = route(Method::Get, "");
        assert_eq!(r.matches(Some(Method::Get), "/"), Some(PathParams::new()));
        assert_eq!(r.matches(Some(Method::Get), "/x"), None);
    }

    #[test]
    fn malformed_placeholder_is_a_literal() {
        let r = route(Method::Get, "/users/{id");
        assert!(r.is_static());
        assert!(r.matches(Some(Method::Get), "/users/{id").is_some());
        assert_eq!(r.matches(Some(Method::Get), "/users/42"), None);
    }
}
