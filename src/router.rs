//! Ordered request router with prefix grouping.
//!
//! Routes live in one `Vec`, in registration order, and dispatch is a linear
//! scan with two precedence rules:
//!
//! 1. the **first** matching parameter-less route wins immediately;
//! 2. otherwise the **last** matching parameterized route is the fallback.
//!
//! So `/users/new` beats `/users/{id}` no matter which was registered first,
//! and between two identical literal routes the earlier one wins. Not
//! matching anything is a normal outcome, not an error — the server answers
//! it with 404.
//!
//! Build the router once at startup and hand it to
//! [`Server::serve`](crate::Server::serve); it is immutable afterwards and
//! shared as-is across connections.

use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::route::{PathParams, Route};

/// The application router.
///
/// Registration methods consume and return `self` so calls chain; `group`
/// scopes every registration made inside its closure under a shared prefix:
///
/// ```rust,no_run
/// # use ruta::{Request, Response, Router};
/// # async fn list_users(_: Request) -> Response { Response::text("") }
/// # async fn get_user(_: Request) -> Response { Response::text("") }
/// # async fn health(_: Request) -> Response { Response::text("") }
/// let app = Router::new()
///     .group("/api", |r| {
///         r.get("/users", list_users)
///          .get("/users/{id}", get_user)
///     })
///     .any("/health", health);
/// ```
pub struct Router {
    routes: Vec<Route>,
    prefix: String,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new(), prefix: String::new() }
    }

    /// Registers a handler for `method` + `path`, under the current group
    /// prefix. No validation and no duplicate detection: registration order
    /// is the only tie-breaker at dispatch time.
    ///
    /// Path parameters use `{name}` segments; `req.param("name")` retrieves
    /// them in the handler.
    pub fn route(self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.add(method, path, handler, None)
    }

    /// Like [`route`](Router::route), but with an explicit prefix replacing
    /// the current group prefix for this one registration.
    pub fn route_with_prefix(
        self,
        method: Method,
        path: &str,
        handler: impl Handler,
        prefix: &str,
    ) -> Self {
        self.add(method, path, handler, Some(prefix))
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.route(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.route(Method::Post, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.route(Method::Put, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.route(Method::Delete, path, handler)
    }

    pub fn patch(self, path: &str, handler: impl Handler) -> Self {
        self.route(Method::Patch, path, handler)
    }

    pub fn options(self, path: &str, handler: impl Handler) -> Self {
        self.route(Method::Options, path, handler)
    }

    /// Registers a handler matching every request method on `path`.
    pub fn any(self, path: &str, handler: impl Handler) -> Self {
        self.route(Method::Any, path, handler)
    }

    /// Runs `body` with the current prefix extended by `prefix`; every
    /// registration inside uses the extended prefix. Groups nest, each
    /// computed against the already-prefixed parent:
    ///
    /// ```rust,no_run
    /// # use ruta::{Request, Response, Router};
    /// # async fn h(_: Request) -> Response { Response::text("") }
    /// // registers /api/v1/x
    /// Router::new().group("/api", |r| r.group("/v1", |r| r.get("/x", h)));
    /// ```
    ///
    /// The parent prefix is reinstalled on whatever router `body` returns,
    /// so restoration cannot be skipped on any exit path.
    pub fn group(mut self, prefix: &str, body: impl FnOnce(Self) -> Self) -> Self {
        let parent = std::mem::take(&mut self.prefix);
        self.prefix = prefixed(&parent, prefix);
        let mut router = body(self);
        router.prefix = parent;
        router
    }

    fn add(
        mut self,
        method: Method,
        path: &str,
        handler: impl Handler,
        prefix: Option<&str>,
    ) -> Self {
        let pattern = prefixed(prefix.unwrap_or(&self.prefix), path);
        debug!(method = %method, pattern = %pattern, "route registered");
        self.routes.push(Route::new(method, &pattern, handler.into_boxed_handler()));
        self
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The prefix currently applied to registrations. Empty outside `group`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Finds the handler for a request, applying the precedence rules.
    /// `None` stands for a wire method outside the routable set, which only
    /// `Any` routes accept.
    ///
    /// Scans in registration order. A matching static route returns
    /// immediately; a matching parameterized route is remembered — and
    /// overwritten by any later one — then used only if no static route
    /// matched at all.
    pub(crate) fn lookup(
        &self,
        method: Option<Method>,
        path: &str,
    ) -> Option<(BoxedHandler, PathParams)> {
        let mut fallback = None;

        for route in &self.routes {
            if let Some(params) = route.matches(method, path) {
                if route.is_static() {
                    return Some((BoxedHandler::clone(&route.handler), params));
                }
                fallback = Some((BoxedHandler::clone(&route.handler), params));
            }
        }

        fallback
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins a group prefix and a path. A bare `/` collapses to the prefix
/// alone, so `group("/admin", |r| r.get("/", h))` registers exactly
/// `/admin`. Anything else is direct concatenation: callers supply their
/// own leading slashes.
fn prefixed(prefix: &str, path: &str) -> String {
    if path == "/" {
        return prefix.to_owned();
    }
    format!("{prefix}{path}")
}
