//! # ruta
//!
//! A minimal HTTP router with ordered, predictable dispatch.
//!
//! ruta keeps routes in the order you register them and scans that order on
//! every request. No route tree, no middleware stack, no reflection. What
//! you get instead is a dispatch contract small enough to state in full:
//!
//! - the **first** matching parameter-less route wins immediately;
//! - failing that, the **last** matching parameterized route wins;
//! - failing that, the response is 404 with a static fallback document.
//!
//! So a literal route like `/users/new` always beats `/users/{id}`, no
//! matter which was registered first, and duplicate literal registrations
//! resolve to the earlier one. Path parameters use `{name}` segments and
//! are extracted fresh per request.
//!
//! Routes can be nested under shared prefixes with [`Router::group`], and a
//! route registered with [`Router::any`] matches every request method.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ruta::{Request, Response, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .group("/api", |r| {
//!             r.get("/users/{id}", get_user)
//!              .post("/users", create_user)
//!         });
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//!
//! async fn get_user(req: Request) -> Response {
//!     let id = req.param("id").unwrap_or("unknown");
//!     Response::json(format!(r#"{{"id":"{id}"}}"#).into_bytes())
//! }
//!
//! async fn create_user(req: Request) -> Response {
//!     if req.body().is_empty() {
//!         return Response::status(http::StatusCode::BAD_REQUEST);
//!     }
//!     # let bytes: Vec<u8> = vec![];
//!     Response::builder()
//!         .status(http::StatusCode::CREATED)
//!         .header("location", "/users/99")
//!         .json(bytes)
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod route;
mod router;
mod server;

pub use error::Error;
pub use handler::Handler;
pub use http::StatusCode;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use route::{PathParams, Route};
pub use router::Router;
pub use server::Server;
