//! Minimal ruta example — grouped JSON endpoints.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/api/users/42
//!   curl http://localhost:3000/api/users/new
//!   curl -X POST http://localhost:3000/api/users \
//!        -H 'content-type: application/json' \
//!        -d '{"name":"alice"}'
//!   curl http://localhost:3000/missing            # 404 fallback page

use ruta::{Request, Response, Router, Server, StatusCode};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .group("/api", |r| {
            r.get("/users/{id}", get_user)
                // Literal beats {id} even though it is registered later.
                .get("/users/new", new_user_form)
                .post("/users", create_user)
        })
        .any("/ping", ping);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

// GET /api/users/{id}
async fn get_user(req: Request) -> Response {
    let id = req.param("id").unwrap_or("unknown");
    Response::json(format!(r#"{{"id":"{id}","name":"alice"}}"#).into_bytes())
}

// GET /api/users/new
async fn new_user_form(_req: Request) -> Response {
    Response::html("<form method=post action=/api/users></form>")
}

// POST /api/users
async fn create_user(req: Request) -> Response {
    if req.body().is_empty() {
        return Response::status(StatusCode::BAD_REQUEST);
    }

    Response::builder()
        .status(StatusCode::CREATED)
        .header("location", "/api/users/99")
        .json(r#"{"id":"99","name":"new_user"}"#.as_bytes().to_vec())
}

// Any method on /ping
async fn ping(_req: Request) -> Response {
    Response::text("pong")
}
