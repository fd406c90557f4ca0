//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C the server stops accepting new connections, lets
//! every in-flight connection task finish, and returns from
//! [`Server::serve`]. Size your orchestrator's grace period to the slowest
//! request you expect.

use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not a valid `host:port` string.
    pub fn bind(addr: &str) -> Self {
        let addr: SocketAddr = addr.parse().expect("invalid socket address");
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `router`.
    ///
    /// Returns only after a full graceful shutdown: a signal arrives, the
    /// accept loop stops, and all in-flight requests complete.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        let listener = TcpListener::bind(self.addr).await?;

        // Shared immutably across connection tasks; the router is never
        // mutated after this point.
        let router = Arc::new(router);

        info!(addr = %self.addr, routes = router.routes().len(), "ruta listening");

        // Tracks spawned connection tasks so shutdown can drain them.
        let mut tasks = tokio::task::JoinSet::new();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // `biased` checks arms top-to-bottom: a signal stops the
                // accept loop even when connections are queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move {
                                Ok::<_, std::convert::Infallible>(dispatch(&router, req).await)
                            }
                        });

                        // auto::Builder speaks both HTTP/1.1 and HTTP/2.
                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished tasks so the JoinSet stays bounded.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("ruta stopped");
        Ok(())
    }
}

// ── Request dispatch ─────────────────────────────────────────────────────────

/// Routes one request and produces one response.
///
/// Infallible from hyper's point of view: an unmatched path is a 404 with
/// the fallback document, a body read failure is a 400. A wire method
/// outside the routable set parses to `None` and can still match `any`
/// routes — nothing else. The body is only collected once a route has
/// matched, so a request headed for 404 is never buffered. Generic over the
/// body type so tests can drive it with [`Full`] instead of
/// `hyper::body::Incoming`.
async fn dispatch<B>(router: &Router, req: http::Request<B>) -> http::Response<Full<Bytes>>
where
    B: hyper::body::Body,
{
    let path = req.uri().path().to_owned();
    let method = req.method().as_str().parse::<Method>().ok();

    let Some((handler, params)) = router.lookup(method, &path) else {
        debug!(method = %req.method(), path = %path, "no route matched");
        return Response::not_found().into_http();
    };

    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Response::status(http::StatusCode::BAD_REQUEST).into_http(),
    };

    let request = Request::new(parts.method.as_str().to_owned(), path, parts.headers, body, params);
    handler.call(request).await.into_http()
}

// ── Shutdown signal ──────────────────────────────────────────────────────────

/// Resolves on the first shutdown signal: SIGTERM or SIGINT on Unix, Ctrl-C
/// elsewhere.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    // Never resolves, which disables the SIGTERM arm off Unix.
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn request(method: &str, path: &str, body: &str) -> http::Request<Full<Bytes>> {
        http::Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::from(body.to_owned())))
            .unwrap()
    }

    async fn echo_params(req: Request) -> Response {
        Response::text(req.param("id").unwrap_or("none").to_owned())
    }

    async fn echo_body(req: Request) -> Response {
        Response::builder()
            .status(StatusCode::CREATED)
            .json(req.body().to_vec())
    }

    #[tokio::test]
    async fn unmatched_request_gets_404_and_fallback_document() {
        let router = Router::new().get("/users", echo_params);

        let res = dispatch(&router, request("GET", "/nope", "")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert!(std::str::from_utf8(&body).unwrap().contains("404"));

        // A failed dispatch does not disturb the registry.
        assert_eq!(router.routes().len(), 1);
    }

    #[tokio::test]
    async fn unknown_wire_method_reaches_any_routes() {
        async fn pong(req: Request) -> Response {
            Response::text(req.method().to_owned())
        }

        let router = Router::new().any("/ping", pong);

        let res = dispatch(&router, request("TRACE", "/ping", "")).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        // The handler sees the wire method verbatim.
        assert_eq!(&body[..], b"TRACE");
    }

    #[tokio::test]
    async fn unknown_wire_method_gets_404_without_an_any_route() {
        let router = Router::new().get("/x", echo_params);

        let res = dispatch(&router, request("TRACE", "/x", "")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    /// A body that fails the test if dispatch ever polls it.
    struct UnreadBody;

    impl hyper::body::Body for UnreadBody {
        type Data = Bytes;
        type Error = std::convert::Infallible;

        fn poll_frame(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<Option<Result<hyper::body::Frame<Bytes>, Self::Error>>> {
            panic!("body polled on an unmatched request");
        }
    }

    #[tokio::test]
    async fn unmatched_request_body_is_never_collected() {
        let router = Router::new().get("/users", echo_params);

        let req = http::Request::builder()
            .method("POST")
            .uri("/nope")
            .body(UnreadBody)
            .unwrap();

        let res = dispatch(&router, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn matched_handler_sees_params_and_body() {
        let router = Router::new()
            .get("/users/{id}", echo_params)
            .post("/users", echo_body);

        let res = dispatch(&router, request("GET", "/users/42", "")).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"42");

        let res = dispatch(&router, request("POST", "/users", r#"{"name":"alice"}"#)).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"name":"alice"}"#);
    }
}
