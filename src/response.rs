//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it — or return anything
//! implementing [`IntoResponse`]. Statuses are [`http::StatusCode`] values.

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;

/// The document served when no route matches a request.
const NOT_FOUND_DOC: &str = "\
<!doctype html>
<html>
<head><title>404 Not Found</title></head>
<body><h1>404</h1><p>The requested resource was not found.</p></body>
</html>
";

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK)
///
/// ```rust
/// use ruta::Response;
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::text("hello");
/// Response::status(http::StatusCode::NO_CONTENT);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use http::StatusCode;
/// use ruta::Response;
///
/// Response::builder()
///     .status(StatusCode::CREATED)
///     .header("location", "/users/42")
///     .json(br#"{"id":42}"#.to_vec());
/// ```
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl Response {
    /// `200 OK` with an `application/json` body. Pass bytes straight from
    /// your serializer, e.g. `serde_json::to_vec(&val)`.
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self::with_content_type("application/json", body.into())
    }

    /// `200 OK` with a `text/plain; charset=utf-8` body.
    pub fn text(body: impl Into<String>) -> Self {
        Self::with_content_type("text/plain; charset=utf-8", body.into().into())
    }

    /// `200 OK` with a `text/html; charset=utf-8` body.
    pub fn html(body: impl Into<String>) -> Self {
        Self::with_content_type("text/html; charset=utf-8", body.into().into())
    }

    /// Response with the given status and no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, headers: Vec::new(), body: Bytes::new() }
    }

    /// The terminal branch of dispatch: `404 Not Found` plus the static
    /// fallback document.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            headers: vec![content_type("text/html; charset=utf-8")],
            body: Bytes::from_static(NOT_FOUND_DOC.as_bytes()),
        }
    }

    /// Builder for responses needing a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: StatusCode::OK, headers: Vec::new() }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    fn with_content_type(value: &str, body: Bytes) -> Self {
        Self { status: StatusCode::OK, headers: vec![content_type(value)], body }
    }

    /// Converts into the hyper-facing representation.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        match builder.body(Full::new(self.body)) {
            Ok(res) => res,
            // Only reachable through an invalid header name or value.
            Err(_) => {
                let mut res = http::Response::new(Full::default());
                *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                res
            }
        }
    }
}

fn content_type(value: &str) -> (String, String) {
    ("content-type".to_owned(), value.to_owned())
}

// ── ResponseBuilder ──────────────────────────────────────────────────────────

/// Fluent builder for [`Response`], obtained via [`Response::builder`].
/// Defaults to `200 OK`; terminated by a body method.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
}

impl ResponseBuilder {
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: impl Into<Bytes>) -> Response {
        self.finish("application/json", body.into())
    }

    /// Terminate with a plain-text body.
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish("text/plain; charset=utf-8", body.into().into())
    }

    /// Terminate with an arbitrary content type.
    pub fn bytes(self, content_type: &str, body: impl Into<Bytes>) -> Response {
        self.finish(content_type, body.into())
    }

    /// Terminate with no body.
    pub fn no_body(self) -> Response {
        Response { status: self.status, headers: self.headers, body: Bytes::new() }
    }

    fn finish(self, content_type_value: &str, body: Bytes) -> Response {
        let mut headers = vec![content_type(content_type_value)];
        headers.extend(self.headers);
        Response { status: self.status, headers, body }
    }
}

// ── IntoResponse ─────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implemented for `Response` itself, strings, and [`StatusCode`], so a
/// handler can return any of them directly.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response {
        Response::text(self)
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Response::text(self)
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::status(self)
    }
}
