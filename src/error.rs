//! Unified error type.

use std::fmt;

/// The error type returned by ruta's fallible operations.
///
/// Routing outcomes are never `Error`s: an unmatched request is a 404
/// [`Response`](crate::Response), a normal terminal branch of dispatch. This
/// type covers infrastructure failures only — binding a socket, accepting a
/// connection.
#[derive(Debug)]
pub struct Error(std::io::Error);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "io: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}
