//! HTTP method as a typed enum.
//!
//! Covers the six verbs a route can be registered under, plus [`Method::Any`],
//! the wildcard that matches every request method. `Any` is a registration
//! concept only — it never arrives on the wire, so [`FromStr`] rejects it
//! along with every other unknown method string. A request whose method
//! cannot be parsed can still match `Any` routes, but nothing else.

use std::fmt;
use std::str::FromStr;

/// A routable HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    /// Wildcard: a route registered under `Any` matches every request method.
    Any,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get     => "GET",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Delete  => "DELETE",
            Self::Patch   => "PATCH",
            Self::Options => "OPTIONS",
            Self::Any     => "ANY",
        }
    }

    /// Whether a route registered under `self` accepts a request made with
    /// `requested`, where `None` stands for a wire method outside the
    /// routable set. True on exact equality or when `self` is the wildcard;
    /// only the wildcard accepts `None`.
    pub(crate) fn accepts(self, requested: Option<Method>) -> bool {
        self == Method::Any || requested == Some(self)
    }
}

/// Parses an uppercase wire method. Case-sensitive per RFC 9110 §9.1.
/// `"ANY"` is not a wire method and does not parse.
impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET"     => Ok(Self::Get),
            "POST"    => Ok(Self::Post),
            "PUT"     => Ok(Self::Put),
            "DELETE"  => Ok(Self::Delete),
            "PATCH"   => Ok(Self::Patch),
            "OPTIONS" => Ok(Self::Options),
            _         => Err(()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_methods() {
        assert_eq!("GET".parse::<Method>(), Ok(Method::Get));
        assert_eq!("OPTIONS".parse::<Method>(), Ok(Method::Options));
        assert_eq!("PATCH".parse::<Method>(), Ok(Method::Patch));
    }

    #[test]
    fn rejects_unknown_and_lowercase() {
        assert!("get".parse::<Method>().is_err());
        assert!("TRACE".parse::<Method>().is_err());
        assert!("ANY".parse::<Method>().is_err());
    }

    #[test]
    fn any_accepts_everything_including_unknown() {
        assert!(Method::Any.accepts(Some(Method::Get)));
        assert!(Method::Any.accepts(Some(Method::Delete)));
        assert!(Method::Any.accepts(None));
        assert!(Method::Get.accepts(Some(Method::Get)));
        assert!(!Method::Get.accepts(Some(Method::Post)));
        assert!(!Method::Get.accepts(None));
    }
}
