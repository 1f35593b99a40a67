//! HTTP method as a typed enum.
//!
//! The shop only ever reads pages (`GET`) and submits forms (`POST`). `HEAD`
//! is served by the `GET` route with the body dropped. Any other method string
//! is rejected by the router with `405 Method Not Allowed` before it reaches a
//! handler.

use std::fmt;
use std::str::FromStr;

/// A method the router can register handlers for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Get,
    Head,
    Post,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get  => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
        }
    }

    /// The method whose route table serves this one.
    pub(crate) fn route_as(self) -> Self {
        match self {
            Self::Head => Self::Get,
            other => other,
        }
    }
}

/// Parses an uppercase method string. Case-sensitive per RFC 9110 §9.1.
impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET"  => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            _      => Err(()),
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
    fn parses_known_methods() {
        assert_eq!("GET".parse(), Ok(Method::Get));
        assert_eq!("HEAD".parse(), Ok(Method::Head));
        assert_eq!("POST".parse(), Ok(Method::Post));
    }

    #[test]
    fn rejects_lowercase_and_unknown() {
        assert_eq!("get".parse::<Method>(), Err(()));
        assert_eq!("DELETE".parse::<Method>(), Err(()));
    }
}
