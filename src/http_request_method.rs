
//! Pattern matching and processing help for HTTP request methods.

// https://developer.mozilla.org/en-US/docs/Web/HTTP/Methods

use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpRequestMethod {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    CONNECT,
    OPTIONS,
    TRACE,
    PATCH,
}

/// The methods that are passed on to handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpRequestMethodSimple {
    GET,
    HEAD,
    POST,
}

// --------------------------------------------

impl HttpRequestMethodSimple {
    pub fn is_post(self) -> bool {
        match self {
            HttpRequestMethodSimple::GET => false,
            HttpRequestMethodSimple::HEAD => false,
            HttpRequestMethodSimple::POST => true
        }
    }

    /// HEAD is answered like GET (rouille drops the body).
    pub fn is_get(self) -> bool {
        !self.is_post()
    }
}

impl HttpRequestMethod {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Self::GET),
            "HEAD" => Ok(Self::HEAD),
            "POST" => Ok(Self::POST),
            "PUT" => Ok(Self::PUT),
            "PATCH" => Ok(Self::PATCH),
            "DELETE" => Ok(Self::DELETE),
            "OPTIONS" => Ok(Self::OPTIONS),
            "CONNECT" => Ok(Self::CONNECT),
            "TRACE" => Ok(Self::TRACE),
            _ => bail!("invalid http request method {s:?}")
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::HEAD => "HEAD",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::PATCH => "PATCH",
            Self::DELETE => "DELETE",
            Self::OPTIONS => "OPTIONS",
            Self::CONNECT => "CONNECT",
            Self::TRACE => "TRACE",
        }
    }

    pub fn is_post(self) -> bool {
        matches!(self, Self::POST)
    }

    /// `None` for the methods no handler deals with.
    pub fn to_simple(self) -> Option<HttpRequestMethodSimple> {
        match self {
            Self::GET => Some(HttpRequestMethodSimple::GET),
            Self::HEAD => Some(HttpRequestMethodSimple::HEAD),
            Self::POST => Some(HttpRequestMethodSimple::POST),
            Self::PUT | Self::PATCH | Self::DELETE
                | Self::OPTIONS | Self::CONNECT | Self::TRACE => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_from_str() {
        for s in ["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "CONNECT", "TRACE"] {
            assert_eq!(HttpRequestMethod::from_str(s).unwrap().as_str(), s);
        }
        assert!(HttpRequestMethod::from_str("get").is_err());
        assert!(HttpRequestMethod::from_str("BREW").is_err());
    }

    #[test]
    fn t_to_simple() {
        assert_eq!(HttpRequestMethod::HEAD.to_simple(), Some(HttpRequestMethodSimple::HEAD));
        assert_eq!(HttpRequestMethod::DELETE.to_simple(), None);
        assert!(HttpRequestMethodSimple::HEAD.is_get());
        assert!(HttpRequestMethodSimple::POST.is_post());
    }
}
