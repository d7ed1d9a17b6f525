use pct_str::{InvalidPctString, PctStr};

// Own error type that owns the string, so that it doesn't borrow
// from the request when carried along in an anyhow::Result.

#[derive(Debug, thiserror::Error)]
#[error("url decoding error: {0}")]
pub struct UrlDecodingError(Box<String>);

impl From<InvalidPctString<&str>> for UrlDecodingError {
    fn from(e: InvalidPctString<&str>) -> Self {
        Self(Box::new(format!("{}", e)))
    }
}

pub fn url_decode(s: &str) -> Result<String, UrlDecodingError> {
    let p = PctStr::new(s)?;
    Ok(p.decode())
}

/// Decode one component of an `application/x-www-form-urlencoded`
/// string: `+` is a space, then percent decoding.
pub fn form_decode(s: &str) -> Result<String, UrlDecodingError> {
    if s.contains('+') {
        url_decode(&s.replace('+', " "))
    } else {
        url_decode(s)
    }
}

/// Split a query string (the part after `?`, or a form body) into
/// decoded key/value pairs, in order. Pairs without `=` get an empty
/// value; empty pairs are skipped. Components with a malformed
/// escape are kept undecoded.
pub fn query_pairs(qs: &str) -> impl Iterator<Item = (String, String)> + '_ {
    qs.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let decode = |s: &str| form_decode(s).unwrap_or_else(|_| s.to_string());
            (decode(k), decode(v))
        })
}
