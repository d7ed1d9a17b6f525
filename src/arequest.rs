use std::io::Read;
use std::net::IpAddr;

use kstring::KString;
use rouille::Request;

use crate::http_request_method::HttpRequestMethod;
use crate::http_response_status_codes::HttpResponseStatusCode;
use crate::params::ParameterMap;
use crate::path::canonicalize_path;

/// Upper limit for POST bodies (template text or form data).
pub const MAX_BODY_SIZE: u64 = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request path leaves the root: {0:?}")]
    InvalidPath(String),
    #[error("request body larger than {} bytes", MAX_BODY_SIZE)]
    BodyTooLarge,
    #[error("reading request body: {0}")]
    BodyRead(#[from] std::io::Error),
    #[error("request body is not UTF-8")]
    BodyNotUtf8,
}

impl RequestError {
    pub fn status(&self) -> HttpResponseStatusCode {
        match self {
            RequestError::BodyTooLarge => HttpResponseStatusCode::PayloadTooLarge413,
            RequestError::InvalidPath(_)
                | RequestError::BodyRead(_)
                | RequestError::BodyNotUtf8 => HttpResponseStatusCode::BadRequest400,
        }
    }
}

/// The parts of a request the handlers and logs look at, decoded
/// once up front.
pub struct ARequest<'r> {
    request: &'r Request,
    method: Option<HttpRequestMethod>,
    path: Vec<KString>,
    params: ParameterMap,
    body: Option<String>,
    form: ParameterMap,
}

fn read_body(request: &Request) -> Result<Option<String>, RequestError> {
    let data = match request.data() {
        Some(data) => data,
        None => return Ok(None),
    };
    let mut buf = Vec::new();
    data.take(MAX_BODY_SIZE + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > MAX_BODY_SIZE {
        return Err(RequestError::BodyTooLarge)
    }
    String::from_utf8(buf).map(Some).map_err(|_| RequestError::BodyNotUtf8)
}

fn is_form(request: &Request) -> bool {
    request.header("content-type")
        .map(|ct| ct.to_ascii_lowercase().starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

impl<'r> ARequest<'r> {
    pub fn new(request: &'r Request) -> Result<Self, RequestError> {
        let path_original = request.url(); // path only, decoded
        let segments: Vec<&str> = path_original.split('/').collect();
        let path: Vec<KString> = canonicalize_path(&segments)
            .ok_or_else(|| RequestError::InvalidPath(path_original.clone()))?
            .into_iter()
            .map(KString::from_ref)
            .collect();
        let method = HttpRequestMethod::from_str(request.method()).ok();
        let body =
            if method.map(HttpRequestMethod::is_post).unwrap_or(false) {
                read_body(request)?
            } else {
                None
            };
        let form = match &body {
            Some(body) if is_form(request) => ParameterMap::from_query_string(body),
            _ => ParameterMap::new(),
        };
        Ok(ARequest {
            request,
            method,
            path,
            params: ParameterMap::from_query_string(request.raw_query_string()),
            body,
            form,
        })
    }

    /// Like the request part in Apache style Combined Log Format
    pub fn request_line(&self) -> String {
        // Request does not maintain the original request line
        format!("{} {}",
                self.request.method(),
                self.request.raw_url())
    }
    /// Path and query as sent by the client.
    pub fn raw_url(&self) -> &str {
        self.request.raw_url()
    }
    pub fn user_agent(&self) -> Option<&str> {
        self.request.header("user-agent")
    }
    pub fn client_ip(&self) -> IpAddr {
        self.request.remote_addr().ip()
    }
    pub fn method_str(&self) -> &str { self.request.method() }
    /// None indicates invalid/unknown method; use `method_str` to
    /// get the original string.
    pub fn method(&self) -> Option<HttpRequestMethod> { self.method }
    pub fn is_post(&self) -> bool {
        self.method.map(HttpRequestMethod::is_post).unwrap_or(false)
    }
    /// Query parameters.
    pub fn params(&self) -> &ParameterMap { &self.params }
    /// Urlencoded form fields of a POST body; empty for other bodies.
    pub fn form(&self) -> &ParameterMap { &self.form }
    /// The POST body as text.
    pub fn body(&self) -> Option<&str> { self.body.as_deref() }
    /// Form fields, then query parameters; the first occurrence of a
    /// key wins.
    pub fn data(&self) -> ParameterMap {
        self.form.iter().chain(self.params.iter()).collect()
    }
    /// Canonical path segments.
    pub fn path(&self) -> &[KString] { &self.path }
    pub fn referer(&self) -> Option<&str> {
        self.header("referer")
    }

    pub fn header(&self, key: &str) -> Option<&str> { self.request.header(key) }
}
