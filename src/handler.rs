use std::any::type_name;
use std::fmt::Debug;

use anyhow::Result;
use kstring::KString;
use rouille::Response;

use crate::arequest::ARequest;
use crate::http_request_method::HttpRequestMethodSimple;
use crate::webutils::method_not_allowed;


pub trait Handler: Debug + Send + Sync {
    /// Returning Ok(None) means, the handler is refusing to handle
    /// the request. It is to be handled as 404 not found by the
    /// caller, unless there's another alternative handler picking up
    /// the request. Err means, the handler has accepted to handle the
    /// request but failed to; this is logged and answered as internal
    /// server error.
    fn call(
        &self,
        request: &ARequest,
        method: HttpRequestMethodSimple,
        pathrest: &[KString])
        -> Result<Option<Response>>;
}

/// The methods a handler accepts; others get 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// GET and HEAD
    Get,
    Post,
}

impl Accept {
    pub fn accepts(self, method: HttpRequestMethodSimple) -> bool {
        match self {
            Accept::Get => method.is_get(),
            Accept::Post => method.is_post(),
        }
    }

    /// Value for the `Allow` header.
    pub fn allow_header(self) -> &'static str {
        match self {
            Accept::Get => "GET, HEAD",
            Accept::Post => "POST",
        }
    }
}

// ------------------------------------------------------------------
/// A Handler that allows a path surplus, passing it to the handler
/// Fn. The handler may still refuse to handle the request (404).
#[derive(Clone, Copy)]
pub struct FnHandler<F>
where F: Fn(&ARequest, &[KString]) -> Result<Option<Response>> + Send + Sync
{
    accept: Accept,
    handler: F
}

impl<F> FnHandler<F>
where F: Fn(&ARequest, &[KString]) -> Result<Option<Response>> + Send + Sync
{
    pub fn new(accept: Accept, handler: F) -> Self {
        Self { accept, handler }
    }
}

impl<F> Handler for FnHandler<F>
where F: Fn(&ARequest, &[KString]) -> Result<Option<Response>> + Send + Sync
{
    fn call(
        &self,
        request: &ARequest,
        method: HttpRequestMethodSimple,
        pathrest: &[KString]) -> Result<Option<Response>>
    {
        if self.accept.accepts(method) {
            (self.handler)(request, pathrest)
        } else {
            Ok(Some(method_not_allowed(self.accept.allow_header())))
        }
    }
}

impl<F> Debug for FnHandler<F>
where F: Fn(&ARequest, &[KString]) -> Result<Option<Response>> + Send + Sync
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("FnHandler({:?}, {})",
                                 self.accept,
                                 type_name::<F>()))
    }
}

// ------------------------------------------------------------------
/// A Handler that does not allow a path surplus, passing it to the handler Fn.
#[derive(Clone, Copy)]
pub struct ExactFnHandler<F>
where F: Fn(&ARequest) -> Result<Response> + Send + Sync
{
    accept: Accept,
    handler: F
}

impl<F> ExactFnHandler<F>
where F: Fn(&ARequest) -> Result<Response> + Send + Sync
{
    pub fn new(accept: Accept, handler: F) -> Self {
        Self { accept, handler }
    }
}

impl<F> Handler for ExactFnHandler<F>
where F: Fn(&ARequest) -> Result<Response> + Send + Sync
{
    fn call(
        &self,
        request: &ARequest,
        method: HttpRequestMethodSimple,
        pathrest: &[KString]) -> Result<Option<Response>>
    {
        if !pathrest.is_empty() {
            // refuse to handle if there is a rest (-> 404)
            Ok(None)
        } else if self.accept.accepts(method) {
            Ok(Some((self.handler)(request)?))
        } else {
            Ok(Some(method_not_allowed(self.accept.allow_header())))
        }
    }
}

impl<F> Debug for ExactFnHandler<F>
where F: Fn(&ARequest) -> Result<Response> + Send + Sync
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("ExactFnHandler({:?}, {})",
                                 self.accept,
                                 type_name::<F>()))
    }
}
