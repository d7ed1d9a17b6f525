//! The HTTP status codes this server answers with.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpResponseStatusCode {
    OK200,
    Found302,
    BadRequest400,
    NotFound404,
    MethodNotAllowed405,
    PayloadTooLarge413,
    UnprocessableEntity422,
    InternalServerError500,
    NotImplemented501,
    ServiceUnavailable503,
}

impl HttpResponseStatusCode {
    pub fn code(self) -> u16 {
        use HttpResponseStatusCode::*;
        match self {
            OK200 => 200,
            Found302 => 302,
            BadRequest400 => 400,
            NotFound404 => 404,
            MethodNotAllowed405 => 405,
            PayloadTooLarge413 => 413,
            UnprocessableEntity422 => 422,
            InternalServerError500 => 500,
            NotImplemented501 => 501,
            ServiceUnavailable503 => 503,
        }
    }

    /// The reason phrase.
    pub fn title(self) -> &'static str {
        use HttpResponseStatusCode::*;
        match self {
            OK200 => "OK",
            Found302 => "Found",
            BadRequest400 => "Bad Request",
            NotFound404 => "Not Found",
            MethodNotAllowed405 => "Method Not Allowed",
            PayloadTooLarge413 => "Payload Too Large",
            UnprocessableEntity422 => "Unprocessable Entity",
            InternalServerError500 => "Internal Server Error",
            NotImplemented501 => "Not Implemented",
            ServiceUnavailable503 => "Service Unavailable",
        }
    }

    pub fn desc(self) -> &'static str {
        use HttpResponseStatusCode::*;
        match self {
            OK200 => "The request succeeded.",
            Found302 => "The resource is temporarily at another URL.",
            BadRequest400 => "The request could not be understood.",
            NotFound404 => "The requested resource was not found.",
            MethodNotAllowed405 => "The resource does not support this request method.",
            PayloadTooLarge413 => "The request body is too large.",
            UnprocessableEntity422 => "The request was well-formed but could not be processed.",
            InternalServerError500 => "The server encountered an error processing the request.",
            NotImplemented501 => "The request method is not supported by this server.",
            ServiceUnavailable503 => "The service needed for this request is not available.",
        }
    }
}
