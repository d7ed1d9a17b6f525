use rouille::Response;

use crate::http_response_status_codes::HttpResponseStatusCode;


/// Plain text body with the given status.
pub fn text_response(status: HttpResponseStatusCode, body: impl Into<String>) -> Response {
    Response::text(body).with_status_code(status.code())
}

pub fn html_response(status: HttpResponseStatusCode, body: impl Into<String>) -> Response {
    Response::html(body).with_status_code(status.code())
}

pub fn errorpage_from_status(status: HttpResponseStatusCode) -> Response {
    text_response(status, format!("{} {}\n\n{}\n", status.code(), status.title(), status.desc()))
}

/// 405 with the `Allow` header listing what the resource accepts.
pub fn method_not_allowed(allow: &'static str) -> Response {
    errorpage_from_status(HttpResponseStatusCode::MethodNotAllowed405)
        .with_additional_header("Allow", allow)
}
