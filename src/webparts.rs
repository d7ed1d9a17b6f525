//! The HTTP endpoints, and the handler for rouille that routes
//! requests to them.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use itertools::Itertools;
use kstring::KString;
use rouille::{Request, Response};

use crate::apachelog::{log_combined, Logs};
use crate::arequest::ARequest;
use crate::components::{build_named, ComponentName};
use crate::handler::{Accept, ExactFnHandler, FnHandler, Handler};
use crate::http_response_status_codes::HttpResponseStatusCode;
use crate::preview::{PreviewError, PreviewRenderer};
use crate::router::MultiRouter;
use crate::templates::TemplateStore;
use crate::webutils::{errorpage_from_status, html_response, text_response};
use crate::warn;

pub type Router = MultiRouter<Arc<dyn Handler>>;

// ------------------------------------------------------------------
// The mid-level parts

/// Make a handler for rouille's `Server`.
pub fn server_handler(
    router: Arc<Router>,
    logs: Arc<Mutex<Logs>>,
) -> impl Fn(&Request) -> Response + Send + Sync + 'static
{
    move |request: &Request| -> Response {
        match ARequest::new(request) {
            Ok(arequest) =>
                log_combined(&arequest, &logs, || handle_request(&router, &arequest)),
            Err(e) => {
                warn!("{e}");
                errorpage_from_status(e.status())
            }
        }
    }
}

/// Dispatch to the handlers registered for the longest matching path
/// prefix, in order, until one accepts the request.
pub fn handle_request(router: &Router, request: &ARequest) -> Result<Response> {
    let method = match request.method().and_then(|m| m.to_simple()) {
        Some(method) => method,
        None => {
            warn!("method {:?} not implemented", request.method_str());
            return Ok(errorpage_from_status(HttpResponseStatusCode::NotImplemented501))
        }
    };
    if let Some((handlers, rest)) = router.get(request.path()) {
        for handler in handlers {
            if let Some(response) = handler.call(request, method, rest)? {
                return Ok(response)
            }
        }
    }
    Ok(errorpage_from_status(HttpResponseStatusCode::NotFound404))
}

// ------------------------------------------------------------------
// Endpoints

fn ok_text(body: impl Into<String>) -> Response {
    text_response(HttpResponseStatusCode::OK200, body)
}

fn component_not_supported() -> Response {
    text_response(HttpResponseStatusCode::NotFound404, "Component not supported")
}

/// `/components-macro` lists the component names, one per line;
/// `/components-macro/<name>?<params>` gives the macro call text.
pub fn components_macro_handler() -> Arc<dyn Handler> {
    Arc::new(FnHandler::new(
        Accept::Get,
        |request: &ARequest, rest: &[KString]| -> Result<Option<Response>> {
            match rest {
                [] => Ok(Some(ok_text(format!(
                    "{}\n", ComponentName::all().map(ComponentName::as_str).join("\n"))))),
                [name] => Ok(Some(match build_named(name, request.params()) {
                    Ok(fragment) => ok_text(fragment.to_template_text()),
                    Err(_) => component_not_supported(),
                })),
                _ => Ok(None),
            }
        }))
}

fn preview_response(renderer: Option<&dyn PreviewRenderer>, source: &str) -> Response {
    let renderer = match renderer {
        Some(r) => r,
        None => return text_response(HttpResponseStatusCode::ServiceUnavailable503,
                                     "Preview renderer not configured"),
    };
    match renderer.render(source) {
        Ok(html) => html_response(HttpResponseStatusCode::OK200, html),
        Err(PreviewError::Render(msg)) =>
            text_response(HttpResponseStatusCode::UnprocessableEntity422,
                          format!("Render error: {msg}")),
        Err(e @ PreviewError::Unavailable(_)) => {
            warn!("{e}");
            text_response(HttpResponseStatusCode::ServiceUnavailable503,
                          "Preview renderer unavailable")
        }
    }
}

/// `/components-preview/<name>?<params>`: the macro call text of the
/// component, rendered.
pub fn components_preview_handler(renderer: Option<Arc<dyn PreviewRenderer>>)
                                  -> Arc<dyn Handler>
{
    Arc::new(FnHandler::new(
        Accept::Get,
        move |request: &ARequest, rest: &[KString]| -> Result<Option<Response>> {
            match rest {
                [name] => Ok(Some(match build_named(name, request.params()) {
                    Ok(fragment) => preview_response(renderer.as_deref(),
                                                     &fragment.to_template_text()),
                    Err(_) => component_not_supported(),
                })),
                _ => Ok(None),
            }
        }))
}

/// `POST /preview` with template text as the body.
pub fn preview_handler(renderer: Option<Arc<dyn PreviewRenderer>>) -> Arc<dyn Handler> {
    Arc::new(ExactFnHandler::new(
        Accept::Post,
        move |request: &ARequest| -> Result<Response> {
            Ok(preview_response(renderer.as_deref(), request.body().unwrap_or("")))
        }))
}

/// `/templates/<name>`: the text of a whitelisted page template.
pub fn templates_handler(store: TemplateStore) -> Arc<dyn Handler> {
    Arc::new(FnHandler::new(
        Accept::Get,
        move |_request: &ARequest, rest: &[KString]| -> Result<Option<Response>> {
            match rest {
                [name] => Ok(Some(match store.load(name) {
                    Some(text) => ok_text(text),
                    None => text_response(HttpResponseStatusCode::NotFound404,
                                          "Template not found"),
                })),
                _ => Ok(None),
            }
        }))
}

/// The branch of the example journey: England is eligible.
pub fn country_answer_handler() -> Arc<dyn Handler> {
    Arc::new(ExactFnHandler::new(
        Accept::Post,
        |request: &ARequest| -> Result<Response> {
            let target =
                if request.form().get("country") == Some("England") {
                    "example/complete"
                } else {
                    "example/ineligible"
                };
            Ok(Response::redirect_302(target))
        }))
}

/// Everything the endpoints need.
pub struct App {
    pub templates: TemplateStore,
    pub preview: Option<Arc<dyn PreviewRenderer>>,
}

impl App {
    pub fn router(self) -> Router {
        let mut router: Router = MultiRouter::new();
        router
            .add("/components-macro", components_macro_handler())
            .add("/components-preview", components_preview_handler(self.preview.clone()))
            .add("/preview", preview_handler(self.preview))
            .add("/templates", templates_handler(self.templates))
            .add("/country-answer", country_answer_handler());
        router
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn response_body_string(response: Response) -> Result<String> {
        let (mut reader, _) = response.data.into_reader_and_size();
        let mut s = String::new();
        reader.read_to_string(&mut s)?;
        Ok(s)
    }

    /// Uppercases the source, or fails on `FAIL`.
    struct FakeRenderer;

    impl PreviewRenderer for FakeRenderer {
        fn render(&self, source: &str) -> Result<String, PreviewError> {
            if source.contains("FAIL") {
                Err(PreviewError::Render("unexpected token".into()))
            } else if source.contains("DOWN") {
                Err(PreviewError::Unavailable("gone".into()))
            } else {
                Ok(format!("<div>{}</div>", source.to_uppercase()))
            }
        }
    }

    static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn templates_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(
            format!("kitroutes-webparts-{}-{}", std::process::id(),
                    DIR_COUNTER.fetch_add(1, Ordering::SeqCst)));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("question.njk"), "{% block content %}{% endblock %}\n").unwrap();
        dir
    }

    fn router(preview: bool) -> Router {
        App {
            templates: TemplateStore::new(templates_dir()),
            preview: if preview { Some(Arc::new(FakeRenderer)) } else { None },
        }.router()
    }

    fn fetch(router: &Router, method: &str, url: &str, headers: &[(&str, &str)], body: &str)
             -> (u16, Vec<(String, String)>, String)
    {
        let request = Request::fake_http(
            method, url,
            headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            body.as_bytes().to_vec());
        let arequest = ARequest::new(&request).unwrap();
        let response = handle_request(router, &arequest).unwrap();
        let status = response.status_code;
        let headers = response.headers.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        (status, headers, response_body_string(response).unwrap())
    }

    fn get(router: &Router, url: &str) -> (u16, String) {
        let (status, _, body) = fetch(router, "GET", url, &[], "");
        (status, body)
    }

    fn header<'h>(headers: &'h [(String, String)], key: &str) -> Option<&'h str> {
        headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn t_components_macro() {
        let r = router(false);
        let (status, body) = get(&r, "/components-macro/button-basic?text=Go&href=%2Fnext");
        assert_eq!(status, 200);
        assert_eq!(body, "{{ govukButton({\n  text: \"Go\",\n  href: \"/next\"\n}) }}");

        let (status, body) = get(&r, "/components-macro/RADIOS?yn=true");
        assert_eq!(status, 200);
        assert!(body.contains("value: \"yes\""));

        let (status, body) = get(&r, "/components-macro/not-a-real-component?text=x");
        assert_eq!((status, body.as_str()), (404, "Component not supported"));
    }

    #[test]
    fn t_components_macro_list() {
        let r = router(false);
        let (status, body) = get(&r, "/components-macro");
        assert_eq!(status, 200);
        assert_eq!(body.lines().count(), 26);
        assert!(body.lines().any(|l| l == "exit-this-page"));
    }

    #[test]
    fn t_not_found_and_methods() {
        let r = router(false);
        assert_eq!(get(&r, "/").0, 404);
        assert_eq!(get(&r, "/components-macro/a/b").0, 404);
        assert_eq!(get(&r, "/nowhere").0, 404);
        let (status, headers, _) = fetch(&r, "POST", "/components-macro/tag", &[], "");
        assert_eq!(status, 405);
        assert_eq!(header(&headers, "Allow"), Some("GET, HEAD"));
        assert_eq!(fetch(&r, "GET", "/country-answer", &[], "").0, 405);
        assert_eq!(fetch(&r, "DELETE", "/components-macro/tag", &[], "").0, 501);
        assert_eq!(fetch(&r, "HEAD", "/components-macro/tag", &[], "").0, 200);
    }

    #[test]
    fn t_templates() {
        let r = router(false);
        let (status, body) = get(&r, "/templates/Question");
        assert_eq!((status, body.as_str()), (200, "{% block content %}{% endblock %}\n"));
        let (status, body) = get(&r, "/templates/start");
        assert_eq!((status, body.as_str()), (404, "Template not found"));
        let (status, body) = get(&r, "/templates/passwd");
        assert_eq!((status, body.as_str()), (404, "Template not found"));
        // `..` is resolved before routing
        assert_eq!(get(&r, "/templates/../templates/question").0, 200);
    }

    #[test]
    fn t_preview() {
        let r = router(true);
        let (status, headers, body) = fetch(
            &r, "POST", "/preview", &[("Content-Type", "text/plain")], "{{ govukTag() }}");
        assert_eq!(status, 200);
        assert!(header(&headers, "Content-Type").unwrap().starts_with("text/html"));
        assert_eq!(body, "<div>{{ GOVUKTAG() }}</div>");

        let (status, _, body) = fetch(&r, "POST", "/preview", &[], "FAIL");
        assert_eq!((status, body.as_str()), (422, "Render error: unexpected token"));
        assert_eq!(fetch(&r, "POST", "/preview", &[], "DOWN").0, 503);

        let (status, body) = get(&r, "/components-preview/tag?text=Done");
        assert_eq!(status, 200);
        assert!(body.contains("TEXT: \"DONE\""), "{body}");
        assert_eq!(get(&r, "/components-preview/nope").0, 404);
    }

    #[test]
    fn t_preview_not_configured() {
        let r = router(false);
        assert_eq!(fetch(&r, "POST", "/preview", &[], "x").0, 503);
        assert_eq!(get(&r, "/components-preview/tag").0, 503);
    }

    #[test]
    fn t_country_answer() {
        let r = router(false);
        let form = [("Content-Type", "application/x-www-form-urlencoded")];
        let (status, headers, _) = fetch(&r, "POST", "/country-answer", &form, "country=England");
        assert_eq!(status, 302);
        assert_eq!(header(&headers, "Location"), Some("example/complete"));
        let (_, headers, _) = fetch(&r, "POST", "/country-answer", &form, "country=Wales");
        assert_eq!(header(&headers, "Location"), Some("example/ineligible"));
        let (_, headers, _) = fetch(&r, "POST", "/country-answer", &form, "");
        assert_eq!(header(&headers, "Location"), Some("example/ineligible"));
    }
}
