pub mod warn;
pub mod util;
pub mod str_util;
pub mod url_encoding;
pub mod params;
pub mod option_object;
pub mod literal;
pub mod items;
pub mod components;
pub mod templates;
pub mod preview;
pub mod http_request_method;
pub mod http_response_status_codes;
pub mod path;
pub mod router;
pub mod easy_fs;
pub mod arequest;
pub mod handler;
pub mod webutils;
pub mod apachelog;
pub mod webparts;
pub mod rouille_runner;
pub mod config;
