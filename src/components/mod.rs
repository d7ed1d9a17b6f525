//! Build GOV.UK Frontend macro calls from request parameters.
//!
//! Every builder is total: any `ParameterMap`, including an empty
//! one, gives a usable fragment. Missing or empty parameters take
//! their defaults, JSON parameters that don't parse to a non-empty
//! array of the right records are replaced by the built-in list, and
//! flags only count when given as the text `true`.

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::literal::render;
use crate::option_object::OptionObject;
use crate::params::ParameterMap;

mod content;
mod form;
mod navigation;
mod tabs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum ComponentName {
    #[strum(serialize = "button-basic")]
    ButtonBasic,
    #[strum(serialize = "input-text")]
    InputText,
    #[strum(serialize = "radios")]
    Radios,
    #[strum(serialize = "checkboxes")]
    Checkboxes,
    #[strum(serialize = "date-input")]
    DateInput,
    #[strum(serialize = "error-summary")]
    ErrorSummary,
    #[strum(serialize = "notification-banner")]
    NotificationBanner,
    #[strum(serialize = "panel")]
    Panel,
    #[strum(serialize = "summary-list")]
    SummaryList,
    #[strum(serialize = "details")]
    Details,
    #[strum(serialize = "cookie-banner")]
    CookieBanner,
    #[strum(serialize = "breadcrumbs")]
    Breadcrumbs,
    #[strum(serialize = "warning-text")]
    WarningText,
    #[strum(serialize = "textarea")]
    Textarea,
    #[strum(serialize = "tag")]
    Tag,
    #[strum(serialize = "tabs")]
    Tabs,
    #[strum(serialize = "table")]
    Table,
    #[strum(serialize = "service-navigation")]
    ServiceNavigation,
    #[strum(serialize = "password-input")]
    PasswordInput,
    #[strum(serialize = "pagination")]
    Pagination,
    #[strum(serialize = "inset-text")]
    InsetText,
    #[strum(serialize = "file-upload")]
    FileUpload,
    #[strum(serialize = "fieldset")]
    Fieldset,
    #[strum(serialize = "exit-this-page")]
    ExitThisPage,
    #[strum(serialize = "date-input-error")]
    DateInputError,
    #[strum(serialize = "accordion")]
    Accordion,
}

impl ComponentName {
    /// Case-insensitive.
    pub fn maybe_from(s: &str) -> Option<Self> {
        s.to_lowercase().parse().ok()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = ComponentName> {
        ComponentName::iter()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("component not supported: {0:?}")]
pub struct UnknownComponent(pub String);

/// What a builder produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// `{{ macro_name(<options>) }}`
    Call {
        macro_name: &'static str,
        options: OptionObject,
    },
    /// Template text written directly by the builder.
    Text(String),
}

impl Fragment {
    pub fn call(macro_name: &'static str, options: impl Into<OptionObject>) -> Self {
        Fragment::Call { macro_name, options: options.into() }
    }

    pub fn options(&self) -> Option<&OptionObject> {
        match self {
            Fragment::Call { options, .. } => Some(options),
            Fragment::Text(_) => None,
        }
    }

    pub fn to_template_text(&self) -> String {
        match self {
            Fragment::Call { macro_name, options } =>
                macro_call(macro_name, options),
            Fragment::Text(s) => s.clone(),
        }
    }
}

pub(crate) fn macro_call(macro_name: &str, options: &OptionObject) -> String {
    format!("{{{{ {macro_name}({}) }}}}", render(options))
}

pub fn build(name: ComponentName, params: &ParameterMap) -> Fragment {
    use ComponentName::*;
    match name {
        ButtonBasic => content::button(params),
        InputText => form::input_text(params),
        Radios => form::radios(params),
        Checkboxes => form::checkboxes(params),
        DateInput => form::date_input(params),
        DateInputError => form::date_input_error(params),
        ErrorSummary => content::error_summary(params),
        NotificationBanner => content::notification_banner(params),
        Panel => content::panel(params),
        SummaryList => content::summary_list(params),
        Details => content::details(params),
        CookieBanner => content::cookie_banner(params),
        Breadcrumbs => navigation::breadcrumbs(params),
        WarningText => content::warning_text(params),
        Textarea => form::textarea(params),
        Tag => content::tag(params),
        Tabs => tabs::tabs(params),
        Table => content::table(params),
        ServiceNavigation => navigation::service_navigation(params),
        PasswordInput => form::password_input(params),
        Pagination => navigation::pagination(params),
        InsetText => content::inset_text(params),
        FileUpload => form::file_upload(params),
        Fieldset => form::fieldset(params),
        ExitThisPage => navigation::exit_this_page(params),
        Accordion => content::accordion(params),
    }
}

pub fn build_named(name: &str, params: &ParameterMap) -> Result<Fragment, UnknownComponent> {
    let name = ComponentName::maybe_from(name).ok_or_else(
        || UnknownComponent(name.to_string()))?;
    Ok(build(name, params))
}
