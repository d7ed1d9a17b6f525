//! Buttons, banners and other content components.

use crate::items::{AccordionSection, records_or};
use crate::option_object::{Fields, list, text};
use crate::params::ParameterMap;
use crate::str_util::escape_html;

use super::Fragment;

pub fn button(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukButton",
        Fields::new()
            .field("text", q.get_or("text", "Continue"))
            .opt_field("href", q.get("href"))
            .flag_field("isStartButton", q.flag("isStartButton")))
}

pub fn error_summary(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukErrorSummary",
        Fields::new()
            .field("titleText", q.get_or("title", "There is a problem"))
            .field("errorList", list([
                Fields::new()
                    .field("text", q.get_or("text", "Enter your full name"))
                    .field("href", q.get_or("href", "#full-name"))
            ])))
}

pub fn notification_banner(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukNotificationBanner",
        Fields::new()
            .field("titleText", q.get_or("title", "Important"))
            .field("text", q.get_or(
                "text", "Your session will time out after 15 minutes of inactivity.")))
}

pub fn panel(q: &ParameterMap) -> Fragment {
    let reference = escape_html(q.get_or("ref", "HDJ2123F"));
    Fragment::call(
        "govukPanel",
        Fields::new()
            .field("titleText", q.get_or("title", "Application complete"))
            .field("html", format!(
                "Your reference number<br><strong>{reference}</strong>")))
}

fn summary_row(key: &str, value: &str, hidden: &str) -> Fields {
    Fields::new()
        .field("key", text(key))
        .field("value", text(value))
        .field("actions", Fields::new()
               .field("items", list([
                   Fields::new()
                       .field("href", "#")
                       .field("text", "Change")
                       .field("visuallyHiddenText", hidden)
               ])))
}

pub fn summary_list(_q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukSummaryList",
        Fields::new()
            .field("rows", list([
                summary_row("Name", "Alex Smith", "name"),
                summary_row("Date of birth", "27 March 2007", "date of birth"),
            ])))
}

pub fn details(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukDetails",
        Fields::new()
            .field("summaryText", q.get_or("summary", "Help with nationality"))
            .field("text", q.get_or(
                "text",
                "We need to know your nationality so we can work out which elections \
                 you're entitled to vote in. If you cannot provide your nationality, \
                 you'll have to send copies of identity documents through the post.")))
}

pub fn cookie_banner(q: &ParameterMap) -> Fragment {
    let service_name = q.get_or("serviceName", "this service");
    let service_html = escape_html(service_name);
    let action = |label: &str, value: &str| {
        Fields::new()
            .field("text", label.to_string())
            .field("type", "button")
            .field("name", "cookies")
            .field("value", value.to_string())
    };
    Fragment::call(
        "govukCookieBanner",
        Fields::new()
            .field("ariaLabel", format!("Cookies on {service_name}"))
            .field("messages", list([
                Fields::new()
                    .field("headingText", format!("Cookies on {service_name}"))
                    .field("html", format!(
                        "<p class=\"govuk-body\">We use some essential cookies to make \
                         {service_html} work.</p>\n\
                         <p class=\"govuk-body\">We'd also like to use analytics cookies \
                         so we can understand how you use the service and make \
                         improvements.</p>"))
                    .field("actions", list([
                        action("Accept analytics cookies", "accept"),
                        action("Reject analytics cookies", "reject"),
                        Fields::new()
                            .field("text", "View cookies")
                            .field("href", q.get_or("cookiesHref", "/cookies")),
                    ]))
            ])))
}

pub fn warning_text(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukWarningText",
        Fields::new()
            .field("text", q.get_or(
                "text", "You can be fined up to £5,000 if you do not register."))
            .field("iconFallbackText", q.get_or("iconFallbackText", "Warning")))
}

pub fn tag(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukTag",
        Fields::new()
            .field("text", q.get_or("text", "Completed"))
            .opt_field("classes", q.get("classes")))
}

pub fn table(q: &ParameterMap) -> Fragment {
    let row = |a: &str, b: &str| list([text(a), text(b)]);
    Fragment::call(
        "govukTable",
        Fields::new()
            .field("caption", q.get_or("caption", "Dates and amounts"))
            .field("captionClasses", "govuk-table__caption--m")
            .flag_field("firstCellIsHeader", q.flag("firstCellIsHeader"))
            .field("head", list([text("Date"), text("Amount")]))
            .field("rows", list([
                row("First 6 weeks", "£109.80 per week"),
                row("Next 33 weeks", "£109.80 per week"),
                row("Total estimated pay", "£4,282.20"),
            ])))
}

pub fn inset_text(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukInsetText",
        Fields::new()
            .field("text", q.get_or(
                "text",
                "It can take up to 8 weeks to register a lasting power of attorney \
                 if there are no mistakes in the application.")))
}

fn default_accordion_sections() -> Vec<AccordionSection> {
    [
        ("Writing well for the web",
         "This is the content for Writing well for the web."),
        ("Writing well for specialists",
         "This is the content for Writing well for specialists."),
        ("Know your audience",
         "This is the content for Know your audience."),
        ("How people read",
         "This is the content for How people read."),
    ].iter().map(|(heading, content)| AccordionSection::new(heading, content)).collect()
}

pub fn accordion(q: &ParameterMap) -> Fragment {
    let sections = records_or(q, "items", default_accordion_sections);
    Fragment::call(
        "govukAccordion",
        Fields::new()
            .field("id", q.get_or("id", "accordion-default"))
            .field("items", sections))
}
