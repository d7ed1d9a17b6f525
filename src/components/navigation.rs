//! Components that link to other pages.

use crate::items::{LinkItem, NavigationItem, PageItem, items_or};
use crate::literal::quote_str;
use crate::option_object::Fields;
use crate::params::ParameterMap;

use super::Fragment;

fn default_breadcrumbs() -> Vec<LinkItem> {
    vec![
        LinkItem::new("Home", "/"),
        LinkItem::new("Passports, travel and living abroad", "#"),
        LinkItem::new("Travel abroad", "#"),
    ]
}

pub fn breadcrumbs(q: &ParameterMap) -> Fragment {
    let items = items_or(q, "items", default_breadcrumbs);
    Fragment::call(
        "govukBreadcrumbs",
        Fields::new()
            .flag_field("collapseOnMobile", q.flag("collapseOnMobile"))
            .field("items", items))
}

fn default_navigation() -> Vec<NavigationItem> {
    [("#", "Navigation item 1", true),
     ("#", "Navigation item 2", false),
     ("#", "Navigation item 3", false)]
        .iter()
        .map(|&(href, text, active)| NavigationItem {
            text: text.into(),
            href: href.into(),
            active,
        })
        .collect()
}

pub fn service_navigation(q: &ParameterMap) -> Fragment {
    let navigation = items_or(q, "navigation", default_navigation);
    Fragment::call(
        "govukServiceNavigation",
        Fields::new()
            .field("serviceName", q.get_or("serviceName", "Service name"))
            .field("serviceUrl", q.get_or("serviceUrl", "#"))
            .field("navigation", navigation))
}

fn default_pages() -> Vec<PageItem> {
    (1..=3).map(|number| PageItem {
        number,
        href: "#".into(),
        current: number == 2,
    }).collect()
}

pub fn pagination(q: &ParameterMap) -> Fragment {
    let pages = items_or(q, "items", default_pages);
    Fragment::call(
        "govukPagination",
        Fields::new()
            .field("previous", Fields::new()
                   .field("href", q.get_or("previousHref", "#")))
            .field("next", Fields::new()
                   .field("href", q.get_or("nextHref", "#")))
            .field("items", pages))
}

/// Written out directly, as the component is normally placed once at
/// the top of a page layout.
pub fn exit_this_page(q: &ParameterMap) -> Fragment {
    let text = quote_str(q.get_or("text", "Exit this page"));
    let redirect_url = quote_str(q.get_or("redirectUrl", "https://www.bbc.co.uk/weather"));
    Fragment::Text(format!(
        "{{{{ govukExitThisPage({{\n  text: {text},\n  redirectUrl: {redirect_url}\n}}) }}}}"))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_object::OptionObject;

    fn params(pairs: &[(&str, &str)]) -> ParameterMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn t_breadcrumbs() {
        let f = breadcrumbs(&ParameterMap::new());
        let items = f.options().unwrap().lookup(&["items"]).unwrap().as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert!(f.options().unwrap().lookup(&["collapseOnMobile"]).is_none());

        let f = breadcrumbs(&params(&[
            ("items", r#"[{"text":"Home","href":"/"},{"text":"Apply","href":"/apply"}]"#),
            ("collapseOnMobile", "true"),
        ]));
        let text = f.to_template_text();
        assert!(text.contains("href: \"/apply\""));
        assert!(text.contains("collapseOnMobile: true"));
    }

    #[test]
    fn t_service_navigation() {
        let f = service_navigation(&ParameterMap::new());
        let nav = f.options().unwrap().lookup(&["navigation"]).unwrap().as_list().unwrap();
        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0].lookup(&["active"]), Some(&OptionObject::Bool(true)));
        assert!(nav[1].lookup(&["active"]).is_none());

        let f = service_navigation(&params(&[
            ("navigation", r#"[{"text":"Search","href":"/search"}]"#),
            ("serviceName", "Find a court"),
        ]));
        let nav = f.options().unwrap().lookup(&["navigation"]).unwrap().as_list().unwrap();
        assert_eq!(nav.len(), 1);
        assert_eq!(f.options().unwrap().lookup(&["serviceName"]).and_then(OptionObject::as_str),
                   Some("Find a court"));
        // `items` is not the parameter name here
        assert_eq!(service_navigation(&params(&[("items", r#"[{"text":"x","href":"y"}]"#)])),
                   service_navigation(&ParameterMap::new()));
    }

    #[test]
    fn t_pagination() {
        let text = pagination(&ParameterMap::new()).to_template_text();
        assert!(text.contains("number: 2,\n      href: \"#\",\n      current: true"), "{text}");
        let f = pagination(&params(&[("items", r##"[{"number":1,"href":"#"},{"ellipsis":true}]"##)]));
        let items = f.options().unwrap().lookup(&["items"]).unwrap().as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].lookup(&["ellipsis"]), Some(&OptionObject::Bool(true)));
        let f = pagination(&params(&[("items", r##"[{"number":1,"href":"#"}"##)]));
        assert_eq!(f, pagination(&ParameterMap::new()));
    }

    #[test]
    fn t_exit_this_page() {
        let text = exit_this_page(&ParameterMap::new()).to_template_text();
        assert_eq!(text, "\
{{ govukExitThisPage({
  text: \"Exit this page\",
  redirectUrl: \"https://www.bbc.co.uk/weather\"
}) }}");
    }
}
