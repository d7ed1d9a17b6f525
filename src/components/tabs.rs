//! Tabs need their panel contents set up front, as template
//! variables; the `govukTabs` call then refers to those by name.

use std::collections::HashSet;

use itertools::Itertools;

use crate::literal::quote_str;
use crate::option_object::{Fields, OptionObject, list, text};
use crate::params::ParameterMap;
use crate::str_util::{is_identifier, slug_to_camel_case, slugify};

use super::{Fragment, macro_call};

const DEFAULT_LABELS: &str = "Past day|Past week|Past month|Past year";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: String,
    /// Element id of the panel, unique within the set.
    pub id: String,
    /// Name of the template variable holding the panel html.
    pub var: String,
}

fn split_labels(s: &str) -> Vec<&str> {
    s.split('|').map(str::trim).filter(|l| !l.is_empty()).collect()
}

pub fn tabs_from_labels(labels: &str) -> Vec<Tab> {
    let mut labels = split_labels(labels);
    if labels.is_empty() {
        labels = split_labels(DEFAULT_LABELS);
    }
    let mut seen = HashSet::new();
    let mut seen_vars = HashSet::new();
    labels.into_iter().enumerate().map(|(i, label)| {
        let n = i + 1;
        let base = match slugify(label) {
            s if s.is_empty() => format!("tab-{n}"),
            s => s,
        };
        let mut id = base.clone();
        let mut k = 2;
        while !seen.insert(id.clone()) {
            id = format!("{base}-{k}");
            k += 1;
        }
        let stem = match slug_to_camel_case(&id) {
            s if is_identifier(&s) => s,
            _ => format!("tab{n}"),
        };
        let mut var = format!("{stem}Html");
        let mut k = 2;
        while !seen_vars.insert(var.clone()) {
            var = format!("{stem}{k}Html");
            k += 1;
        }
        Tab { label: label.to_string(), id, var }
    }).collect()
}

fn panel_table() -> OptionObject {
    let row = |name: &str, opened: &str, closed: &str| list([text(name), text(opened), text(closed)]);
    Fields::new()
        .field("firstCellIsHeader", true)
        .field("head", list([text("Case manager"), text("Cases opened"), text("Cases closed")]))
        .field("rows", list([
            row("David Francis", "3", "0"),
            row("Paul Farmer", "1", "0"),
            row("Rita Patel", "2", "0"),
        ]))
        .into()
}

/// The label goes in as a quoted, escaped expression so that template
/// syntax in it is never live.
fn panel_block(tab: &Tab) -> String {
    format!("{{% set {var} %}}\n\
             <h2 class=\"govuk-heading-l\">{{{{ {heading} | escape }}}}</h2>\n\
             {table}\n\
             {{% endset %}}",
            var = tab.var,
            heading = quote_str(&tab.label),
            table = macro_call("govukTable", &panel_table()))
}

pub fn tabs(q: &ParameterMap) -> Fragment {
    let tabs = tabs_from_labels(q.get_or("labels", DEFAULT_LABELS));
    let items = list(tabs.iter().map(|tab| {
        Fields::new()
            .field("label", tab.label.as_str())
            .field("id", tab.id.as_str())
            .field("panel", Fields::new()
                   .field("html", OptionObject::var(&tab.var)))
    }));
    let call = macro_call("govukTabs", &Fields::new().field("items", items).into());
    Fragment::Text(format!("{}\n\n{call}", tabs.iter().map(panel_block).join("\n\n")))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tabs: &[Tab]) -> Vec<&str> {
        tabs.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn t_tabs_from_labels() {
        let tabs = tabs_from_labels("A B|C D");
        assert_eq!(ids(&tabs), vec!["a-b", "c-d"]);
        assert_eq!(tabs[0].var, "aBHtml");
        assert_eq!(ids(&tabs_from_labels("")), vec!["past-day", "past-week", "past-month", "past-year"]);
        assert_eq!(ids(&tabs_from_labels(" | ")).len(), 4);
        assert_eq!(ids(&tabs_from_labels("Same|same|SAME")), vec!["same", "same-2", "same-3"]);
        let odd = tabs_from_labels("!!!|2024");
        assert_eq!(ids(&odd), vec!["tab-1", "2024"]);
        assert_eq!(odd[1].var, "tab2Html");
    }

    #[test]
    fn t_tabs_output() {
        let mut p = ParameterMap::new();
        p.insert("labels", "A B|C D");
        let text = tabs(&p).to_template_text();
        assert_eq!(text.matches("{% set ").count(), 2);
        assert_eq!(text.matches("{% endset %}").count(), 2);
        assert_eq!(text.matches("govukTabs(").count(), 1);
        assert!(text.contains(
            "{% set aBHtml %}\n<h2 class=\"govuk-heading-l\">{{ \"A B\" | escape }}</h2>\n{{ govukTable({"));
        let call = &text[text.find("{{ govukTabs(").unwrap()..];
        assert_eq!(call.matches("label: ").count(), 2);
        assert!(call.contains("id: \"a-b\""));
        assert!(call.contains("id: \"c-d\""));
        assert!(call.contains("html: aBHtml"));
        assert!(call.contains("html: cDHtml"));
        assert!(call.ends_with("}) }}"));
    }

    #[test]
    fn t_tabs_label_is_escaped() {
        let mut p = ParameterMap::new();
        p.insert("labels", "<b>Bold</b>");
        let text = tabs(&p).to_template_text();
        assert!(text.contains("<h2 class=\"govuk-heading-l\">{{ \"<b>Bold</b>\" | escape }}</h2>"));
        assert!(text.contains("label: \"<b>Bold</b>\""));
        assert!(text.contains("id: \"b-bold-b\""));
    }

    #[test]
    fn t_tabs_label_template_syntax_stays_quoted() {
        let mut p = ParameterMap::new();
        p.insert("labels", "X {% endset %}{% set injected %}|Y {{ 7*7 }}");
        let text = tabs(&p).to_template_text();
        assert_eq!(text.lines().filter(|l| l.starts_with("{% set ")).count(), 2, "{text}");
        assert_eq!(text.lines().filter(|l| *l == "{% endset %}").count(), 2);
        assert!(!text.contains("\"govuk-heading-l\">X"));
        assert!(text.contains(
            "<h2 class=\"govuk-heading-l\">{{ \"X {% endset %}{% set injected %}\" | escape }}</h2>"));
        assert!(text.contains("{{ \"Y {{ 7*7 }}\" | escape }}"));
    }

    #[test]
    fn t_tabs_vars_are_unique() {
        let vars = |labels: &str| -> Vec<String> {
            tabs_from_labels(labels).into_iter().map(|t| t.var).collect()
        };
        assert_eq!(vars("A B2|A B 2"), vec!["aB2Html", "aB22Html"]);
        assert_eq!(vars("2024|Tab 1"), vec!["tab1Html", "tab12Html"]);
        assert_eq!(vars("x|x2|X"), vec!["xHtml", "x2Html", "x22Html"]);
    }
}
