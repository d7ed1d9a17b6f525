//! Form inputs.

use crate::items::{ChoiceItem, items_or};
use crate::literal::quote_str;
use crate::option_object::{Fields, list, text};
use crate::params::ParameterMap;

use super::Fragment;

fn legend(s: &str, is_page_heading: Option<bool>) -> Fields {
    Fields::new()
        .field("legend", Fields::new()
               .field("text", s)
               .opt_field("isPageHeading", is_page_heading)
               .field("classes", "govuk-fieldset__legend--m"))
}

pub fn input_text(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukInput",
        Fields::new()
            .field("id", q.get_or("id", "full-name"))
            .field("name", q.get_or("name", "full-name"))
            .field("label", text(q.get_or("label", "Full name")))
            .field("hint", text(q.get_or("hint", "As shown on your passport")))
            .field("autocomplete", q.get_or("autocomplete", "name")))
}

fn default_radio_items(yes_no: bool) -> Vec<ChoiceItem> {
    if yes_no {
        vec![ChoiceItem::new("yes", "Yes"), ChoiceItem::new("no", "No")]
    } else {
        vec![ChoiceItem::new("option-1", "Option 1"), ChoiceItem::new("option-2", "Option 2")]
    }
}

pub fn radios(q: &ParameterMap) -> Fragment {
    let items = items_or(q, "items", || default_radio_items(q.flag("yn")));
    Fragment::call(
        "govukRadios",
        Fields::new()
            .field("idPrefix", q.get_or("idPrefix", "choices"))
            .field("name", q.get_or("name", "choices"))
            .field("fieldset", legend(q.get_or("legend", "Choose one option"), Some(false)))
            .field("items", items))
}

fn default_checkbox_items() -> Vec<ChoiceItem> {
    vec![
        ChoiceItem::new("wheelchair-access", "Wheelchair access"),
        ChoiceItem::new("hearing-loop", "Hearing loop"),
        ChoiceItem::new("interpreter", "Interpreter"),
    ]
}

pub fn checkboxes(q: &ParameterMap) -> Fragment {
    let items = items_or(q, "items", default_checkbox_items);
    Fragment::call(
        "govukCheckboxes",
        Fields::new()
            .field("idPrefix", q.get_or("idPrefix", "support-needs"))
            .field("name", q.get_or("name", "support-needs"))
            .field("fieldset", legend(q.get_or("legend", "Do you need any support?"),
                                      Some(false)))
            .field("hint", text(q.get_or("hint", "Select all that apply")))
            .field("items", items))
}

fn date_input_fields(q: &ParameterMap) -> Fields {
    Fields::new()
        .field("id", q.get_or("id", "date-of-birth"))
        .field("namePrefix", q.get_or("namePrefix", "dob"))
        .field("fieldset", legend(q.get_or("legend", "What is your date of birth?"), None))
        .field("hint", text(q.get_or("hint", "For example, 27 3 2007")))
}

pub fn date_input(q: &ParameterMap) -> Fragment {
    Fragment::call("govukDateInput", date_input_fields(q))
}

/// The date input as shown after failed validation: error message and
/// all three fields marked.
pub fn date_input_error(q: &ParameterMap) -> Fragment {
    let part = |name: &str, width: u8| {
        Fields::new()
            .field("classes", format!("govuk-input--width-{width} govuk-input--error"))
            .field("name", name.to_string())
    };
    Fragment::call(
        "govukDateInput",
        date_input_fields(q)
            .field("errorMessage", text(q.get_or("error", "Date of birth must be in the past")))
            .field("items", list([part("day", 2), part("month", 2), part("year", 4)])))
}

/// Positive integer, or `None`.
fn parse_rows(q: &ParameterMap) -> Option<i64> {
    q.get("rows")?.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

pub fn textarea(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukTextarea",
        Fields::new()
            .field("name", q.get_or("name", "more-detail"))
            .field("id", q.get_or("id", "more-detail"))
            .opt_field("rows", parse_rows(q))
            .field("label", Fields::new()
                   .field("text", q.get_or("label", "Can you provide more detail?"))
                   .field("classes", "govuk-label--l")
                   .field("isPageHeading", true))
            .field("hint", text(q.get_or(
                "hint",
                "Do not include personal or financial information, like your \
                 National Insurance number or credit card details."))))
}

pub fn password_input(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukPasswordInput",
        Fields::new()
            .field("id", q.get_or("id", "password"))
            .field("name", q.get_or("name", "password"))
            .field("label", text(q.get_or("label", "Password")))
            .opt_field("hint", q.get("hint").map(|h| text(h)))
            .field("autocomplete", q.get_or("autocomplete", "current-password")))
}

pub fn file_upload(q: &ParameterMap) -> Fragment {
    Fragment::call(
        "govukFileUpload",
        Fields::new()
            .field("id", q.get_or("id", "file-upload-1"))
            .field("name", q.get_or("name", "file-upload-1"))
            .field("label", text(q.get_or("label", "Upload a file")))
            .opt_field("hint", q.get("hint").map(|h| text(h))))
}

/// Written out as a `{% call %}` block around a fixed set of address
/// inputs; only the legend is taken from the parameters.
pub fn fieldset(q: &ParameterMap) -> Fragment {
    let legend = quote_str(q.get_or("legend", "What is your address?"));
    Fragment::Text(format!(
        r#"{{% call govukFieldset({{
  legend: {{
    text: {legend},
    classes: "govuk-fieldset__legend--l",
    isPageHeading: true
  }}
}}) %}}

  {{{{ govukInput({{
    label: {{ text: "Address line 1" }},
    id: "address-line-1",
    name: "addressLine1",
    autocomplete: "address-line1"
  }}) }}}}

  {{{{ govukInput({{
    label: {{ text: "Address line 2 (optional)" }},
    id: "address-line-2",
    name: "addressLine2",
    autocomplete: "address-line2"
  }}) }}}}

  {{{{ govukInput({{
    label: {{ text: "Town or city" }},
    classes: "govuk-!-width-two-thirds",
    id: "address-town",
    name: "addressTown",
    autocomplete: "address-level2"
  }}) }}}}

  {{{{ govukInput({{
    label: {{ text: "Postcode" }},
    classes: "govuk-input--width-10",
    id: "address-postcode",
    name: "addressPostcode",
    autocomplete: "postal-code"
  }}) }}}}

{{% endcall %}}"#))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_object::OptionObject;

    fn params(pairs: &[(&str, &str)]) -> ParameterMap {
        pairs.iter().copied().collect()
    }

    fn item_values(f: &Fragment) -> Vec<String> {
        f.options().unwrap().lookup(&["items"]).unwrap().as_list().unwrap()
            .iter()
            .map(|i| i.lookup(&["value"]).and_then(OptionObject::as_str).unwrap().to_string())
            .collect()
    }

    #[test]
    fn t_radios_defaults() {
        assert_eq!(item_values(&radios(&ParameterMap::new())), vec!["option-1", "option-2"]);
        assert_eq!(item_values(&radios(&params(&[("yn", "true")]))), vec!["yes", "no"]);
    }

    #[test]
    fn t_radios_malformed_items_equal_absent() {
        for bad in ["[{\"value\":", "[]", "{\"value\":\"a\",\"text\":\"A\"}", "42"] {
            assert_eq!(radios(&params(&[("items", bad)])), radios(&ParameterMap::new()));
            assert_eq!(radios(&params(&[("items", bad), ("yn", "true")])),
                       radios(&params(&[("yn", "true")])));
        }
    }

    #[test]
    fn t_radios_items_json() {
        let f = radios(&params(&[
            ("items", r#"[{"value":"email","text":"Email"},{"value":"post","text":"Post"},{"value":"phone","text":"Phone"}]"#),
            ("yn", "true"),
            ("legend", "How should we contact you?"),
        ]));
        assert_eq!(item_values(&f), vec!["email", "post", "phone"]);
        let text = f.to_template_text();
        assert!(text.contains("text: \"How should we contact you?\""));
        assert!(text.contains("isPageHeading: false"));
    }

    #[test]
    fn t_radios_pass_govuk_item_shapes_through() {
        let f = radios(&params(&[
            ("items", r#"[{"value":"yes","text":"Yes","hint":{"text":"Pick me"}},{"divider":"or"},{"value":"no","text":"No"}]"#),
        ]));
        let items = f.options().unwrap().lookup(&["items"]).unwrap().as_list().unwrap();
        assert_eq!(items.len(), 3);
        let text = f.to_template_text();
        assert!(text.contains("hint: {\n        text: \"Pick me\"\n      }"), "{text}");
        assert!(text.contains("divider: \"or\""));
        assert!(!text.contains("option-1"));
    }

    #[test]
    fn t_checkboxes() {
        assert_eq!(item_values(&checkboxes(&ParameterMap::new())),
                   vec!["wheelchair-access", "hearing-loop", "interpreter"]);
        let f = checkboxes(&params(&[("items", r#"[{"value":"a","text":"A","checked":true}]"#)]));
        assert_eq!(item_values(&f), vec!["a"]);
        assert!(f.to_template_text().contains("checked: true"));
    }

    #[test]
    fn t_date_input_error() {
        let f = date_input_error(&params(&[("error", "Enter a real date")]));
        let o = f.options().unwrap();
        assert_eq!(o.lookup(&["errorMessage", "text"]).and_then(OptionObject::as_str),
                   Some("Enter a real date"));
        assert_eq!(o.lookup(&["namePrefix"]).and_then(OptionObject::as_str), Some("dob"));
        let items = o.lookup(&["items"]).unwrap().as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].lookup(&["classes"]).and_then(OptionObject::as_str),
                   Some("govuk-input--width-4 govuk-input--error"));
        assert!(date_input(&ParameterMap::new()).options().unwrap()
                .lookup(&["errorMessage"]).is_none());
    }

    #[test]
    fn t_textarea_rows() {
        let rows = |v: &str| textarea(&params(&[("rows", v)]))
            .options().unwrap().lookup(&["rows"]).cloned();
        assert_eq!(rows("8"), Some(OptionObject::from(8i64)));
        assert_eq!(rows("eight"), None);
        assert_eq!(rows("-2"), None);
    }

    #[test]
    fn t_optional_hints() {
        assert!(password_input(&ParameterMap::new()).options().unwrap()
                .lookup(&["hint"]).is_none());
        let f = file_upload(&params(&[("hint", "PDF only")]));
        assert_eq!(f.options().unwrap().lookup(&["hint", "text"]).and_then(OptionObject::as_str),
                   Some("PDF only"));
    }

    #[test]
    fn t_fieldset_text() {
        let text = fieldset(&params(&[("legend", "Where do you \"live\"?")])).to_template_text();
        assert!(text.starts_with("{% call govukFieldset({\n  legend: {\n    text: \"Where do you \\\"live\\\"?\","));
        assert!(text.ends_with("{% endcall %}"));
        assert_eq!(text.matches("govukInput(").count(), 4);
    }
}
