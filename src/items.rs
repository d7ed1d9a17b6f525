//! Item lists that can be passed in as JSON text in a parameter, and
//! the record types they are made of.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::option_object::{Fields, OptionObject, text};
use crate::params::ParameterMap;

fn parse_array(params: &ParameterMap, key: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(params.get(key)?).ok()? {
        Value::Array(items) if !items.is_empty() => Some(items),
        _ => None,
    }
}

/// Parse parameter `key` as a non-empty JSON array and take its
/// elements as they are. `None` if the parameter is absent, is not
/// valid JSON, is not an array, or is empty.
pub fn parse_items(params: &ParameterMap, key: &str) -> Option<Vec<OptionObject>> {
    parse_array(params, key).map(|items| items.into_iter().map(OptionObject::from).collect())
}

/// `parse_items`, falling back to the records from `default()`.
pub fn items_or<T: ToOptionObject>(
    params: &ParameterMap,
    key: &str,
    default: impl FnOnce() -> Vec<T>
) -> OptionObject {
    match parse_items(params, key) {
        Some(items) => OptionObject::List(items),
        None => items_list(&default()),
    }
}

/// Like `parse_items`, but every element must have the shape of `T`.
pub fn parse_records<T: DeserializeOwned>(params: &ParameterMap, key: &str) -> Option<Vec<T>> {
    parse_array(params, key)?
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()
        .ok()
}

/// `parse_records`, falling back to `default()`.
pub fn records_or<T: DeserializeOwned + ToOptionObject>(
    params: &ParameterMap,
    key: &str,
    default: impl FnOnce() -> Vec<T>
) -> OptionObject {
    items_list(&parse_records(params, key).unwrap_or_else(default))
}

/// Conversion of an item record to its place in the macro options.
pub trait ToOptionObject {
    fn to_option_object(&self) -> OptionObject;
}

pub fn items_list<T: ToOptionObject>(items: &[T]) -> OptionObject {
    OptionObject::List(items.iter().map(ToOptionObject::to_option_object).collect())
}

// ------------------------------------------------------------------

/// A radio button or checkbox.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceItem {
    pub value: String,
    pub text: String,
    pub checked: bool,
}

impl ChoiceItem {
    pub fn new(value: &str, text: &str) -> Self {
        ChoiceItem {
            value: value.into(),
            text: text.into(),
            checked: false,
        }
    }
}

impl ToOptionObject for ChoiceItem {
    fn to_option_object(&self) -> OptionObject {
        Fields::new()
            .field("value", self.value.as_str())
            .field("text", self.text.as_str())
            .flag_field("checked", self.checked)
            .into()
    }
}

/// A link with text, as used by breadcrumbs.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkItem {
    pub text: String,
    pub href: String,
}

impl LinkItem {
    pub fn new(text: &str, href: &str) -> Self {
        LinkItem { text: text.into(), href: href.into() }
    }
}

impl ToOptionObject for LinkItem {
    fn to_option_object(&self) -> OptionObject {
        Fields::new()
            .field("text", self.text.as_str())
            .field("href", self.href.as_str())
            .into()
    }
}

/// A service navigation entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItem {
    pub text: String,
    pub href: String,
    pub active: bool,
}

impl ToOptionObject for NavigationItem {
    fn to_option_object(&self) -> OptionObject {
        Fields::new()
            .field("href", self.href.as_str())
            .field("text", self.text.as_str())
            .flag_field("active", self.active)
            .into()
    }
}

/// A numbered page link for pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct PageItem {
    pub number: u32,
    pub href: String,
    pub current: bool,
}

impl ToOptionObject for PageItem {
    fn to_option_object(&self) -> OptionObject {
        Fields::new()
            .field("number", self.number)
            .field("href", self.href.as_str())
            .flag_field("current", self.current)
            .into()
    }
}

/// Heading or content of an accordion section: plain text, or an
/// object such as `{"html": "..."}` taken as it is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextSlot {
    Plain(String),
    Slot(serde_json::Map<String, Value>),
}

impl ToOptionObject for TextSlot {
    fn to_option_object(&self) -> OptionObject {
        match self {
            TextSlot::Plain(s) => text(s.as_str()),
            TextSlot::Slot(map) => Value::Object(map.clone()).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccordionSection {
    pub heading: TextSlot,
    pub content: TextSlot,
}

impl AccordionSection {
    pub fn new(heading: &str, content: &str) -> Self {
        AccordionSection {
            heading: TextSlot::Plain(heading.into()),
            content: TextSlot::Plain(content.into()),
        }
    }
}

impl ToOptionObject for AccordionSection {
    fn to_option_object(&self) -> OptionObject {
        Fields::new()
            .field("heading", self.heading.to_option_object())
            .field("content", self.content.to_option_object())
            .into()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::render;

    fn params(items: &str) -> ParameterMap {
        let mut p = ParameterMap::new();
        p.insert("items", items);
        p
    }

    #[test]
    fn t_parse_items_takes_any_shape() {
        let p = params(r#"[{"value":"yes","text":"Yes","hint":{"text":"Pick me"}},{"divider":"or"},{"value":2,"text":"No","conditional":{"html":"<p>x</p>"},"disabled":true}]"#);
        let items = parse_items(&p, "items").unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].lookup(&["hint", "text"]).and_then(OptionObject::as_str),
                   Some("Pick me"));
        assert_eq!(items[1].lookup(&["divider"]).and_then(OptionObject::as_str), Some("or"));
        assert_eq!(items[2].lookup(&["value"]), Some(&OptionObject::from(2i64)));
        assert_eq!(items[2].lookup(&["disabled"]), Some(&OptionObject::Bool(true)));
        assert_eq!(render(&items[2]), "\
{
  value: 2,
  text: \"No\",
  conditional: {
    html: \"<p>x</p>\"
  },
  disabled: true
}");
    }

    #[test]
    fn t_parse_items_rejects() {
        for bad in ["not json", "{}", "[]", r#"{"value":"a","text":"b"}"#, "42", "[{\"value\":"] {
            assert_eq!(parse_items(&params(bad), "items"), None, "{bad}");
        }
        assert_eq!(parse_items(&ParameterMap::new(), "items"), None);
    }

    #[test]
    fn t_items_or() {
        let v = items_or(&params("[oops"), "items", || vec![LinkItem::new("Home", "/")]);
        assert_eq!(v, items_list(&[LinkItem::new("Home", "/")]));
    }

    #[test]
    fn t_parse_records() {
        let p = params(r#"[{"heading":"One","content":{"html":"<b>1</b>"}}]"#);
        let sections: Vec<AccordionSection> = parse_records(&p, "items").unwrap();
        let o = sections[0].to_option_object();
        assert_eq!(o.lookup(&["heading", "text"]).and_then(OptionObject::as_str), Some("One"));
        assert_eq!(o.lookup(&["content", "html"]).and_then(OptionObject::as_str),
                   Some("<b>1</b>"));
        let bad = params(r#"[{"heading":"One","content":"x"},{"title":"Two"}]"#);
        assert_eq!(parse_records::<AccordionSection>(&bad, "items"), None);
    }

    #[test]
    fn t_choice_item_fields() {
        let mut item = ChoiceItem::new("a", "A");
        let o = item.to_option_object();
        assert!(o.lookup(&["checked"]).is_none());
        item.checked = true;
        let o = item.to_option_object();
        assert_eq!(o.lookup(&["checked"]), Some(&OptionObject::Bool(true)));
    }
}
