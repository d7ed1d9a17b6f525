//! The nested option structure passed as the argument of a macro
//! call.

use kstring::KString;
use serde_json::{Number, Value};

/// A value inside a macro call literal.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionObject {
    Str(String),
    Bool(bool),
    Num(Number),
    Null,
    /// Bare reference to a template variable (e.g. one set with
    /// `{% set fooHtml %}`). Must be an identifier.
    Var(KString),
    List(Vec<OptionObject>),
    Map(Fields),
}

/// Ordered fields of a map value. Setting a key that is already
/// present replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Vec<(KString, OptionObject)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &'static str, val: impl Into<OptionObject>) -> Self {
        self.set(KString::from_static(key), val.into());
        self
    }

    /// Adds the field only when `val` is `Some`.
    pub fn opt_field<V: Into<OptionObject>>(self, key: &'static str, val: Option<V>) -> Self {
        match val {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    /// `key: true` if `cond` holds, nothing otherwise.
    pub fn flag_field(self, key: &'static str, cond: bool) -> Self {
        self.opt_field(key, cond.then(|| true))
    }

    pub fn set(&mut self, key: KString, val: OptionObject) {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = val;
        } else {
            self.0.push((key, val));
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionObject> {
        self.0.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionObject)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl OptionObject {
    pub fn var(name: &str) -> Self {
        OptionObject::Var(KString::from_ref(name))
    }

    pub fn as_map(&self) -> Option<&Fields> {
        match self {
            OptionObject::Map(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[OptionObject]> {
        match self {
            OptionObject::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionObject::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Follow a path of map keys.
    pub fn lookup(&self, path: &[&str]) -> Option<&OptionObject> {
        path.iter().try_fold(self, |v, key| v.as_map()?.get(key))
    }
}

/// `{ text: "..." }`, the shape of labels, hints and most other text
/// slots of the components.
pub fn text(s: impl Into<String>) -> OptionObject {
    Fields::new().field("text", s.into()).into()
}

pub fn list<T>(items: impl IntoIterator<Item = T>) -> OptionObject
where T: Into<OptionObject>
{
    OptionObject::List(items.into_iter().map(Into::into).collect())
}

impl From<&str> for OptionObject {
    fn from(s: &str) -> Self {
        OptionObject::Str(s.to_string())
    }
}

impl From<String> for OptionObject {
    fn from(s: String) -> Self {
        OptionObject::Str(s)
    }
}

impl From<bool> for OptionObject {
    fn from(b: bool) -> Self {
        OptionObject::Bool(b)
    }
}

impl From<i64> for OptionObject {
    fn from(n: i64) -> Self {
        OptionObject::Num(n.into())
    }
}

impl From<u32> for OptionObject {
    fn from(n: u32) -> Self {
        OptionObject::Num(n.into())
    }
}

/// Object keys keep the order they had in the JSON text.
impl From<Value> for OptionObject {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => OptionObject::Null,
            Value::Bool(b) => OptionObject::Bool(b),
            Value::Number(n) => OptionObject::Num(n),
            Value::String(s) => OptionObject::Str(s),
            Value::Array(items) => list(items),
            Value::Object(map) => {
                let mut fields = Fields::new();
                for (k, v) in map {
                    fields.set(KString::from_string(k), v.into());
                }
                OptionObject::Map(fields)
            }
        }
    }
}

impl From<Fields> for OptionObject {
    fn from(fields: Fields) -> Self {
        OptionObject::Map(fields)
    }
}

impl From<Vec<OptionObject>> for OptionObject {
    fn from(items: Vec<OptionObject>) -> Self {
        OptionObject::List(items)
    }
}
