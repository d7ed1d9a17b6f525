use std::collections::BTreeMap;

use kstring::KString;

use crate::path::path_segments;


/// Allow multiple entries per path; they shall be tried in
/// sequence. A lookup picks the longest registered path that is a
/// prefix of the request path, and hands on the rest.
#[derive(Debug)]
pub struct MultiRouter<T>(BTreeMap<Vec<KString>, Vec<T>>);

impl<T> Default for MultiRouter<T> {
    fn default() -> Self {
        MultiRouter(BTreeMap::new())
    }
}

impl<T> MultiRouter<T> {
    pub fn new() -> MultiRouter<T> {
        Self::default()
    }

    /// Using path *strings*, and chaining.
    pub fn add(&mut self, path: &str, val: T) -> &mut Self {
        let key: Vec<KString> = path_segments(path).map(KString::from_ref).collect();
        self.0.entry(key).or_default().push(val);
        self
    }

    pub fn get<'p, S: AsRef<str>>(
        &self,
        path: &'p [S]
    ) -> Option<(&[T], &'p [S])>
    {
        (0..=path.len()).rev().find_map(|n| {
            let prefix: Vec<KString> = path[..n].iter()
                .map(|s| KString::from_ref(s.as_ref()))
                .collect();
            self.0.get(&prefix).map(|vals| (vals.as_slice(), &path[n..]))
        })
    }

    /// All entries, ordered by path, and in insertion order for the
    /// same path.
    pub fn iter(&self) -> impl Iterator<Item = (Vec<&str>, &T)> {
        self.0.iter().flat_map(|(path, vals)| {
            vals.iter().map(move |val| (path.iter().map(KString::as_str).collect(), val))
        })
    }
}
