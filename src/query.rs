//! Decoded query-parameter bag.
//!
//! A URL query string may repeat a key (`?tag=a&tag=b`), so a key maps to
//! either one string or an ordered sequence of strings. [`QueryValue`] makes
//! that shape explicit — callers pattern-match instead of guessing whether
//! a lookup returned "the value" or "the first value".
//!
//! A [`Query`] is built fresh from the raw query string on every request and
//! dropped with it. No identity, no lifecycle.

use std::collections::HashMap;

/// The value(s) a query key decoded to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QueryValue {
    /// The key appeared exactly once. A key with no `=` decodes to `Single("")`.
    Single(String),
    /// The key appeared more than once; values keep their wire order.
    Multiple(Vec<String>),
}

/// The decoded set of key/value pairs following `?` in a URL.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query {
    params: HashMap<String, QueryValue>,
}

impl Query {
    /// Decodes `raw` — the part of the URL after `?`, without the `?` itself.
    ///
    /// Percent-escapes and `+`-as-space are handled by [`form_urlencoded`].
    /// An empty string yields an empty bag.
    pub fn parse(raw: &str) -> Self {
        let mut params: HashMap<String, QueryValue> = HashMap::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let value = value.into_owned();
            match params.entry(key.into_owned()) {
                std::collections::hash_map::Entry::Vacant(e) => {
                    e.insert(QueryValue::Single(value));
                }
                std::collections::hash_map::Entry::Occupied(mut e) => {
                    let slot = e.get_mut();
                    match slot {
                        QueryValue::Single(first) => {
                            let first = std::mem::take(first);
                            *slot = QueryValue::Multiple(vec![first, value]);
                        }
                        QueryValue::Multiple(all) => all.push(value),
                    }
                }
            }
        }
        Self { params }
    }

    /// Returns the decoded value(s) for `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// Returns the value for `key` only when it appeared exactly once.
    ///
    /// `None` for an absent key *and* for a repeated key — callers that want
    /// to distinguish the two use [`Query::get`].
    pub fn single(&self, key: &str) -> Option<&str> {
        match self.params.get(key) {
            Some(QueryValue::Single(v)) => Some(v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_empty_bag() {
        assert!(Query::parse("").is_empty());
    }

    #[test]
    fn single_pair() {
        let q = Query::parse("sortOrder=desc");
        assert_eq!(q.get("sortOrder"), Some(&QueryValue::Single("desc".into())));
        assert_eq!(q.single("sortOrder"), Some("desc"));
    }

    #[test]
    fn key_without_equals_decodes_to_empty_single() {
        let q = Query::parse("flag");
        assert_eq!(q.get("flag"), Some(&QueryValue::Single(String::new())));
    }

    #[test]
    fn repeated_key_collapses_to_multiple_in_order() {
        let q = Query::parse("tag=a&tag=b&tag=c");
        assert_eq!(
            q.get("tag"),
            Some(&QueryValue::Multiple(vec!["a".into(), "b".into(), "c".into()]))
        );
        assert_eq!(q.single("tag"), None);
    }

    #[test]
    fn percent_and_plus_decoding() {
        let q = Query::parse("name=red+%26+blue");
        assert_eq!(q.single("name"), Some("red & blue"));
    }

    #[test]
    fn absent_key() {
        let q = Query::parse("a=1");
        assert_eq!(q.get("b"), None);
        assert_eq!(q.single("b"), None);
    }
}
