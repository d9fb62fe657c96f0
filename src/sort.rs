//! Sort direction and its resolution from a query bag.
//!
//! The wire contract is one parameter with a two-word vocabulary:
//!
//! | Parameter | Value | Meaning |
//! |---|---|---|
//! | `sortOrder` | `desc` | descending order |
//! | `sortOrder` | anything else, or absent | ascending order |
//!
//! [`SortOrder::resolve`] is the whole decision procedure: total over any
//! bag, deterministic, no I/O, never panics.

use crate::query::{Query, QueryValue};

/// The two-valued comparison direction for a displayed list.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// The query key the direction travels under.
pub const SORT_ORDER_KEY: &str = "sortOrder";

impl SortOrder {
    /// Resolves the direction from a query bag.
    ///
    /// `Descending` iff the bag holds `sortOrder` as a single value that is
    /// exactly `"desc"`. Everything else — key absent, empty string, any
    /// other token, or a repeated `sortOrder` key — is `Ascending`. A
    /// repeated key is never inspected element-wise, so a URL that repeats
    /// `sortOrder=desc` twice still sorts ascending.
    pub fn resolve(query: &Query) -> Self {
        match query.get(SORT_ORDER_KEY) {
            Some(QueryValue::Single(v)) if v == "desc" => Self::Descending,
            Some(QueryValue::Single(_)) | Some(QueryValue::Multiple(_)) | None => Self::Ascending,
        }
    }

    /// The wire token (`"asc"` / `"desc"`).
    pub fn token(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// The opposite direction — what a toggle control links to.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Sorts `items` in this direction.
    pub fn sort<T: Ord>(self, items: &mut [T]) {
        match self {
            Self::Ascending => items.sort(),
            Self::Descending => items.sort_by(|a, b| b.cmp(a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: &str) -> SortOrder {
        SortOrder::resolve(&Query::parse(raw))
    }

    #[test]
    fn absent_key_is_ascending() {
        assert_eq!(resolve(""), SortOrder::Ascending);
    }

    #[test]
    fn desc_token_is_descending() {
        assert_eq!(resolve("sortOrder=desc"), SortOrder::Descending);
    }

    #[test]
    fn asc_token_is_ascending() {
        assert_eq!(resolve("sortOrder=asc"), SortOrder::Ascending);
    }

    #[test]
    fn unrecognized_token_is_ascending() {
        assert_eq!(resolve("sortOrder=bogus"), SortOrder::Ascending);
    }

    #[test]
    fn empty_value_is_ascending() {
        assert_eq!(resolve("sortOrder="), SortOrder::Ascending);
        // bare key, no `=`
        assert_eq!(resolve("sortOrder"), SortOrder::Ascending);
    }

    #[test]
    fn repeated_key_is_ascending_even_when_every_value_is_desc() {
        assert_eq!(resolve("sortOrder=desc&sortOrder=desc"), SortOrder::Ascending);
        assert_eq!(resolve("sortOrder=a&sortOrder=b"), SortOrder::Ascending);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(resolve("sortOrder=desc&color=red"), SortOrder::Descending);
        assert_eq!(resolve("color=red"), SortOrder::Ascending);
    }

    #[test]
    fn case_sensitive_token() {
        assert_eq!(resolve("sortOrder=DESC"), SortOrder::Ascending);
        assert_eq!(resolve("sortorder=desc"), SortOrder::Ascending);
    }

    #[test]
    fn resolve_is_deterministic() {
        let q = Query::parse("sortOrder=desc");
        assert_eq!(SortOrder::resolve(&q), SortOrder::resolve(&q));
    }

    #[test]
    fn default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn sort_directions() {
        let mut items = vec!["banana", "apple", "cherry"];
        SortOrder::Ascending.sort(&mut items);
        assert_eq!(items, ["apple", "banana", "cherry"]);
        SortOrder::Descending.sort(&mut items);
        assert_eq!(items, ["cherry", "banana", "apple"]);
    }
}
