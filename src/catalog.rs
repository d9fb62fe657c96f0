//! The static list catalog.
//!
//! Data is compiled in — this app exists to demonstrate sorted rendering,
//! not storage. Lists are addressed by slug.

use serde::Serialize;

/// A named list of items, addressed by slug.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct List {
    pub slug: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

const LISTS: &[List] = &[
    List {
        slug: "fruits",
        title: "Fruits",
        items: &["banana", "apple", "cherry", "date"],
    },
    List {
        slug: "colors",
        title: "Colors",
        items: &["red", "green", "blue", "amber"],
    },
    List {
        slug: "mountains",
        title: "Mountains",
        items: &["Denali", "Aconcagua", "Everest", "Kilimanjaro"],
    },
];

/// Looks up a list by slug. Slugs are exact and case-sensitive.
pub fn find(slug: &str) -> Option<&'static List> {
    LISTS.iter().find(|l| l.slug == slug)
}

/// Every list, in catalog order.
pub fn all() -> &'static [List] {
    LISTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_known_slug() {
        let list = find("fruits").unwrap();
        assert_eq!(list.title, "Fruits");
        assert!(list.items.contains(&"apple"));
    }

    #[test]
    fn find_unknown_slug() {
        assert!(find("nope").is_none());
        // case-sensitive
        assert!(find("Fruits").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in all().iter().enumerate() {
            for b in &all()[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
