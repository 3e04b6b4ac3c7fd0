//! Shared list-screen filtering primitives.
//!
//! Every list (invoices, clients, payments) combines a free-text search with an
//! optional exact-match status/method selector.

/// Case-insensitive substring search term.
///
/// An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `haystack` contains the term, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0)
    }

    /// True when any of the given fields contains the term.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.0.is_empty() || fields.into_iter().any(|f| self.matches(f))
    }
}

/// `all` or a single selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_matches_everything() {
        let term = SearchTerm::new("");
        assert!(term.is_empty());
        assert!(term.matches(""));
        assert!(term.matches_any(std::iter::empty()));
    }

    #[test]
    fn matching_ignores_case() {
        let term = SearchTerm::new("ACME");
        assert!(term.matches("Acme Corporation"));
        assert!(!term.matches("TechStart Inc"));
        assert!(term.matches_any(["nope", "billing@acme.com"]));
    }

    #[test]
    fn selection_all_admits_any_value() {
        assert!(Selection::<u8>::All.admits(&3));
        assert!(Selection::Only(3u8).admits(&3));
        assert!(!Selection::Only(3u8).admits(&4));
    }
}
