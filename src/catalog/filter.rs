//! Pure filtering over the catalog: free-text query, cadence, and
//! engagement kind, combined with logical AND.

use super::item::{Cadence, CatalogItem, EngagementKind};

/// What to narrow the catalog by. `None` means "all" for the two
/// enum predicates; an empty (or whitespace) query matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub query: String,
    pub cadence: Option<Cadence>,
    pub kind: Option<EngagementKind>,
}

impl FilterSpec {
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty() && self.cadence.is_none() && self.kind.is_none()
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        let query = self.query.trim().to_lowercase();
        let match_query = query.is_empty() || item.search_haystack().contains(&query);
        let match_cadence = self.cadence.map_or(true, |c| item.cadence == c);
        let match_kind = self.kind.map_or(true, |k| item.kind == k);
        match_query && match_cadence && match_kind
    }
}

/// Returns the ordered subsequence of `items` satisfying `spec`.
/// Original relative order is preserved; no match yields an empty vec.
pub fn filter<'a>(items: &'a [CatalogItem], spec: &FilterSpec) -> Vec<&'a CatalogItem> {
    items.iter().filter(|item| spec.matches(item)).collect()
}
